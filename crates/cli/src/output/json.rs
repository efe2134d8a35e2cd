// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written once at the end of the run.

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::driver::{RunSummary, SuiteResult};
use crate::environment::EnvironmentOrigin;

/// Environment section of the JSON document.
#[derive(Debug, Serialize)]
pub struct EnvironmentOutput<'a> {
    pub location: &'a Path,
    pub origin: EnvironmentOrigin,
}

/// Complete JSON document for one run.
#[derive(Debug, Serialize)]
pub struct RunOutput<'a> {
    pub timestamp: String,
    pub passed: bool,
    pub environment: EnvironmentOutput<'a>,
    pub python_versions: &'a [String],
    pub suites: &'a [SuiteResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<&'a Path>,
    pub total_ms: u64,
}

/// Build the JSON document with the current timestamp.
pub fn create_output<'a>(summary: &'a RunSummary, python_versions: &'a [String]) -> RunOutput<'a> {
    RunOutput {
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        passed: summary.passed,
        environment: EnvironmentOutput {
            location: &summary.environment.location,
            origin: summary.environment.origin,
        },
        python_versions,
        suites: &summary.suites,
        coverage: summary.coverage.as_deref(),
        total_ms: summary.total_ms(),
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &RunOutput) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
