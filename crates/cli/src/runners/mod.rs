// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runner framework.
//!
//! A runner executes one suite inside the bootstrapped environment and
//! reports pass/fail from the tool's exit status.

mod pytest;
mod result;

pub use pytest::PytestRunner;
pub use result::{TestCounts, TestRunResult};

use std::path::{Path, PathBuf};

use crate::environment::ActiveEnvironment;
use crate::verbose::VerboseLogger;

/// Context passed to test runners during execution.
pub struct RunnerContext<'a> {
    /// Project root directory (runner working directory).
    pub root: &'a Path,
    /// Environment the suite runs in.
    pub env: &'a ActiveEnvironment,
    /// Coverage report to write, when coverage is enabled.
    pub coverage_report: Option<&'a Path>,
    /// Verbose logger.
    pub verbose: &'a VerboseLogger,
}

/// Trait for pluggable test runners.
pub trait TestRunner {
    /// Runner name (e.g., "pytest").
    fn name(&self) -> &'static str;

    /// Execute one suite and return its result.
    ///
    /// Failures to start the tool are reported as a failed result, never
    /// as an error, so the remaining suites still run.
    fn run(&self, suite: &str, ctx: &RunnerContext) -> TestRunResult;
}

/// Coverage scope for a suite: its parent directory, or `.` at top level.
///
/// `octopus/dsl/ut` measures `octopus/dsl`.
pub fn coverage_scope(suite: &str) -> PathBuf {
    let trimmed = suite.trim_end_matches(['/', '\\']);
    match Path::new(trimmed).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
