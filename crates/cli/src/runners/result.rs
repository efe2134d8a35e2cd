// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test run result types.

use std::time::Duration;

use serde::Serialize;

/// Test counts parsed from a runner's summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestCounts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl TestCounts {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }
}

/// Result of running one suite.
#[derive(Debug, Clone)]
pub struct TestRunResult {
    /// Whether the runner exited successfully.
    pub passed: bool,
    /// Error message if failed.
    pub error: Option<String>,
    /// Total wall-clock time.
    pub total_time: Duration,
    /// Test counts, when the summary line was found.
    pub counts: Option<TestCounts>,
    /// Captured runner output (stdout followed by stderr).
    pub output: String,
}

impl TestRunResult {
    /// Create a successful result.
    pub fn passed(total_time: Duration) -> Self {
        Self {
            passed: true,
            error: None,
            total_time,
            counts: None,
            output: String::new(),
        }
    }

    /// Create a failed result.
    pub fn failed(total_time: Duration, error: impl Into<String>) -> Self {
        Self {
            passed: false,
            error: Some(error.into()),
            total_time,
            counts: None,
            output: String::new(),
        }
    }

    /// Attach parsed counts.
    pub fn with_counts(mut self, counts: Option<TestCounts>) -> Self {
        self.counts = counts;
        self
    }

    /// Attach captured output.
    pub fn with_output(mut self, output: String) -> Self {
        self.output = output;
        self
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
