// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pytest test runner.
//!
//! Executes a suite with `python -m pytest -v` from the environment,
//! adding pytest-cov flags when a coverage report is requested.

use std::ffi::OsString;
use std::process::Command;
use std::time::Instant;

use super::{RunnerContext, TestCounts, TestRunResult, TestRunner, coverage_scope};
use crate::process::{capture, status_description};

/// Pytest exit code when no tests were collected.
const EXIT_NO_TESTS_COLLECTED: i32 = 5;

/// Pytest runner for Python test suites.
pub struct PytestRunner;

impl PytestRunner {
    /// Build the pytest command for a suite.
    pub fn command(&self, suite: &str, ctx: &RunnerContext) -> Command {
        let mut cmd = Command::new(ctx.env.python());
        cmd.args(["-m", "pytest", "-v"]);

        if let Some(report) = ctx.coverage_report {
            let mut cov = OsString::from("--cov=");
            cov.push(coverage_scope(suite));
            let mut cov_report = OsString::from("--cov-report=xml:");
            cov_report.push(report);
            cmd.arg(cov).arg("--cov-append").arg(cov_report);
        }

        cmd.arg(suite);
        cmd.current_dir(ctx.root);
        cmd
    }
}

impl TestRunner for PytestRunner {
    fn name(&self) -> &'static str {
        "pytest"
    }

    fn run(&self, suite: &str, ctx: &RunnerContext) -> TestRunResult {
        let start = Instant::now();
        let mut cmd = self.command(suite, ctx);
        ctx.verbose.command(&cmd);

        let output = match capture(&mut cmd, "pytest") {
            Ok(out) => out,
            Err(e) => return TestRunResult::failed(start.elapsed(), e.to_string()),
        };

        let total_time = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let counts = parse_pytest_output(&stdout);

        let mut combined = stdout.into_owned();
        if !stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        let result = if output.status.success() {
            TestRunResult::passed(total_time)
        } else {
            let error = match (output.status.code(), counts) {
                (Some(EXIT_NO_TESTS_COLLECTED), _) => "no tests collected".to_string(),
                (_, Some(c)) if c.failed > 0 || c.errors > 0 => failure_summary(&c),
                _ => format!("pytest {}", status_description(output.status)),
            };
            TestRunResult::failed(total_time, error)
        };

        result.with_counts(counts).with_output(combined)
    }
}

/// Short description of failing counts ("2 failed, 1 error").
fn failure_summary(counts: &TestCounts) -> String {
    let mut parts = Vec::new();
    if counts.failed > 0 {
        parts.push(format!("{} failed", counts.failed));
    }
    if counts.errors > 0 {
        parts.push(format!(
            "{} error{}",
            counts.errors,
            if counts.errors == 1 { "" } else { "s" }
        ));
    }
    parts.join(", ")
}

/// Find the last summary line in pytest output and parse its counts.
///
/// Output format:
/// ```text
/// ============================= test session starts ==============================
/// pkg/ut/test_one.py::test_a PASSED                                        [ 50%]
/// pkg/ut/test_one.py::test_b FAILED                                        [100%]
/// ========================= 1 failed, 1 passed in 0.12s ==========================
/// ```
fn parse_pytest_output(stdout: &str) -> Option<TestCounts> {
    stdout.lines().rev().find_map(parse_summary_line)
}

/// Parse summary line for test counts.
///
/// Examples:
/// - "===== 2 passed in 0.68s ====="
/// - "===== 2 passed, 1 failed in 0.68s ====="
/// - "===== 1 failed, 2 passed, 1 skipped, 1 error in 1.00s ====="
fn parse_summary_line(line: &str) -> Option<TestCounts> {
    let line = line.trim().trim_matches('=').trim();
    if !line.contains(" in ") {
        return None;
    }

    let mut counts = TestCounts::default();
    let mut found = false;

    // Look for a number followed by an outcome word
    let words: Vec<&str> = line.split_whitespace().collect();
    for window in words.windows(2) {
        let Ok(n) = window[0].parse::<usize>() else {
            continue;
        };
        let slot = match window[1].trim_end_matches(',') {
            "passed" => &mut counts.passed,
            "failed" => &mut counts.failed,
            "skipped" => &mut counts.skipped,
            "error" | "errors" => &mut counts.errors,
            _ => continue,
        };
        *slot = n;
        found = true;
    }

    found.then_some(counts)
}

#[cfg(test)]
#[path = "pytest_tests.rs"]
mod tests;
