// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bootstrap-and-test driver.
//!
//! Runs the whole sequence once: ensure the environment, run every
//! configured suite in order, publish coverage, aggregate.
//!
//! Environment failures abort the run before any suite starts. Suite
//! failures never abort; every suite gets exactly one result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::environment::{
    ActiveEnvironment, DependencySet, EnvironmentDescriptor, Installer, ensure_environment,
};
use crate::error::Result;
use crate::publish::CoveragePublisher;
use crate::runners::{RunnerContext, TestCounts, TestRunResult, TestRunner};
use crate::verbose::VerboseLogger;

/// Coverage data file pytest-cov appends to between suites.
const COVERAGE_DATA_FILE: &str = ".coverage";

/// Outcome of one suite.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
    /// Suite identifier as configured.
    pub suite: String,
    /// Whether the runner exited successfully.
    pub passed: bool,
    /// Failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock time in milliseconds.
    pub total_ms: u64,
    /// Test counts, when the runner reported them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<TestCounts>,
    /// Coverage report present after this suite ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<PathBuf>,
    /// Captured runner output.
    #[serde(skip)]
    pub output: String,
}

impl SuiteResult {
    fn from_run(suite: &str, run: TestRunResult, coverage: Option<PathBuf>) -> Self {
        Self {
            suite: suite.to_string(),
            passed: run.passed,
            error: run.error,
            total_ms: duration_ms(run.total_time),
            counts: run.counts,
            coverage,
            output: run.output,
        }
    }

    fn not_found(suite: &str) -> Self {
        Self {
            suite: suite.to_string(),
            passed: false,
            error: Some(format!("suite path not found: {}", suite)),
            total_ms: 0,
            counts: None,
            coverage: None,
            output: String::new(),
        }
    }
}

/// Aggregated results of a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Environment the suites ran in.
    pub environment: ActiveEnvironment,
    /// One result per configured suite, in declaration order.
    pub suites: Vec<SuiteResult>,
    /// Logical AND of every suite outcome (true for no suites).
    pub passed: bool,
    /// Coverage report left on disk, if any.
    pub coverage: Option<PathBuf>,
    /// Whether the coverage report was handed to the publisher successfully.
    pub coverage_published: bool,
}

impl RunSummary {
    /// Identifiers of failed suites, in declaration order.
    pub fn failed_suites(&self) -> Vec<&str> {
        self.suites
            .iter()
            .filter(|s| !s.passed)
            .map(|s| s.suite.as_str())
            .collect()
    }

    /// Total wall-clock time across suites in milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.suites.iter().map(|s| s.total_ms).sum()
    }
}

/// Drives one bootstrap-and-test run.
///
/// External tools are reached only through the [`Installer`],
/// [`TestRunner`] and [`CoveragePublisher`] capabilities.
pub struct Driver<'a> {
    /// Project root.
    pub root: &'a Path,
    /// Loaded configuration.
    pub config: &'a Config,
    /// Active/target environment.
    pub descriptor: EnvironmentDescriptor,
    /// Dependencies to install.
    pub dependencies: DependencySet,
    pub installer: &'a dyn Installer,
    pub runner: &'a dyn TestRunner,
    pub publisher: &'a dyn CoveragePublisher,
    pub verbose: VerboseLogger,
}

impl Driver<'_> {
    /// Ensure the environment exists and holds the dependency set.
    pub fn ensure_environment(&self) -> Result<ActiveEnvironment> {
        ensure_environment(
            &self.descriptor,
            &self.dependencies,
            self.installer,
            &self.verbose,
        )
    }

    /// Coverage report path, when coverage is enabled.
    fn coverage_report(&self) -> Option<PathBuf> {
        self.config
            .tests
            .coverage
            .then(|| self.root.join(&self.config.tests.coverage_report))
    }

    /// Run one suite. Never fails; problems become a failed result.
    pub fn run_suite(&self, suite: &str, env: &ActiveEnvironment) -> SuiteResult {
        eprintln!("bootrun: running suite {}", suite);

        if !self.root.join(suite).exists() {
            tracing::debug!("suite {} does not exist under {}", suite, self.root.display());
            return SuiteResult::not_found(suite);
        }

        let report = self.coverage_report();
        let ctx = RunnerContext {
            root: self.root,
            env,
            coverage_report: report.as_deref(),
            verbose: &self.verbose,
        };
        let run = self.runner.run(suite, &ctx);
        let coverage = report.filter(|r| r.exists());

        self.verbose.log(&format!(
            "suite {} {} in {}",
            suite,
            if run.passed { "passed" } else { "FAILED" },
            format_duration_ms(duration_ms(run.total_time)),
        ));

        SuiteResult::from_run(suite, run, coverage)
    }

    /// Run the full sequence.
    pub fn run_all(&self) -> Result<RunSummary> {
        self.run_all_with(|_| {})
    }

    /// Run the full sequence, calling `on_suite` as each suite finishes.
    pub fn run_all_with(&self, mut on_suite: impl FnMut(&SuiteResult)) -> Result<RunSummary> {
        self.verbose.section("environment");
        let env = self.ensure_environment()?;
        tracing::debug!("environment ready at {} ({})", env.location.display(), env.origin);

        let suites = &self.config.tests.suites;
        self.verbose.section("suites");
        if !suites.is_empty() {
            self.remove_stale_coverage();
        }

        let mut results = Vec::with_capacity(suites.len());
        for suite in suites {
            let result = self.run_suite(suite, &env);
            if !result.passed {
                eprintln!(
                    "bootrun: suite {} failed: {}",
                    result.suite,
                    result.error.as_deref().unwrap_or("runner reported failure")
                );
            }
            on_suite(&result);
            results.push(result);
        }

        let passed = results.iter().all(|r| r.passed);
        let coverage = self.coverage_report().filter(|r| r.exists());
        let coverage_published = match &coverage {
            Some(report) => self.publish(report),
            None => false,
        };

        Ok(RunSummary {
            environment: env,
            suites: results,
            passed,
            coverage,
            coverage_published,
        })
    }

    /// Hand the report to the publisher. Failures only warn.
    fn publish(&self, report: &Path) -> bool {
        match self.publisher.publish(report) {
            Ok(()) => {
                self.verbose.log(&format!(
                    "coverage report {} handed to publisher {}",
                    report.display(),
                    self.publisher.name()
                ));
                true
            }
            Err(e) => {
                tracing::warn!("coverage publish failed: {}", e);
                eprintln!(
                    "bootrun: warning: coverage upload via {} failed: {}",
                    self.publisher.name(),
                    e
                );
                false
            }
        }
    }

    /// Delete coverage output from earlier runs so `--cov-append` starts clean.
    fn remove_stale_coverage(&self) {
        let Some(report) = self.coverage_report() else {
            return;
        };
        for stale in [report, self.root.join(COVERAGE_DATA_FILE)] {
            match std::fs::remove_file(&stale) {
                Ok(()) => tracing::debug!("removed stale {}", stale.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("could not remove {}: {}", stale.display(), e),
            }
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Format milliseconds as a human-friendly duration string.
///
/// Returns e.g. "450ms" for small values, "3.2s" for values over 3000ms.
pub fn format_duration_ms(ms: u64) -> String {
    if ms > 3000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{}ms", ms)
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
