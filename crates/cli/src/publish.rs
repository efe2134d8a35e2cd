// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage artifact publishing.
//!
//! Publishing happens once per run, after every suite has been attempted,
//! and only when a coverage report exists. Failures are reported as
//! warnings and never change the run's outcome.

use std::path::Path;

use crate::error::Result;

/// Destination for the run's coverage report.
pub trait CoveragePublisher {
    /// Publisher name for logs.
    fn name(&self) -> &'static str;

    /// Publish the coverage report at `report`.
    fn publish(&self, report: &Path) -> Result<()>;
}

/// Publisher that leaves the report on disk and does nothing else.
pub struct NoopPublisher;

impl CoveragePublisher for NoopPublisher {
    fn name(&self) -> &'static str {
        "none"
    }

    fn publish(&self, report: &Path) -> Result<()> {
        tracing::debug!(
            "no coverage publisher configured, keeping {}",
            report.display()
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "publish_tests.rs"]
mod tests;
