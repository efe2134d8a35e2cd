// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <runner output>
//! <suite>: PASS (12 passed, 450ms)
//! <suite>: FAIL (1 failed, 2.1s)
//!   <error>
//! 1 of 2 suites failed: <suite>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::format_counts;
use crate::color::scheme;
use crate::driver::{RunSummary, SuiteResult, format_duration_ms};
use crate::environment::ActiveEnvironment;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one finished suite: its captured output, then the status line.
    pub fn write_suite(&mut self, result: &SuiteResult) -> std::io::Result<()> {
        if !result.output.is_empty() {
            write!(self.out, "{}", result.output)?;
            if !result.output.ends_with('\n') {
                writeln!(self.out)?;
            }
        }

        self.out.set_color(&scheme::suite_name())?;
        write!(self.out, "{}", result.suite)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        if result.passed {
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "PASS")?;
        } else {
            self.out.set_color(&scheme::fail())?;
            write!(self.out, "FAIL")?;
        }
        self.out.reset()?;

        let time = format_duration_ms(result.total_ms);
        match &result.counts {
            Some(counts) => writeln!(self.out, " ({}, {})", format_counts(counts), time)?,
            None => writeln!(self.out, " ({})", time)?,
        }

        if let Some(error) = &result.error {
            writeln!(self.out, "  {}", error)?;
        }
        Ok(())
    }

    /// Write the final summary line.
    pub fn write_summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        let total = summary.suites.len();
        let failed = summary.failed_suites();

        if let Some(report) = &summary.coverage {
            write!(self.out, "coverage: ")?;
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", report.display())?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        if failed.is_empty() {
            writeln!(
                self.out,
                "{} suite{} passed",
                total,
                if total == 1 { "" } else { "s" }
            )?;
        } else {
            writeln!(
                self.out,
                "{} of {} suite{} failed: {}",
                failed.len(),
                total,
                if total == 1 { "" } else { "s" },
                failed.join(", ")
            )?;
        }
        Ok(())
    }

    /// Describe the environment in use.
    pub fn write_environment(
        &mut self,
        env: &ActiveEnvironment,
        python_versions: &[String],
    ) -> std::io::Result<()> {
        write!(self.out, "environment: ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", env.location.display())?;
        self.out.reset()?;
        writeln!(self.out, " ({})", env.origin)?;
        writeln!(self.out, "python: {}", env.python().display())?;
        if !python_versions.is_empty() {
            writeln!(self.out, "python versions: {}", python_versions.join(", "))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
