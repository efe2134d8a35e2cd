// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bootstrap a Python environment and run its test suites.
//!
//! The driver ensures one isolated environment, runs each configured
//! suite inside it and folds the outcomes into a single exit status.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod env;
pub mod environment;
pub mod error;
pub mod lint;
pub mod output;
pub mod process;
pub mod publish;
pub mod runners;
pub mod verbose;

pub use cli::{Cli, Command, OutputFormat, TestArgs};
pub use config::Config;
pub use driver::{Driver, RunSummary, SuiteResult};
pub use environment::{
    ActiveEnvironment, DependencySet, EnvironmentDescriptor, EnvironmentOrigin, Installer,
    ensure_environment,
};
pub use error::{Error, ExitCode, Result};
pub use publish::{CoveragePublisher, NoopPublisher};
pub use runners::{PytestRunner, TestRunner};

#[cfg(test)]
pub mod test_utils;
