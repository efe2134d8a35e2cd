// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bootstrap a Python environment and run its test suites
#[derive(Parser)]
#[command(name = "bootrun")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BOOTRUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print each step and command as it runs
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ensure the environment, then run every test suite (default)
    Test(TestArgs),
    /// Ensure the environment and describe it
    Env,
    /// Run pre-commit hooks over all files
    Lint,
}

#[derive(clap::Args, Default)]
pub struct TestArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
