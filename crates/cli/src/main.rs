// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bootrun CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use bootrun::cli::{Cli, Command, TestArgs};
use bootrun::error::ExitCode;

mod cmd_env;
mod cmd_lint;

fn init_logging() {
    let filter = EnvFilter::try_from_env(bootrun::env::bootrun_log_var())
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bootrun: {}", e);
            match e.downcast_ref::<bootrun::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => cmd_test::run(&cli, &TestArgs::default()),
        Some(Command::Test(args)) => cmd_test::run(&cli, args),
        Some(Command::Env) => cmd_env::run(&cli),
        Some(Command::Lint) => cmd_lint::run(&cli),
    }
}
