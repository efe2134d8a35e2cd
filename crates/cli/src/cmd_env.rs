// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Env command implementation.

use bootrun::cli::Cli;
use bootrun::color::resolve_color;
use bootrun::discovery;
use bootrun::env::active_virtualenv;
use bootrun::environment::{
    DependencySet, EnvironmentDescriptor, ensure_environment, installer_for,
};
use bootrun::error::ExitCode;
use bootrun::output::text::TextFormatter;
use bootrun::verbose::VerboseLogger;

/// Ensure the environment and describe it.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = discovery::load_project(cli.config.as_deref(), &cwd)?;
    let config = &project.config;
    let root = project.root.as_path();
    let verbose = VerboseLogger::new(cli.verbose);

    let installer = installer_for(root, &config.environment);
    let descriptor = EnvironmentDescriptor::new(root, &config.environment, active_virtualenv());
    let deps = DependencySet::from_config(root, &config.environment);
    let env = ensure_environment(&descriptor, &deps, installer.as_ref(), &verbose)?;

    let mut formatter = TextFormatter::stdout(resolve_color());
    formatter.write_environment(&env, &config.python_versions)?;
    Ok(ExitCode::Success)
}
