// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command implementation.

use bootrun::cli::Cli;
use bootrun::discovery;
use bootrun::env::active_virtualenv;
use bootrun::environment::{
    DependencySet, EnvironmentDescriptor, ensure_environment, installer_for,
};
use bootrun::error::ExitCode;
use bootrun::lint::{HOOK_RUNNER_PACKAGE, HookContext, PreCommit, run_lint, validate_hook_config};
use bootrun::verbose::VerboseLogger;

/// Run pre-commit hooks over the whole project.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = discovery::load_project(cli.config.as_deref(), &cwd)?;
    let config = &project.config;
    let root = project.root.as_path();
    let verbose = VerboseLogger::new(cli.verbose);

    // Fail on a broken hook config before touching the environment.
    let repos = validate_hook_config(root, &config.lint)?;

    let installer = installer_for(root, &config.environment);
    let descriptor = EnvironmentDescriptor::new(root, &config.environment, active_virtualenv());
    let deps =
        DependencySet::from_config(root, &config.environment).with_package(HOOK_RUNNER_PACKAGE);
    let env = ensure_environment(&descriptor, &deps, installer.as_ref(), &verbose)?;

    let ctx = HookContext {
        root,
        env: &env,
        config: &config.lint,
        verbose: &verbose,
    };
    let passed = run_lint(&ctx, &PreCommit, repos)?;
    Ok(ExitCode::from_outcome(passed))
}
