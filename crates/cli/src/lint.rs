// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-commit hook wrapper.
//!
//! Validates the hook config, installs the git hook, then runs every hook
//! over all files. The hook runner's exit status is the outcome.

use std::path::Path;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::config::LintConfig;
use crate::environment::ActiveEnvironment;
use crate::error::{Error, Result};
use crate::process::run_setup_step;
use crate::verbose::VerboseLogger;

/// Hook config location `pre-commit` uses without `--config`.
const DEFAULT_HOOK_CONFIG: &str = ".pre-commit-config.yaml";

/// Package that provides the hook runner.
pub const HOOK_RUNNER_PACKAGE: &str = "pre-commit";

/// Minimal view of `.pre-commit-config.yaml`.
#[derive(Debug, Deserialize)]
struct HookConfigFile {
    #[serde(default)]
    repos: Vec<serde_yaml::Value>,
}

/// Context passed to hook runners.
pub struct HookContext<'a> {
    pub root: &'a Path,
    pub env: &'a ActiveEnvironment,
    pub config: &'a LintConfig,
    pub verbose: &'a VerboseLogger,
}

/// Installs and runs lint hooks.
pub trait HookRunner {
    /// Runner name (e.g., "pre-commit").
    fn name(&self) -> &'static str;

    /// Install the git hook script.
    fn install(&self, ctx: &HookContext) -> Result<()>;

    /// Run all hooks over all files. Returns whether every hook passed.
    fn run(&self, ctx: &HookContext) -> Result<bool>;
}

/// The `pre-commit` tool, run from the environment.
pub struct PreCommit;

impl PreCommit {
    fn base_command(ctx: &HookContext) -> Command {
        let mut cmd = Command::new(ctx.env.bin(HOOK_RUNNER_PACKAGE));
        cmd.current_dir(ctx.root);
        cmd
    }

    /// `--config <path>` when the hook config is not at the default location.
    fn config_args(ctx: &HookContext, cmd: &mut Command) {
        if ctx.config.config != Path::new(DEFAULT_HOOK_CONFIG) {
            cmd.arg("--config").arg(&ctx.config.config);
        }
    }

    fn install_command(ctx: &HookContext) -> Command {
        let mut cmd = Self::base_command(ctx);
        cmd.arg("install");
        Self::config_args(ctx, &mut cmd);
        cmd
    }

    fn run_command(ctx: &HookContext) -> Command {
        let mut cmd = Self::base_command(ctx);
        cmd.args(["run", "--all-files"]);
        if ctx.config.show_diff_on_failure {
            cmd.arg("--show-diff-on-failure");
        }
        Self::config_args(ctx, &mut cmd);
        cmd
    }
}

impl HookRunner for PreCommit {
    fn name(&self) -> &'static str {
        HOOK_RUNNER_PACKAGE
    }

    fn install(&self, ctx: &HookContext) -> Result<()> {
        let mut cmd = Self::install_command(ctx);
        ctx.verbose.command(&cmd);
        run_setup_step(&mut cmd, HOOK_RUNNER_PACKAGE, "hooks")?;
        Ok(())
    }

    fn run(&self, ctx: &HookContext) -> Result<bool> {
        let mut cmd = Self::run_command(ctx);
        ctx.verbose.command(&cmd);
        // Hook output streams straight through.
        let status = cmd
            .stdin(Stdio::null())
            .status()
            .map_err(|source| Error::Tool {
                tool: HOOK_RUNNER_PACKAGE.to_string(),
                source,
            })?;
        Ok(status.success())
    }
}

/// Check that the hook config exists and parses. Returns the repo count.
pub fn validate_hook_config(root: &Path, config: &LintConfig) -> Result<usize> {
    let path = root.join(&config.config);
    let content = std::fs::read_to_string(&path).map_err(|e| Error::Config {
        message: format!("cannot read hook config {}: {}", path.display(), e),
        path: Some(path.clone()),
    })?;
    let parsed: HookConfigFile = serde_yaml::from_str(&content).map_err(|e| Error::Config {
        message: format!("invalid hook config {}: {}", path.display(), e),
        path: Some(path.clone()),
    })?;
    Ok(parsed.repos.len())
}

/// Install and run hooks. `repos` is the count from [`validate_hook_config`].
pub fn run_lint(ctx: &HookContext, hooks: &dyn HookRunner, repos: usize) -> Result<bool> {
    if repos == 0 {
        eprintln!(
            "bootrun: warning: {} declares no hook repos",
            ctx.config.config.display()
        );
    }
    ctx.verbose.log(&format!("{} hook repo(s) configured", repos));

    if ctx.config.install_hooks {
        hooks.install(ctx)?;
    }

    eprintln!("bootrun: running {} on all files", hooks.name());
    let passed = hooks.run(ctx)?;
    if !passed {
        eprintln!("bootrun: {} reported failures", hooks.name());
    }
    Ok(passed)
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
