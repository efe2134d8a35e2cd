// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pip and uv installers.

use std::path::Path;
use std::process::Command;

use super::{ActiveEnvironment, DependencySet, Installer};
use crate::config::{EnvironmentConfig, InstallerChoice};
use crate::error::Result;
use crate::process::run_setup_step;

/// Concrete installer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallerKind {
    #[default]
    Pip,
    Uv,
}

impl InstallerKind {
    /// Detect the installer from lock files in the project root.
    pub fn detect(root: &Path) -> Self {
        // uv.lock indicates uv (modern, fast)
        if root.join("uv.lock").exists() {
            return Self::Uv;
        }
        Self::Pip
    }

    /// Resolve a config choice, detecting when set to `auto`.
    pub fn resolve(choice: InstallerChoice, root: &Path) -> Self {
        match choice {
            InstallerChoice::Auto => Self::detect(root),
            InstallerChoice::Pip => Self::Pip,
            InstallerChoice::Uv => Self::Uv,
        }
    }

    /// Installer executable name.
    pub fn executable(&self) -> &'static str {
        match self {
            InstallerKind::Pip => "pip",
            InstallerKind::Uv => "uv",
        }
    }
}

impl std::fmt::Display for InstallerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable())
    }
}

/// Build the installer configured for a project.
pub fn installer_for(root: &Path, config: &EnvironmentConfig) -> Box<dyn Installer> {
    match InstallerKind::resolve(config.installer, root) {
        InstallerKind::Pip => Box::new(PipInstaller {
            python: config.python.clone(),
        }),
        InstallerKind::Uv => Box::new(UvInstaller {
            python: config.python.clone(),
        }),
    }
}

/// `python -m venv` + `pip install`.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    /// Interpreter used to create the environment.
    pub python: String,
}

impl PipInstaller {
    fn create_command(&self, location: &Path) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.args(["-m", "venv"]).arg(location);
        cmd
    }

    fn install_command(&self, env: &ActiveEnvironment, deps: &DependencySet) -> Command {
        let mut cmd = Command::new(env.python());
        cmd.args(["-m", "pip", "install"]).args(deps.install_args());
        cmd
    }
}

impl Installer for PipInstaller {
    fn name(&self) -> &'static str {
        "pip"
    }

    fn create(&self, location: &Path) -> Result<()> {
        run_setup_step(&mut self.create_command(location), &self.python, "create")?;
        Ok(())
    }

    fn install(&self, env: &ActiveEnvironment, deps: &DependencySet) -> Result<()> {
        run_setup_step(&mut self.install_command(env, deps), "pip", "install")?;
        Ok(())
    }
}

/// `uv venv` + `uv pip install`.
#[derive(Debug, Clone)]
pub struct UvInstaller {
    /// Interpreter request passed to `uv venv --python`.
    pub python: String,
}

impl UvInstaller {
    fn create_command(&self, location: &Path) -> Command {
        let mut cmd = Command::new("uv");
        cmd.arg("venv")
            .arg(location)
            .arg("--python")
            .arg(&self.python);
        cmd
    }

    fn install_command(&self, env: &ActiveEnvironment, deps: &DependencySet) -> Command {
        let mut cmd = Command::new("uv");
        cmd.args(["pip", "install", "--python"])
            .arg(env.python())
            .args(deps.install_args());
        cmd
    }
}

impl Installer for UvInstaller {
    fn name(&self) -> &'static str {
        "uv"
    }

    fn create(&self, location: &Path) -> Result<()> {
        run_setup_step(&mut self.create_command(location), "uv", "create")?;
        Ok(())
    }

    fn install(&self, env: &ActiveEnvironment, deps: &DependencySet) -> Result<()> {
        run_setup_step(&mut self.install_command(env, deps), "uv", "install")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;
