// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Isolated dependency environment bootstrap.
//!
//! An environment is either already active (passed in by the caller),
//! already present at its configured location, or created there. The
//! declared dependency set is then installed into it through an
//! [`Installer`].

mod installer;

pub use installer::{InstallerKind, PipInstaller, UvInstaller, installer_for};

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::EnvironmentConfig;
use crate::error::{Error, Result};
use crate::verbose::VerboseLogger;

/// Where the environment comes from, and where a new one would go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    /// Environment that is already activated for this process, if any.
    pub active: Option<PathBuf>,
    /// Location to create (or reuse) when nothing is active.
    pub location: PathBuf,
}

impl EnvironmentDescriptor {
    /// Build a descriptor from config.
    ///
    /// `active` is the already-activated environment (normally `VIRTUAL_ENV`),
    /// resolved by the caller.
    pub fn new(root: &Path, config: &EnvironmentConfig, active: Option<PathBuf>) -> Self {
        Self {
            active,
            location: root.join(&config.path),
        }
    }
}

/// How the environment in use was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentOrigin {
    /// Already activated before bootrun started.
    Activated,
    /// Found at the configured location.
    Reused,
    /// Created during this run.
    Created,
}

impl fmt::Display for EnvironmentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnvironmentOrigin::Activated => "activated",
            EnvironmentOrigin::Reused => "reused",
            EnvironmentOrigin::Created => "created",
        };
        write!(f, "{}", s)
    }
}

/// A ready environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEnvironment {
    /// Environment directory.
    pub location: PathBuf,
    /// How it was obtained.
    pub origin: EnvironmentOrigin,
}

impl ActiveEnvironment {
    /// Path to an executable inside the environment.
    pub fn bin(&self, tool: &str) -> PathBuf {
        if cfg!(windows) {
            self.location.join("Scripts").join(format!("{tool}.exe"))
        } else {
            self.location.join("bin").join(tool)
        }
    }

    /// The environment's interpreter.
    pub fn python(&self) -> PathBuf {
        self.bin("python")
    }
}

/// Dependencies installed into the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    /// Requirement files (absolute or root-relative resolved paths).
    pub requirements: Vec<PathBuf>,
    /// Package specifiers.
    pub packages: Vec<String>,
}

impl DependencySet {
    /// Dependency set declared in config, with requirement files resolved against `root`.
    pub fn from_config(root: &Path, config: &EnvironmentConfig) -> Self {
        Self {
            requirements: config.requirements.iter().map(|r| root.join(r)).collect(),
            packages: config.packages.clone(),
        }
    }

    /// Add a package unless it is already declared.
    pub fn with_package(mut self, package: &str) -> Self {
        if !self.packages.iter().any(|p| p == package) {
            self.packages.push(package.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty() && self.packages.is_empty()
    }

    /// Arguments shared by `pip install` and `uv pip install`.
    pub fn install_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.requirements.len() * 2 + self.packages.len());
        for req in &self.requirements {
            args.push(OsString::from("-r"));
            args.push(req.clone().into_os_string());
        }
        args.extend(self.packages.iter().map(OsString::from));
        args
    }
}

/// Creates environments and installs dependencies into them.
pub trait Installer {
    /// Installer name (e.g., "pip", "uv").
    fn name(&self) -> &'static str;

    /// Create a new environment at `location`.
    fn create(&self, location: &Path) -> Result<()>;

    /// Install `deps` into `env`.
    fn install(&self, env: &ActiveEnvironment, deps: &DependencySet) -> Result<()>;
}

/// Make sure an environment exists and holds the dependency set.
///
/// Safe to call repeatedly: an active or existing environment is reused,
/// never recreated. Any failure here is fatal for the run.
pub fn ensure_environment(
    descriptor: &EnvironmentDescriptor,
    deps: &DependencySet,
    installer: &dyn Installer,
    verbose: &VerboseLogger,
) -> Result<ActiveEnvironment> {
    if let Some(missing) = deps.requirements.iter().find(|r| !r.exists()) {
        return Err(Error::Setup {
            step: "install".to_string(),
            message: format!("requirements file not found: {}", missing.display()),
        });
    }

    let env = match &descriptor.active {
        Some(active) => {
            verbose.log(&format!("using active environment {}", active.display()));
            ActiveEnvironment {
                location: active.clone(),
                origin: EnvironmentOrigin::Activated,
            }
        }
        None if descriptor.location.exists() => {
            verbose.log(&format!(
                "reusing environment {}",
                descriptor.location.display()
            ));
            ActiveEnvironment {
                location: descriptor.location.clone(),
                origin: EnvironmentOrigin::Reused,
            }
        }
        None => {
            eprintln!(
                "bootrun: creating environment at {} ({})",
                descriptor.location.display(),
                installer.name()
            );
            installer.create(&descriptor.location)?;
            ActiveEnvironment {
                location: descriptor.location.clone(),
                origin: EnvironmentOrigin::Created,
            }
        }
    };

    if deps.is_empty() {
        tracing::debug!("empty dependency set, skipping install");
    } else {
        verbose.log(&format!(
            "installing {} requirement file(s) and {} package(s) with {}",
            deps.requirements.len(),
            deps.packages.len(),
            installer.name()
        ));
        installer.install(&env, deps)?;
    }

    Ok(env)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
