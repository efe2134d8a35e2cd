// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file and project root discovery.
//!
//! Walks from the current directory up to the git root looking for bootrun.toml.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::error::{Error, Result};

/// Find bootrun.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "BOOTRUN_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if path.exists() {
                Ok(Some(path))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Project root: the directory holding the config file, else `cwd`.
///
/// Environment, suite and coverage paths are all relative to this root.
pub fn project_root(config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    config_path
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// A resolved project: root directory plus loaded config.
#[derive(Debug)]
pub struct Project {
    /// Directory all configured paths are relative to.
    pub root: PathBuf,
    /// Config file in use, if one was found.
    pub config_path: Option<PathBuf>,
    /// Loaded config (defaults when no file was found).
    pub config: Config,
}

/// Resolve the config file and load it, falling back to defaults.
pub fn load_project(explicit: Option<&Path>, cwd: &Path) -> Result<Project> {
    let config_path = resolve_config(explicit, cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };
    let root = project_root(config_path.as_deref(), cwd);

    Ok(Project {
        root,
        config_path,
        config,
    })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
