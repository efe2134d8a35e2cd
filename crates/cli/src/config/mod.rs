// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles bootrun.toml parsing with version validation and unknown key warnings.

mod parse;
mod suggest;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use parse::{parse_section, parse_string_array, unknown_section_keys, warn_unknown_key};
use suggest::warn_unknown_section;

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "bootrun.toml";

/// Supported config file version.
const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "python_versions", "environment", "tests", "lint"];

/// Known `[environment]` keys.
const KNOWN_ENVIRONMENT_KEYS: &[&str] =
    &["path", "installer", "python", "requirements", "packages"];

/// Known `[tests]` keys.
const KNOWN_TESTS_KEYS: &[&str] = &["suites", "coverage", "coverage_report"];

/// Known `[lint]` keys.
const KNOWN_LINT_KEYS: &[&str] = &["config", "install_hooks", "show_diff_on_failure"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    python_versions: Option<toml::Value>,

    #[serde(default)]
    environment: Option<toml::Value>,

    #[serde(default)]
    tests: Option<toml::Value>,

    #[serde(default)]
    lint: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Supported runtime versions. Informational only; nothing iterates over it.
    pub python_versions: Vec<String>,

    /// Dependency environment settings.
    pub environment: EnvironmentConfig,

    /// Test suite settings.
    pub tests: TestsConfig,

    /// Pre-commit wrapper settings.
    pub lint: LintConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            python_versions: Vec::new(),
            environment: EnvironmentConfig::default(),
            tests: TestsConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

/// Which installer creates and populates the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerChoice {
    /// Pick from project files (`uv.lock` selects uv).
    #[default]
    Auto,
    /// `python -m venv` + `pip install`.
    Pip,
    /// `uv venv` + `uv pip install`.
    Uv,
}

/// `[environment]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Environment directory, relative to the project root.
    pub path: PathBuf,

    /// Installer selection.
    pub installer: InstallerChoice,

    /// Interpreter used to create a new environment.
    pub python: String,

    /// Requirement files passed as `-r`, relative to the project root.
    pub requirements: Vec<PathBuf>,

    /// Extra packages installed after the requirement files.
    pub packages: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".venv"),
            installer: InstallerChoice::Auto,
            python: "python3".to_string(),
            requirements: Vec::new(),
            packages: Self::default_packages(),
        }
    }
}

impl EnvironmentConfig {
    /// Packages the pytest runner needs.
    pub fn default_packages() -> Vec<String> {
        vec!["pytest".to_string(), "pytest-cov".to_string()]
    }
}

/// `[tests]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestsConfig {
    /// Suite directories, run in declaration order.
    pub suites: Vec<String>,

    /// Measure coverage while running suites.
    pub coverage: bool,

    /// Coverage report file, relative to the project root.
    pub coverage_report: PathBuf,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            suites: Vec::new(),
            coverage: true,
            coverage_report: PathBuf::from("coverage.xml"),
        }
    }
}

/// `[lint]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Pre-commit config file, relative to the project root.
    pub config: PathBuf,

    /// Run `pre-commit install` before running hooks.
    pub install_hooks: bool,

    /// Pass `--show-diff-on-failure` to `pre-commit run`.
    pub show_diff_on_failure: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            config: PathBuf::from(".pre-commit-config.yaml"),
            install_hooks: true,
            show_diff_on_failure: true,
        }
    }
}

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown) = parse_collecting(content, path)?;
    for key in &unknown {
        match key.split_once('.') {
            Some(_) => warn_unknown_key(path, key),
            None => warn_unknown_section(path, key),
        }
    }
    Ok(config)
}

/// Parse config and return it with the sorted set of unknown keys.
///
/// Nested keys are reported as `section.key`.
fn parse_collecting(content: &str, path: &Path) -> Result<(Config, BTreeSet<String>)> {
    let config_err = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_err("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_err(format!(
            "unsupported config version {} (supported: {})\n  Upgrade bootrun to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.insert(key.clone());
        }
    }

    let python_versions = match flexible.python_versions.as_ref() {
        None => Vec::new(),
        Some(value) => parse_string_array(value)
            .ok_or_else(|| config_err("python_versions must be an array of strings".to_string()))?,
    };

    let environment = flexible.environment.as_ref();
    unknown.extend(unknown_section_keys(environment, "environment", KNOWN_ENVIRONMENT_KEYS));
    let environment: EnvironmentConfig =
        parse_section(environment, "environment").map_err(config_err)?;

    let tests = flexible.tests.as_ref();
    unknown.extend(unknown_section_keys(tests, "tests", KNOWN_TESTS_KEYS));
    let tests: TestsConfig = parse_section(tests, "tests").map_err(config_err)?;
    validate_suites(&tests.suites).map_err(config_err)?;

    let lint = flexible.lint.as_ref();
    unknown.extend(unknown_section_keys(lint, "lint", KNOWN_LINT_KEYS));
    let lint: LintConfig = parse_section(lint, "lint").map_err(config_err)?;

    Ok((
        Config {
            version,
            python_versions,
            environment,
            tests,
            lint,
        },
        unknown,
    ))
}

/// Every suite identifier must be non-empty and appear once.
fn validate_suites(suites: &[String]) -> std::result::Result<(), String> {
    let mut seen = BTreeSet::new();
    for suite in suites {
        if suite.trim().is_empty() {
            return Err("tests.suites: suite paths must not be empty".to_string());
        }
        if !seen.insert(suite.as_str()) {
            return Err(format!("tests.suites: duplicate suite `{}`", suite));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
