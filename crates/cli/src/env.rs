// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names and accessors.
//!
//! Library code never reads the process environment directly; the binary
//! resolves these once and passes the values down.

use std::ffi::OsString;
use std::path::PathBuf;

/// Generated env var name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Name of the env var holding the tracing filter.
pub fn bootrun_log_var() -> &'static str {
    names::BOOTRUN_LOG
}

/// Path of the currently active virtual environment, if any.
///
/// Empty values are treated as unset.
pub fn active_virtualenv() -> Option<PathBuf> {
    virtualenv_from(std::env::var_os(names::VIRTUAL_ENV))
}

fn virtualenv_from(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
