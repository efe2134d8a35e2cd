// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Bootrun error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Environment creation or dependency installation failed.
    #[error("environment setup failed: {step}: {message}")]
    Setup { step: String, message: String },

    /// An external tool could not be started.
    #[error("failed to run {tool}: {source}")]
    Tool {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using bootrun Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every suite passed (or lint hooks passed)
    Success = 0,
    /// One or more suites (or lint hooks) failed
    TestsFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
    /// Environment could not be created or populated
    SetupFailed = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Setup { .. } | Error::Tool { .. } => ExitCode::SetupFailed,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

impl ExitCode {
    /// Exit code for an aggregate pass/fail outcome.
    pub fn from_outcome(passed: bool) -> Self {
        if passed {
            ExitCode::Success
        } else {
            ExitCode::TestsFailed
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
