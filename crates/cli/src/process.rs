// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for invoking external tools.
//!
//! Every tool bootrun drives (python, pip, uv, pytest, pre-commit) is
//! spawned through these functions so spawn failures and non-zero exits
//! are reported the same way.

use std::process::{Command, ExitStatus, Output, Stdio};

use crate::error::{Error, Result};

/// Maximum stderr lines kept in an error message.
const STDERR_EXCERPT_LINES: usize = 5;

/// Render a command line for logs (`program arg1 arg2`).
pub fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run a command to completion with stdout and stderr captured.
///
/// Only a failure to start the process is an error; the exit status is
/// left to the caller.
pub fn capture(cmd: &mut Command, tool: &str) -> Result<Output> {
    tracing::debug!("running {}", describe(cmd));
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::Tool {
            tool: tool.to_string(),
            source,
        })
}

/// Run a setup command, turning a non-zero exit into [`Error::Setup`].
pub fn run_setup_step(cmd: &mut Command, tool: &str, step: &str) -> Result<Output> {
    let output = capture(cmd, tool)?;
    if output.status.success() {
        return Ok(output);
    }

    let excerpt = stderr_excerpt(&output.stderr);
    let mut message = format!("`{}` {}", describe(cmd), status_description(output.status));
    if !excerpt.is_empty() {
        message.push('\n');
        message.push_str(&excerpt);
    }
    Err(Error::Setup {
        step: step.to_string(),
        message,
    })
}

/// First few lines of a tool's stderr.
pub fn stderr_excerpt(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .take(STDERR_EXCERPT_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable exit status ("exited with status 2").
pub fn status_description(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
