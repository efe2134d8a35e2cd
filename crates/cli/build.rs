// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: disables color output (any value).
pub const NO_COLOR: &str = "NO_COLOR";
/// Environment variable: forces color output (any value).
pub const COLOR: &str = "COLOR";
/// Environment variable: indicates CI environment.
pub const CI: &str = "CI";
/// Environment variable: path of the currently activated virtual environment.
pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
/// Environment variable: config file location.
pub const BOOTRUN_CONFIG: &str = "BOOTRUN_CONFIG";
/// Environment variable: configures tracing log filter.
pub const BOOTRUN_LOG: &str = "BOOTRUN_LOG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
