// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the bootrun crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temp directory with custom bootrun.toml content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bootrun.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = tempfile::tempdir().unwrap();
/// create_tree(tmp.path(), &[
///     ("pkg/ut/test_a.py", "def test_a():\n    pass\n"),
///     ("requirements.txt", "pyyaml\n"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
