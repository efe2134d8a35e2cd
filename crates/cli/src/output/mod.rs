// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for run results.

pub mod json;
pub mod text;

use crate::runners::TestCounts;

/// Short human summary of test counts, e.g. "12 passed, 1 skipped".
pub fn format_counts(counts: &TestCounts) -> String {
    let mut parts = Vec::new();
    for (n, label) in [
        (counts.passed, "passed"),
        (counts.failed, "failed"),
        (counts.errors, "errors"),
        (counts.skipped, "skipped"),
    ] {
        if n > 0 {
            parts.push(format!("{} {}", n, label));
        }
    }
    if parts.is_empty() {
        "no tests".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
