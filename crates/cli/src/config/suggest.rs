// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Section name suggestions for config validation.

use std::path::Path;

/// Known section names for suggestions.
const KNOWN_SECTION_NAMES: &[&str] = &["environment", "tests", "lint", "python_versions"];

/// Suggest a section name for a typo.
pub fn suggest_section_name(unknown: &str) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    let suggestion = match unknown {
        "env" | "venv" | "virtualenv" | "deps" | "dependencies" => Some("environment"),
        "test" | "testing" | "suite" | "suites" | "pytest" => Some("tests"),
        "lints" | "linting" | "pre-commit" | "precommit" | "hooks" => Some("lint"),
        "python" | "versions" | "python_version" => Some("python_versions"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Prefix matching (at least 3 chars to avoid false positives)
    if unknown.len() >= 3 {
        for &name in KNOWN_SECTION_NAMES {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about an unknown top-level key with a suggestion.
pub fn warn_unknown_section(path: &Path, key: &str) {
    match suggest_section_name(key) {
        Some(suggested) => eprintln!(
            "bootrun: warning: {}: unrecognized field `{}` (ignored), did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "bootrun: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
