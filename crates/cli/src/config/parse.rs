// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use serde::de::DeserializeOwned;

/// Parse a TOML array of strings into a Vec<String>.
///
/// Returns None if the value is not an array or holds a non-string item.
pub(super) fn parse_string_array(value: &toml::Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(String::from))
        .collect()
}

/// Deserialize an optional section table, falling back to the section's defaults.
pub(super) fn parse_section<T>(value: Option<&toml::Value>, section: &str) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    match value {
        None => Ok(T::default()),
        Some(v @ toml::Value::Table(_)) => v
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| format!("[{}]: {}", section, e.message())),
        Some(_) => Err(format!("[{}] must be a table", section)),
    }
}

/// Keys of a section table that are not in `known`, as `section.key`.
pub(super) fn unknown_section_keys(
    value: Option<&toml::Value>,
    section: &str,
    known: &[&str],
) -> Vec<String> {
    let Some(toml::Value::Table(t)) = value else {
        return Vec::new();
    };
    t.keys()
        .filter(|k| !known.contains(&k.as_str()))
        .map(|k| format!("{}.{}", section, k))
        .collect()
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "bootrun: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
