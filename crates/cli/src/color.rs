// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var (any value) → no color
//! 2. COLOR env var (any value) → color
//! 3. stdout not a TTY, or CI set → no color
//! 4. otherwise auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::names;

/// Resolve color choice from environment variables and the terminal.
pub fn resolve_color() -> ColorChoice {
    color_choice(
        std::env::var_os(names::NO_COLOR).is_some(),
        std::env::var_os(names::COLOR).is_some(),
        std::io::stdout().is_terminal(),
        std::env::var_os(names::CI).is_some(),
    )
}

fn color_choice(no_color: bool, force: bool, tty: bool, ci: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if !tty || ci {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for suite output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold suite identifier.
    pub fn suite_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red "FAIL" indicator.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green "PASS" indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Cyan path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
