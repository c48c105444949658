// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color selection and the report color scheme.

use std::io::IsTerminal;

use serde::Deserialize;
use termcolor::{Color, ColorChoice, ColorSpec};

/// When to color output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the mode for the current process environment.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    resolve_color_with(
        mode,
        no_color,
        std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        std::io::stdout().is_terminal(),
    )
}

/// Resolve with the environment passed in. `--no-color` wins over everything.
pub fn resolve_color_with(
    mode: ColorMode,
    no_color: bool,
    no_color_env: bool,
    is_tty: bool,
) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if no_color_env || !is_tty => ColorChoice::Never,
        ColorMode::Auto => ColorChoice::Auto,
    }
}

/// Color scheme for text reports.
pub mod scheme {
    use super::*;

    /// `+` lines: output nothing suppresses.
    pub fn unmatched_line() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// `-` lines: suppressions nothing used.
    pub fn unmatched_suppression() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// `~` and `=` lines of a match.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Summary totals.
    pub fn summary() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
