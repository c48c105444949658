// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effective run settings: command line over config file.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::color::ColorMode;
use crate::config::Config;
use crate::error::ExitPolicy;

/// Everything a run needs, after merging CLI flags with the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub suppressions: PathBuf,
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    pub policy: ExitPolicy,
    pub verbose: u8,
    pub output: OutputFormat,
    pub color: ColorMode,
    pub no_color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no suppressions file given (pass SUPPRESSIONS_FILE or set filter.suppressions)")]
    NoSuppressions,

    #[error("'{}' does not name a file", .0.display())]
    SuppressionsNotFound(PathBuf),
}

impl Settings {
    /// Merge `cli` over `config`.
    ///
    /// Failure switches are OR'ed; verbosity and color from the command line
    /// replace the config values when given.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, SettingsError> {
        let suppressions = match (&cli.suppressions, &config.filter.suppressions) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) if path.is_file() => path.clone(),
            (None, Some(path)) => return Err(SettingsError::SuppressionsNotFound(path.clone())),
            (None, None) => return Err(SettingsError::NoSuppressions),
        };

        Ok(Self {
            suppressions,
            input: cli.input.clone(),
            policy: ExitPolicy {
                error: cli.error || config.filter.error,
                error_unused: cli.error_unused || config.filter.error_unused,
            },
            verbose: if cli.verbose > 0 { cli.verbose } else { config.output.verbose },
            output: cli.output,
            color: cli.color.or(config.output.color).unwrap_or_default(),
            no_color: cli.no_color,
        })
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
