// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `scafaps.toml` configuration.
//!
//! ```toml
//! version = 1
//!
//! [filter]
//! suppressions = "sca.supp"   # relative to this file
//! error = true
//! error_unused = false
//!
//! [output]
//! verbose = 1
//! color = "auto"
//! ```
//!
//! Unknown keys are errors.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::ColorMode;

/// Top-level config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub(crate) fn default_version() -> u32 {
        defaults::VERSION
    }
}

/// `[filter]`: what to read and when to fail.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Suppression file, resolved against the config file's directory.
    pub suppressions: Option<PathBuf>,

    /// Fail when unsuppressed output remains.
    pub error: bool,

    /// Fail when suppressions go unused.
    pub error_unused: bool,
}

/// `[output]`: presentation defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Verbosity level used when `-v` is not given.
    pub verbose: u8,

    /// Color mode used when `--color` is not given.
    pub color: Option<ColorMode>,
}

/// Errors loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {version} in {} (expected {})", path.display(), defaults::VERSION)]
    Version { path: PathBuf, version: u32 },
}

/// Parse config text read from `path`; relative paths resolve against its directory.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            version: config.version,
        });
    }

    if let Some(suppressions) = config.filter.suppressions.take() {
        let base = path.parent().unwrap_or(Path::new(""));
        config.filter.suppressions = Some(base.join(suppressions));
    }

    Ok(config)
}

/// Load and validate the config file at `path`.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
