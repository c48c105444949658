//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::color::ColorMode;

/// Suppress false positives from static code analysis.
///
/// Reads analysis output from stdin, aligns it with the suppressions file
/// and prints what is left: `+` for unexpected output, `-` for unused
/// suppressions.
#[derive(Debug, Parser)]
#[command(name = "scafaps")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File with suppressions to be applied
    #[arg(value_name = "SUPPRESSIONS_FILE", value_parser = existing_file)]
    pub suppressions: Option<PathBuf>,

    /// Read analysis output from FILE instead of stdin
    #[arg(short, long, value_name = "FILE", value_parser = existing_file)]
    pub input: Option<PathBuf>,

    /// Exit with error if unsuppressed output remains
    #[arg(short, long)]
    pub error: bool,

    /// Exit with error if there are unused suppressions
    #[arg(short = 'u', long)]
    pub error_unused: bool,

    /// Increase verbosity level; may be given several times
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SCAFAPS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Accept only paths naming an existing regular file.
fn existing_file(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("'{arg}' does not name a file"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
