// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering an alignment for people and for machines.
//!
//! Formatters get the compiled suppressions, the input lines and the
//! alignment over them; event indices are resolved to line numbers and
//! text here.

mod json;
mod text;

use termcolor::{Buffer, WriteColor};

use crate::align::Alignment;
use crate::cli::OutputFormat;
use crate::input::InputLine;
use crate::suppress::Suppression;
use crate::verbose::VerboseLogger;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Everything a formatter needs for one run.
#[derive(Clone, Copy)]
pub struct Report<'a> {
    pub suppressions: &'a [Suppression],
    pub lines: &'a [InputLine],
    pub alignment: &'a Alignment,
}

/// Trait for formatting an alignment into an output format.
pub trait ReportFormatter {
    /// Write the report to `writer`.
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report<'_>) -> anyhow::Result<()>;

    /// Format the report into an uncolored string.
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        let mut buffer = Buffer::no_color();
        self.format_to(&mut buffer, report)?;
        Ok(String::from_utf8(buffer.into_inner())?)
    }
}

/// Pick the formatter for `format`. Text output honors `logger`; JSON is
/// always the bare document.
pub fn formatter(format: OutputFormat, logger: VerboseLogger) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(logger)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
