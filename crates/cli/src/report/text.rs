// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! Unmatched lines print as `+ N: text` and unused suppressions as
//! `- N: text`, always. Matches and explanations depend on verbosity.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::align::{DiffEvent, Reason, Step};
use crate::color::scheme;
use crate::input::InputLine;
use crate::suppress::Suppression;
use crate::verbose::VerboseLogger;

use super::{Report, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter {
    logger: VerboseLogger,
}

impl TextFormatter {
    pub fn new(logger: VerboseLogger) -> Self {
        Self { logger }
    }

    fn write_steps(
        &self,
        writer: &mut dyn WriteColor,
        steps: &[Step],
        report: &Report<'_>,
    ) -> anyhow::Result<()> {
        for step in steps {
            match step.event {
                DiffEvent::Match(s, l) => {
                    self.write_match(writer, &report.suppressions[s], &report.lines[l])?;
                }
                DiffEvent::UnmatchedLine(l) => {
                    let line = &report.lines[l];
                    self.write_reason(writer, step.reason)?;
                    self.logger.log(writer, 1, "Unmatched input line:")?;
                    let text = format!("+ {}: {}", line.line_number, line.content);
                    write_colored(writer, &scheme::unmatched_line(), &text)?;
                }
                DiffEvent::UnmatchedSuppression(s) => {
                    let suppression = &report.suppressions[s];
                    self.write_reason(writer, step.reason)?;
                    self.logger.log(writer, 1, "Unmatched suppression:")?;
                    let text = format!("- {}: {}", suppression.line_number, suppression.raw);
                    write_colored(writer, &scheme::unmatched_suppression(), &text)?;
                }
            }
        }
        Ok(())
    }

    fn write_match(
        &self,
        writer: &mut dyn WriteColor,
        suppression: &Suppression,
        line: &InputLine,
    ) -> anyhow::Result<()> {
        self.logger.log(writer, 1, "Match:")?;
        let lines = [
            format!("~ {}: {}", suppression.line_number, suppression.raw),
            format!("= {}: {}", line.line_number, line.content),
        ];
        for text in lines {
            if let Some(rendered) = self.logger.render(1, &text) {
                write_colored(writer, &scheme::matched(), &rendered)?;
            }
        }
        Ok(())
    }

    fn write_reason(&self, writer: &mut dyn WriteColor, reason: Option<Reason>) -> anyhow::Result<()> {
        if let Some(reason) = reason {
            self.logger.log(writer, 3, reason.describe())?;
        }
        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report<'_>) -> anyhow::Result<()> {
        let alignment = report.alignment;
        let (prefix, rest) = alignment.steps().split_at(alignment.prefix_len());

        self.write_steps(writer, prefix, report)?;
        self.logger.log(
            writer,
            3,
            &format!("initial matching sequence length: {}", alignment.prefix_len()),
        )?;
        let (rows, cols) = alignment.table_dims();
        self.logger
            .log(writer, 3, &format!("alignment table: {rows} x {cols}"))?;
        self.write_steps(writer, rest, report)?;

        let counts = alignment.counts();
        write_colored(
            writer,
            &scheme::summary(),
            &format!("Unmatched input lines: {}", counts.unmatched_lines),
        )?;
        write_colored(
            writer,
            &scheme::summary(),
            &format!("Unmatched suppressions: {}", counts.unmatched_suppressions),
        )?;
        Ok(())
    }
}

/// Write one line in `spec`, resetting before the newline.
fn write_colored(writer: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    writer.set_color(spec)?;
    write!(writer, "{text}")?;
    writer.reset()?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
