// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde_json::{Value, json};
use termcolor::WriteColor;

use crate::align::DiffEvent;
use crate::input::InputLine;
use crate::suppress::Suppression;

use super::{Report, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

fn suppression_json(suppression: &Suppression) -> Value {
    json!({ "line": suppression.line_number, "text": suppression.raw })
}

fn input_json(line: &InputLine) -> Value {
    json!({ "line": line.line_number, "text": line.content })
}

fn event_json(event: DiffEvent, report: &Report<'_>) -> Value {
    match event {
        DiffEvent::Match(s, l) => json!({
            "kind": "match",
            "suppression": suppression_json(&report.suppressions[s]),
            "input": input_json(&report.lines[l]),
        }),
        DiffEvent::UnmatchedSuppression(s) => json!({
            "kind": "unmatched_suppression",
            "suppression": suppression_json(&report.suppressions[s]),
        }),
        DiffEvent::UnmatchedLine(l) => json!({
            "kind": "unmatched_line",
            "input": input_json(&report.lines[l]),
        }),
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, report: &Report<'_>) -> anyhow::Result<()> {
        let events: Vec<Value> = report
            .alignment
            .events()
            .map(|event| event_json(event, report))
            .collect();

        let output = json!({
            "events": events,
            "counts": report.alignment.counts(),
        });

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
