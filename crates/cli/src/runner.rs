// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One filtering run: load, align, report, decide.

use std::io::{Read, Write};

use anyhow::Context;
use termcolor::WriteColor;

use crate::align::align;
use crate::cli::OutputFormat;
use crate::error::ExitCode;
use crate::input::{self, InputLine};
use crate::report::{self, Report};
use crate::settings::Settings;
use crate::suppress::{self, SuppressError, Suppression};
use crate::verbose::VerboseLogger;

/// Filter `stdin` (or the configured input file) against the configured
/// suppressions, writing the report to `out`.
///
/// Suppression compile errors are reported on `out` and yield
/// [`ExitCode::Failed`]; I/O failures are returned as errors.
pub fn run<R: Read>(
    settings: &Settings,
    stdin: R,
    out: &mut dyn WriteColor,
) -> anyhow::Result<ExitCode> {
    // Leveled messages would corrupt the JSON document.
    let logger = match settings.output {
        OutputFormat::Text => VerboseLogger::new(settings.verbose),
        OutputFormat::Json => VerboseLogger::default(),
    };

    logger.log(out, 2, &format!("Option settings: {settings:?}"))?;

    let path = &settings.suppressions;
    logger.log(out, 1, &format!("Reading suppressions from '{}'", path.display()))?;
    let suppressions = match suppress::load(path) {
        Ok(suppressions) => suppressions,
        Err(SuppressError::Compile { errors }) => {
            for err in &errors {
                writeln!(out, "{err}")?;
                writeln!(out, "  Offending suppression: >>{}<<", err.raw)?;
            }
            writeln!(out, "{}", SuppressError::Compile { errors })?;
            return Ok(ExitCode::Failed);
        }
        Err(err) => return Err(err.into()),
    };
    log_suppressions(&logger, out, &suppressions)?;

    let lines = match &settings.input {
        Some(path) => {
            logger.log(out, 1, &format!("Reading input lines (SCA output) from '{}'", path.display()))?;
            input::read_file(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            logger.log(out, 1, "Reading input lines (SCA output) from stdin")?;
            input::read_lines(stdin).context("failed to read stdin")?
        }
    };
    log_lines(&logger, out, &lines)?;

    tracing::debug!(
        "aligning {} suppressions with {} lines",
        suppressions.len(),
        lines.len()
    );
    let alignment = align(&suppressions, &lines);

    let report = Report {
        suppressions: &suppressions,
        lines: &lines,
        alignment: &alignment,
    };
    report::formatter(settings.output, logger).format_to(out, &report)?;

    let verdict = settings.policy.decide(alignment.counts());
    logger.log(out, 1, verdict.message())?;
    Ok(verdict.exit_code())
}

fn log_suppressions(
    logger: &VerboseLogger,
    out: &mut dyn WriteColor,
    suppressions: &[Suppression],
) -> std::io::Result<()> {
    if !logger.is_enabled(2) {
        return Ok(());
    }
    logger.log(out, 2, &format!("Suppressions: {}", suppressions.len()))?;
    for suppression in suppressions {
        logger.log(out, 2, &format!("  {}: {}", suppression.line_number, suppression.raw))?;
    }
    Ok(())
}

fn log_lines(
    logger: &VerboseLogger,
    out: &mut dyn WriteColor,
    lines: &[InputLine],
) -> std::io::Result<()> {
    if !logger.is_enabled(2) {
        return Ok(());
    }
    logger.log(out, 2, &format!("Input lines: {}", lines.len()))?;
    for line in lines {
        logger.log(out, 2, &format!("  {}: {}", line.line_number, line.content))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
