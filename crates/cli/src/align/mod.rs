// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alignment of suppressions against analysis output.
//!
//! Finds the longest order-preserving pairing of suppressions with lines,
//! where "equal" means "the suppression matches the line", and classifies
//! every suppression and every line as matched or unmatched.
//!
//! Three stages:
//! - [`prefix::scan`] consumes the common prefix without building a table
//! - [`AlignmentTable::build`] fills the LCS table over what remains
//! - [`backtrace::reconstruct`] walks the table back with fixed tie-breaks
//!
//! The engine does no I/O and holds no state between calls.

pub mod backtrace;
pub mod matcher;
pub mod prefix;
pub mod table;

use serde::Serialize;

pub use matcher::Matcher;
pub use table::AlignmentTable;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// One classified element of the alignment.
///
/// Indices are positions in the sequences passed to [`align`], not source
/// line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffEvent {
    /// `(suppression, line)` paired up.
    Match(usize, usize),
    /// Suppression with no line to suppress.
    UnmatchedSuppression(usize),
    /// Line that no suppression accounts for.
    UnmatchedLine(usize),
}

/// Why the backtrace left an element unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// All suppressions consumed; remaining lines lead the input.
    LeadingLine,
    /// All lines consumed; remaining suppressions lead the file.
    LeadingSuppression,
    /// The suppression matches, but an earlier line fits it as well.
    EarlierLineFits,
    /// The suppression matches, but an earlier suppression fits the line as well.
    EarlierSuppressionFits,
    /// Skipping the line keeps the alignment longest.
    LineRequired,
    /// No match here and either choice is optimal; the line is dropped.
    Tie,
    /// Skipping the suppression keeps the alignment longest.
    SuppressionRequired,
}

impl Reason {
    pub fn describe(self) -> &'static str {
        match self {
            Reason::LeadingLine => "Unmatched input line at head of input lines",
            Reason::LeadingSuppression => "Unmatched suppression at head of suppressions",
            Reason::EarlierLineFits => {
                "Deliberately preferring unmatched line over match against previous suppression"
            }
            Reason::EarlierSuppressionFits => {
                "Deliberately preferring unmatched suppression over match against previous line"
            }
            Reason::LineRequired => "Unmatched input line necessary to achieve lcs",
            Reason::Tie => "Unmatched input line, either choice achieves lcs",
            Reason::SuppressionRequired => "Unmatched suppression necessary to achieve lcs",
        }
    }
}

/// An event plus the rule that produced it. Matches carry no reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub event: DiffEvent,
    pub reason: Option<Reason>,
}

impl Step {
    pub fn new(event: DiffEvent, reason: Option<Reason>) -> Self {
        Self { event, reason }
    }
}

/// Unmatched totals, the summary consumers act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub unmatched_suppressions: usize,
    pub unmatched_lines: usize,
}

/// Result of aligning one suppression list with one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    steps: Vec<Step>,
    counts: Counts,
    prefix_len: usize,
    table_dims: (usize, usize),
}

impl Alignment {
    /// Steps in input order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Events in input order.
    pub fn events(&self) -> impl Iterator<Item = DiffEvent> + '_ {
        self.steps.iter().map(|step| step.event)
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// Number of matched pairs.
    pub fn matches(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.event, DiffEvent::Match(..)))
            .count()
    }

    /// Length of the prefix handled without the table.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// `(rows, cols)` of the table built for the residual sequences.
    pub fn table_dims(&self) -> (usize, usize) {
        self.table_dims
    }
}

/// Align `suppressions` with `lines`.
///
/// The common prefix is matched in lock-step first; only the remainder goes
/// through the table. The result is identical to [`align_full`].
pub fn align<M, T>(suppressions: &[M], lines: &[T]) -> Alignment
where
    M: Matcher,
    T: AsRef<str>,
{
    let skip = prefix::scan(suppressions, lines);
    tracing::debug!("initial matching sequence length: {}", skip);
    align_from(suppressions, lines, skip)
}

/// Align without the prefix fast path. Builds the table over everything.
pub fn align_full<M, T>(suppressions: &[M], lines: &[T]) -> Alignment
where
    M: Matcher,
    T: AsRef<str>,
{
    align_from(suppressions, lines, 0)
}

fn align_from<M, T>(suppressions: &[M], lines: &[T], skip: usize) -> Alignment
where
    M: Matcher,
    T: AsRef<str>,
{
    let (rest_suppressions, rest_lines) = (&suppressions[skip..], &lines[skip..]);
    let table = AlignmentTable::build(rest_suppressions, rest_lines);
    tracing::debug!("alignment table: {} x {}", table.rows(), table.cols());

    let (residual, counts) = backtrace::reconstruct(&table, rest_suppressions, rest_lines);

    let mut steps = Vec::with_capacity(skip + residual.len());
    steps.extend((0..skip).map(|k| Step::new(DiffEvent::Match(k, k), None)));
    steps.extend(residual.into_iter().map(|step| Step {
        event: shift(step.event, skip),
        reason: step.reason,
    }));

    Alignment {
        steps,
        counts,
        prefix_len: skip,
        table_dims: (table.rows(), table.cols()),
    }
}

fn shift(event: DiffEvent, by: usize) -> DiffEvent {
    match event {
        DiffEvent::Match(s, l) => DiffEvent::Match(s + by, l + by),
        DiffEvent::UnmatchedSuppression(s) => DiffEvent::UnmatchedSuppression(s + by),
        DiffEvent::UnmatchedLine(l) => DiffEvent::UnmatchedLine(l + by),
    }
}
