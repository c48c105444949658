// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic diff reconstruction from a filled [`AlignmentTable`].
//!
//! The walk starts at the bottom-right cell and moves toward the origin,
//! one event per step. Ties between equally long alignments are broken by
//! a fixed rule order so identical inputs always produce identical output:
//!
//! 1. first row: the line is unmatched
//! 2. first column: the suppression is unmatched
//! 3. the pair matches:
//!    a. an earlier line fits the suppression as well: the line is unmatched
//!    b. an earlier suppression fits the line as well: the suppression is unmatched
//!    c. otherwise take the match
//! 4. dropping the line keeps more pairs: the line is unmatched
//! 5. both choices keep as many pairs: the line is unmatched
//! 6. otherwise the suppression is unmatched
//!
//! Rule 3a pushes matches toward earlier lines, so diffs show up against
//! the most recent output. Rule 5 walks past lines before suppressions, so
//! in input order an unmatched suppression is listed ahead of the unmatched
//! lines next to it.

use super::{AlignmentTable, Counts, DiffEvent, Matcher, Reason, Step};

#[cfg(test)]
#[path = "backtrace_tests.rs"]
mod tests;

enum Decision {
    Line(Reason),
    Suppression(Reason),
    Match,
}

/// Walk `table` back to the origin and return the steps in input order
/// together with the unmatched counts.
///
/// # Panics
///
/// Panics if `table` was not built from these sequences, or if the matcher
/// answers differently than it did while the table was built.
pub fn reconstruct<M, T>(
    table: &AlignmentTable,
    suppressions: &[M],
    lines: &[T],
) -> (Vec<Step>, Counts)
where
    M: Matcher,
    T: AsRef<str>,
{
    assert_eq!(table.rows(), suppressions.len() + 1, "table rows do not fit suppressions");
    assert_eq!(table.cols(), lines.len() + 1, "table columns do not fit lines");

    let mut steps = Vec::with_capacity(suppressions.len() + lines.len());
    let mut counts = Counts::default();
    let (mut i, mut j) = (suppressions.len(), lines.len());

    while i > 0 || j > 0 {
        match decide(table, suppressions, lines, i, j) {
            Decision::Line(reason) => {
                j -= 1;
                counts.unmatched_lines += 1;
                steps.push(Step::new(DiffEvent::UnmatchedLine(j), Some(reason)));
            }
            Decision::Suppression(reason) => {
                i -= 1;
                counts.unmatched_suppressions += 1;
                steps.push(Step::new(DiffEvent::UnmatchedSuppression(i), Some(reason)));
            }
            Decision::Match => {
                i -= 1;
                j -= 1;
                steps.push(Step::new(DiffEvent::Match(i, j), None));
            }
        }
    }

    steps.reverse();
    (steps, counts)
}

/// Classify cell `(i, j)`; `(0, 0)` is never passed in.
fn decide<M, T>(
    table: &AlignmentTable,
    suppressions: &[M],
    lines: &[T],
    i: usize,
    j: usize,
) -> Decision
where
    M: Matcher,
    T: AsRef<str>,
{
    if i == 0 {
        return Decision::Line(Reason::LeadingLine);
    }
    if j == 0 {
        return Decision::Suppression(Reason::LeadingSuppression);
    }

    let here = table.get(i, j);
    let left = table.get(i, j - 1);
    let up = table.get(i - 1, j);

    if suppressions[i - 1].matches(lines[j - 1].as_ref()) {
        if left == here {
            return Decision::Line(Reason::EarlierLineFits);
        }
        if up == here {
            return Decision::Suppression(Reason::EarlierSuppressionFits);
        }
        assert_eq!(
            here,
            table.get(i - 1, j - 1) + 1,
            "alignment table disagrees with matcher at ({i}, {j})"
        );
        return Decision::Match;
    }

    assert_eq!(here, left.max(up), "alignment table disagrees with matcher at ({i}, {j})");
    if left > up {
        Decision::Line(Reason::LineRequired)
    } else if left == up {
        Decision::Line(Reason::Tie)
    } else {
        Decision::Suppression(Reason::SuppressionRequired)
    }
}
