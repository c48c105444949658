// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lock-step prefix fast path.
//!
//! Suppression files are usually kept in the same order as the tool's
//! output, so most runs are one long common prefix. Consuming it here keeps
//! the quadratic table down to the part that actually diverges.

use super::Matcher;

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;

/// Length of the common matched prefix of `suppressions` and `lines`.
///
/// Stops at the first index where the suppression does not match the line
/// at the same position, or at the end of the shorter sequence.
pub fn scan<M, T>(suppressions: &[M], lines: &[T]) -> usize
where
    M: Matcher,
    T: AsRef<str>,
{
    suppressions
        .iter()
        .zip(lines)
        .position(|(suppression, line)| !suppression.matches(line.as_ref()))
        .unwrap_or_else(|| suppressions.len().min(lines.len()))
}
