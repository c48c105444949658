// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Longest-common-subsequence table under the match predicate.

use super::Matcher;

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

/// `(S + 1) x (L + 1)` grid where cell `(i, j)` holds the most matched pairs
/// achievable between the first `i` suppressions and the first `j` lines.
///
/// Stored row-major in a single allocation. Memory is `O(S * L)`, which is
/// the dominant cost for large, badly ordered inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    cells: Vec<usize>,
    cols: usize,
}

impl AlignmentTable {
    /// Fill the table. Evaluates the matcher once per inner cell.
    pub fn build<M, T>(suppressions: &[M], lines: &[T]) -> Self
    where
        M: Matcher,
        T: AsRef<str>,
    {
        let rows = suppressions.len() + 1;
        let cols = lines.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (i, suppression) in suppressions.iter().enumerate().map(|(k, s)| (k + 1, s)) {
            for (j, line) in lines.iter().enumerate().map(|(k, l)| (k + 1, l)) {
                cells[i * cols + j] = if suppression.matches(line.as_ref()) {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[i * cols + (j - 1)].max(cells[(i - 1) * cols + j])
                };
            }
        }

        Self { cells, cols }
    }

    /// Cell `(i, j)`. Panics when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(j < self.cols, "column {j} out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Number of rows (suppressions + 1).
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of columns (lines + 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Size of the best alignment, i.e. the bottom-right cell.
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}
