// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes and the policy that picks one.

use crate::align::Counts;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Nothing the configured policy treats as a failure.
    Success = 0,
    /// Policy failure, or a suppression file that does not compile.
    Failed = 1,
    /// Bad command line or config file.
    ConfigError = 2,
    /// I/O or other unexpected failure.
    InternalError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Which leftovers make the run fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitPolicy {
    /// Fail on unmatched input lines.
    pub error: bool,
    /// Fail on unused suppressions.
    pub error_unused: bool,
}

/// Outcome of applying an [`ExitPolicy`] to a run's counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    UnmatchedLines,
    UnusedSuppressions,
}

impl ExitPolicy {
    /// Unmatched lines are checked before unused suppressions.
    pub fn decide(&self, counts: Counts) -> Verdict {
        if self.error && counts.unmatched_lines > 0 {
            Verdict::UnmatchedLines
        } else if self.error_unused && counts.unmatched_suppressions > 0 {
            Verdict::UnusedSuppressions
        } else {
            Verdict::Pass
        }
    }
}

impl Verdict {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Pass => ExitCode::Success,
            Verdict::UnmatchedLines | Verdict::UnusedSuppressions => ExitCode::Failed,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Pass => "Exiting successfully.",
            Verdict::UnmatchedLines => "There were unmatched input lines, exiting with error.",
            Verdict::UnusedSuppressions => {
                "There were unmatched suppressions, exiting with error."
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
