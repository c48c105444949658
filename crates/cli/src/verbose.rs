// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leveled verbose output.
//!
//! Levels, selected by repeating `-v`:
//! - 0: normal program output
//! - 1: explain results
//! - 2: debug user input
//! - 3: show internal results
//! - 4: prefix every leveled message with its level
//!
//! The logger is a plain value handed to whoever writes output; there is
//! no process-wide verbosity.

use std::io::{self, Write};

/// Highest level that changes output.
pub const MAX_LEVEL: u8 = 4;

/// Verbose output logger. Writes a message if its level is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerboseLogger {
    level: u8,
}

impl VerboseLogger {
    pub fn new(level: u8) -> Self {
        Self { level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Whether messages at `level` are written.
    pub fn is_enabled(&self, level: u8) -> bool {
        self.level >= MAX_LEVEL || level <= self.level
    }

    /// The text to write for a message at `level`, if any.
    pub fn render(&self, level: u8, msg: &str) -> Option<String> {
        if self.level >= MAX_LEVEL {
            Some(format!("LOG({level}): {msg}"))
        } else if level <= self.level {
            Some(msg.to_string())
        } else {
            None
        }
    }

    /// Write a message line at `level` to `out`.
    pub fn log<W: Write + ?Sized>(&self, out: &mut W, level: u8, msg: &str) -> io::Result<()> {
        match self.render(level, msg) {
            Some(line) => writeln!(out, "{line}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
