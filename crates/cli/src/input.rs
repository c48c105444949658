// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading analysis output to be filtered.

use std::io::{self, Read};
use std::path::Path;

use crate::file_reader::FileContent;

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;

/// One line of analysis output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// 0-based position in the input.
    pub line_number: usize,
    pub content: String,
}

impl AsRef<str> for InputLine {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

/// Split text into numbered lines, dropping `\n` and `\r\n` terminators.
pub fn split_lines(text: &str) -> Vec<InputLine> {
    text.lines()
        .enumerate()
        .map(|(line_number, content)| InputLine {
            line_number,
            content: content.to_string(),
        })
        .collect()
}

/// Read a whole stream. Invalid UTF-8 is replaced rather than rejected,
/// since tools do not always emit clean text.
pub fn read_lines<R: Read>(mut reader: R) -> io::Result<Vec<InputLine>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(split_lines(&String::from_utf8_lossy(&buf)))
}

/// Read the file at `path`.
pub fn read_file(path: &Path) -> io::Result<Vec<InputLine>> {
    let content = FileContent::read(path)?;
    Ok(split_lines(&content.to_text_lossy()))
}
