// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suppression file loading.
//!
//! One regular expression per line. A suppression accepts an output line
//! only if the expression matches the whole line. Lines starting with `#`
//! (including a shebang) and empty lines are skipped.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::align::Matcher;
use crate::file_reader::FileContent;

#[cfg(test)]
#[path = "suppress_tests.rs"]
mod tests;

/// A compiled suppression with its position in the source file.
#[derive(Debug, Clone)]
pub struct Suppression {
    /// 0-based line in the suppression file.
    pub line_number: usize,
    /// Text as written.
    pub raw: String,
    pattern: Regex,
}

impl Suppression {
    /// Compile `raw` into a full-line matcher.
    ///
    /// The expression is parsed on its own and the parsed form is printed
    /// back inside the anchors. Input like `a)|(b` is rejected, and a
    /// `(?x)` comment cannot swallow the closing anchor.
    pub fn compile(line_number: usize, raw: &str) -> Result<Self, CompileError> {
        let error = |message: String| CompileError {
            line_number,
            raw: raw.to_string(),
            message,
        };
        let hir = regex_syntax::Parser::new()
            .parse(raw)
            .map_err(|err| error(short_message(&err)))?;
        let pattern =
            Regex::new(&format!("^(?:{hir})$")).map_err(|err| error(short_message(&err)))?;
        Ok(Self {
            line_number,
            raw: raw.to_string(),
            pattern,
        })
    }
}

impl Matcher for Suppression {
    fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// A suppression line that is not a valid expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error compiling suppression in line {line_number}: {message}")]
pub struct CompileError {
    pub line_number: usize,
    pub raw: String,
    pub message: String,
}

/// Errors loading a suppression file.
#[derive(Debug, thiserror::Error)]
pub enum SuppressError {
    #[error("failed to read suppressions from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("suppression file {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// Every bad line is collected before failing.
    #[error("Compilation errors in {} suppressions", errors.len())]
    Compile { errors: Vec<CompileError> },
}

/// Whether a raw line carries a suppression at all.
fn is_suppression_line(raw: &str) -> bool {
    !raw.is_empty() && !raw.starts_with('#')
}

/// Compile every suppression in `text`, in file order.
pub fn parse(text: &str) -> Result<Vec<Suppression>, SuppressError> {
    let mut suppressions = Vec::new();
    let mut errors = Vec::new();

    for (line_number, raw) in text.lines().enumerate() {
        if !is_suppression_line(raw) {
            continue;
        }
        match Suppression::compile(line_number, raw) {
            Ok(suppression) => suppressions.push(suppression),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(suppressions)
    } else {
        Err(SuppressError::Compile { errors })
    }
}

/// Read and compile the suppression file at `path`.
pub fn load(path: &Path) -> Result<Vec<Suppression>, SuppressError> {
    let content = FileContent::read(path).map_err(|source| SuppressError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = content.as_str().ok_or_else(|| SuppressError::Encoding {
        path: path.to_path_buf(),
    })?;
    parse(text)
}

/// The one-line reason from a regex error, without the pattern diagram.
fn short_message(err: &impl std::fmt::Display) -> String {
    let full = err.to_string();
    full.lines()
        .rev()
        .find_map(|line| line.strip_prefix("error: "))
        .unwrap_or(full.trim())
        .to_string()
}
