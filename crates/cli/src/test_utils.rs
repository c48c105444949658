//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;

use regex::Regex;
use tempfile::{NamedTempFile, TempDir};

/// Boxed predicate, so differently-built matchers fit in one Vec.
pub type BoxedMatcher = Box<dyn Fn(&str) -> bool>;

/// Full-line matchers for each pattern, without going through a file.
pub fn full_matchers(patterns: &[&str]) -> Vec<BoxedMatcher> {
    patterns
        .iter()
        .map(|pattern| {
            let re = Regex::new(&format!("^(?:{pattern})$")).unwrap();
            Box::new(move |text: &str| re.is_match(text)) as BoxedMatcher
        })
        .collect()
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scafaps.toml"), config).unwrap();
    dir
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    temp_file_with_bytes(content.as_bytes())
}

/// Creates a temp file with raw bytes, e.g. invalid UTF-8.
pub fn temp_file_with_bytes(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a temp file with content using writeln! for each line.
///
/// Useful for tests that need explicit newlines.
pub fn temp_file_with_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}
