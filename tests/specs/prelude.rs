//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running scafaps against throwaway files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the scafaps binary.
///
/// Environment that would change behavior between machines is cleared.
pub fn scafaps_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scafaps"));
    cmd.env_remove("SCAFAPS_CONFIG")
        .env_remove("SCAFAPS_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Temporary project directory holding suppression and config files.
///
/// Contains an empty `.git` so config discovery never leaves it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write `content` to `name` inside the project and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A command running inside the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = scafaps_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
