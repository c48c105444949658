// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! scafaps library.
//!
//! Filters static code analysis output against a file of known findings.
//! The alignment engine lives in [`align`]; everything else loads inputs,
//! merges settings and renders results.

pub mod align;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod input;
pub mod report;
pub mod runner;
pub mod settings;
pub mod suppress;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
