// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;

#[parameterized(
    quiet_hides_explain = { 0, 1, false },
    explain_shows_explain = { 1, 1, true },
    explain_hides_input = { 1, 2, false },
    internal_shows_input = { 3, 2, true },
    internal_hides_nothing_below = { 3, 3, true },
    log_levels_show_everything = { 4, 3, true },
    beyond_max_shows_everything = { 7, 3, true },
)]
fn level_gating(verbosity: u8, level: u8, enabled: bool) {
    let logger = VerboseLogger::new(verbosity);
    assert_eq!(logger.is_enabled(level), enabled);
    assert_eq!(logger.render(level, "msg").is_some(), enabled);
}

#[test]
fn plain_levels_write_message_only() {
    let logger = VerboseLogger::new(2);
    assert_eq!(logger.render(1, "Match:"), Some("Match:".to_string()));
}

#[test]
fn log_level_mode_prefixes_level() {
    let logger = VerboseLogger::new(4);
    assert_eq!(logger.render(3, "table"), Some("LOG(3): table".to_string()));
}

#[test]
fn log_writes_line_with_newline() {
    let mut out = Vec::new();
    let logger = VerboseLogger::new(1);
    logger.log(&mut out, 1, "shown").unwrap();
    logger.log(&mut out, 2, "hidden").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "shown\n");
}

#[test]
fn default_is_quiet() {
    assert_eq!(VerboseLogger::default().level(), 0);
}
