// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// The only supported config schema version.
pub const VERSION: u32 = 1;

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "scafaps.toml";
