//! `scafaps.toml` discovery and merging.

use crate::prelude::*;

#[test]
fn discovered_config_supplies_suppressions_and_switches() {
    let project = Project::new();
    project.file("sca.supp", "warning: a\n");
    project.file(
        "scafaps.toml",
        "version = 1\n[filter]\nsuppressions = \"sca.supp\"\nerror = true\n",
    );
    project
        .cmd()
        .write_stdin("warning: a\nwarning: b\n")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("+ 1: warning: b"));
}

#[test]
fn config_is_found_from_a_subdirectory() {
    let project = Project::new();
    project.file("sca.supp", "warning: a\n");
    project.file("scafaps.toml", "version = 1\n[filter]\nsuppressions = \"sca.supp\"\n");
    let sub = project.path().join("build");
    std::fs::create_dir(&sub).unwrap();
    scafaps_cmd()
        .current_dir(&sub)
        .write_stdin("warning: a\n")
        .assert()
        .success()
        .stdout("Unmatched input lines: 0\nUnmatched suppressions: 0\n");
}

#[test]
fn explicit_config_flag_is_used() {
    let project = Project::new();
    project.file("sca.supp", "warning: a\n");
    let config = project.file(
        "ci.toml",
        "version = 1\n[filter]\nsuppressions = \"sca.supp\"\nerror_unused = true\n",
    );
    scafaps_cmd()
        .arg("-C")
        .arg(&config)
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn unknown_config_key_is_a_usage_error() {
    let project = Project::new();
    let supp = project.file("sca.supp", "a\n");
    project.file("scafaps.toml", "version = 1\n[filter]\nstrict = true\n");
    project
        .cmd()
        .arg(&supp)
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

#[test]
fn unsupported_version_is_a_usage_error() {
    let project = Project::new();
    let supp = project.file("sca.supp", "a\n");
    project.file("scafaps.toml", "version = 7\n");
    project
        .cmd()
        .arg(&supp)
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

#[test]
fn command_line_suppressions_win_over_config() {
    let project = Project::new();
    project.file("sca.supp", "warning: config\n");
    let cli_supp = project.file("cli.supp", "warning: cli\n");
    project.file("scafaps.toml", "version = 1\n[filter]\nsuppressions = \"sca.supp\"\n");
    project
        .cmd()
        .arg(&cli_supp)
        .arg("-e")
        .write_stdin("warning: cli\n")
        .assert()
        .success();
}
