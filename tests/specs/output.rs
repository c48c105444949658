//! Report formats.

use crate::prelude::*;

#[test]
fn text_report_lists_differences_and_summary() {
    let project = Project::new();
    let supp = project.file("sca.supp", "a\nb\nc\n");
    project
        .cmd()
        .arg(&supp)
        .write_stdin("a\nb\nnew\nc\n")
        .assert()
        .success()
        .stdout("+ 2: new\nUnmatched input lines: 1\nUnmatched suppressions: 0\n");
}

#[test]
fn repeated_finding_marks_the_later_line() {
    let project = Project::new();
    let supp = project.file("sca.supp", "X\n");
    project
        .cmd()
        .arg(&supp)
        .write_stdin("X\nX\n")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("+ 1: X\n"));
}

#[test]
fn input_can_come_from_a_file() {
    let project = Project::new();
    let supp = project.file("sca.supp", "warning: .*\n");
    let input = project.file("sca.log", "warning: one\n");
    project
        .cmd()
        .arg(&supp)
        .arg("--input")
        .arg(&input)
        .args(["-e", "-u"])
        .assert()
        .success()
        .stdout("Unmatched input lines: 0\nUnmatched suppressions: 0\n");
}

#[test]
fn json_report_is_a_single_document() {
    let project = Project::new();
    let supp = project.file("sca.supp", "a\ngone\n");
    let output = project
        .cmd()
        .arg(&supp)
        .args(["-o", "json", "-vvv"])
        .write_stdin("a\nnew\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["counts"]["unmatched_lines"], 1);
    assert_eq!(doc["counts"]["unmatched_suppressions"], 1);
    assert_eq!(doc["events"][0]["kind"], "match");
}

#[test]
fn always_color_emits_escapes() {
    let project = Project::new();
    let supp = project.file("sca.supp", "a\n");
    project
        .cmd()
        .arg(&supp)
        .arg("--color=always")
        .write_stdin("b\n")
        .assert()
        .stdout(predicates::str::contains("\u{1b}["));
}

#[test]
fn no_color_wins_over_always() {
    let project = Project::new();
    let supp = project.file("sca.supp", "a\n");
    project
        .cmd()
        .arg(&supp)
        .args(["--color=always", "--no-color"])
        .write_stdin("b\n")
        .assert()
        .stdout(predicates::str::contains("\u{1b}[").not());
}
