//! Exit status under the failure switches.

use crate::prelude::*;

#[test]
fn leftovers_exit_zero_by_default() {
    let project = Project::new();
    let supp = project.file("sca.supp", "warning: old\n");
    project
        .cmd()
        .arg(&supp)
        .write_stdin("warning: new\n")
        .assert()
        .success();
}

#[test]
fn error_fails_on_unsuppressed_output() {
    let project = Project::new();
    let supp = project.file("sca.supp", "warning: known.*\n");
    project
        .cmd()
        .arg("-e")
        .arg(&supp)
        .write_stdin("warning: known one\nwarning: fresh\n")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("+ 1: warning: fresh"));
}

#[test]
fn error_passes_when_everything_is_suppressed() {
    let project = Project::new();
    let supp = project.file("sca.supp", "# tool v1\nwarning: a\nwarning: unused\n");
    project
        .cmd()
        .arg("--error")
        .arg(&supp)
        .write_stdin("warning: a\n")
        .assert()
        .success();
}

#[test]
fn error_unused_fails_on_stale_suppressions() {
    let project = Project::new();
    let supp = project.file("sca.supp", "warning: a\nwarning: fixed\n");
    project
        .cmd()
        .arg("-u")
        .arg(&supp)
        .write_stdin("warning: a\n")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("- 1: warning: fixed"));
}

#[test]
fn bad_suppression_fails_and_names_it() {
    let project = Project::new();
    let supp = project.file("sca.supp", "ok\nwarning: (unclosed\n");
    project
        .cmd()
        .arg(&supp)
        .write_stdin("ok\n")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Error compiling suppression in line 1"))
        .stdout(predicates::str::contains(">>warning: (unclosed<<"))
        .stdout(predicates::str::contains("Compilation errors in 1 suppressions"));
}

#[test]
fn verdict_is_explained_at_level_one() {
    let project = Project::new();
    let supp = project.file("sca.supp", "warning: a\n");
    project
        .cmd()
        .args(["-v", "-e"])
        .arg(&supp)
        .write_stdin("warning: a\n")
        .assert()
        .success()
        .stdout(predicates::str::ends_with("Exiting successfully.\n"));
}
