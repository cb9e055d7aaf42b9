//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let output = seqlog().arg("--help").output().unwrap();
    assert!(output.status.success());

    let out = stdout(&output);
    for command in ["put", "ship", "completions"] {
        assert!(out.contains(command), "missing {} in:\n{}", command, out);
    }
}

#[test]
fn help_lists_target_flags() {
    let output = seqlog().args(["put", "--help"]).output().unwrap();
    let out = stdout(&output);

    for flag in ["--config", "--region", "--log-group", "--endpoint", "--max-retries", "--timestamp"] {
        assert!(out.contains(flag), "missing {} in:\n{}", flag, out);
    }
}

#[test]
fn version_prints_name() {
    let output = seqlog().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("seqlog "));
}

#[test]
fn completions_generate_for_bash() {
    let output = seqlog().args(["completions", "bash"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("seqlog"));
}
