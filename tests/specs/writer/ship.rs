//! `seqlog ship` specs

use crate::prelude::*;

#[test]
fn empty_input_delivers_nothing() {
    let output = seqlog_targeted()
        .args(["ship", "app"])
        .write_stdin("")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "delivered 0, dropped 0");
}

#[test]
fn blank_lines_are_skipped() {
    let output = seqlog_targeted()
        .args(["ship", "app"])
        .write_stdin("\n   \n\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "delivered 0, dropped 0");
}

#[test]
fn undeliverable_lines_are_counted_and_fail_the_run() {
    let output = seqlog_targeted()
        .args(["ship", "app"])
        .write_stdin("first\nsecond\n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout(&output).trim(), "delivered 0, dropped 2");
    assert!(stderr(&output).contains("2 of 2 events dropped"));
}
