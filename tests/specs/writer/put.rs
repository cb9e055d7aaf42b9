//! `seqlog put` specs

use crate::prelude::*;

#[test]
fn unreachable_service_fails_without_retrying() {
    let output = seqlog_targeted()
        .args(["put", "app", "hello", "--timestamp", "1700000000000"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Event not delivered"), "{}", err);
    assert!(!err.contains("retries exhausted"), "{}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn failed_put_is_logged_at_error_level() {
    let output = seqlog_targeted()
        .args(["put", "app", "hello"])
        .output()
        .unwrap();

    let err = stderr(&output);
    assert!(err.contains("ERROR"), "{}", err);
    assert!(err.contains("app"), "{}", err);
}
