//! Configuration error specs

use crate::prelude::*;

#[test]
fn missing_region_explains_how_to_set_it() {
    let output = seqlog()
        .args(["--log-group", "specs", "put", "app", "hello"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("No region configured"), "{}", err);
    assert!(err.contains("--region <value>"), "{}", err);
}

#[test]
fn unreadable_config_file_is_reported() {
    let output = seqlog()
        .args(["--config", "/nonexistent/seqlog.toml", "put", "app", "hello"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Configuration rejected"), "{}", err);
    assert!(err.contains("/nonexistent/seqlog.toml"), "{}", err);
}

#[test]
fn non_http_endpoint_is_rejected() {
    let output = seqlog()
        .args([
            "--region",
            "us-east-1",
            "--log-group",
            "specs",
            "--endpoint",
            "localhost:4566",
            "put",
            "app",
            "hello",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid endpoint"));
}

#[test]
fn zero_retry_budget_is_rejected() {
    let output = seqlog()
        .args([
            "--region",
            "us-east-1",
            "--log-group",
            "specs",
            "--max-retries",
            "0",
            "put",
            "app",
            "hello",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("max_retries"));
}

#[test]
fn config_file_supplies_target() {
    let project = Project::empty();
    let config = project.file(
        "seqlog.toml",
        "region = \"us-east-1\"\nlog_group = \"specs\"\nendpoint = \"http://127.0.0.1:9\"\n",
    );

    // Target resolves; delivery then fails against the closed port
    let output = seqlog()
        .arg("--config")
        .arg(&config)
        .args(["put", "app", "hello"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Event not delivered"));
}
