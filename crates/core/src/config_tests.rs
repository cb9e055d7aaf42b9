// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn minimal_config_uses_defaults() {
    let config = WriterConfig::from_toml_str(
        r#"
        region = "eu-west-1"
        log_group = "/app/backend"
        "#,
    )
    .unwrap();

    assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    assert_eq!(config.endpoint, None);
    assert_eq!(config.endpoint_url(), "https://logs.eu-west-1.amazonaws.com");
}

#[test]
fn full_config_parses_humantime_timeout() {
    let config = WriterConfig::from_toml_str(
        r#"
        region = "us-east-1"
        log_group = "jobs"
        max_retries = 5
        endpoint = "http://localhost:4566/"
        request_timeout = "2s 500ms"
        "#,
    )
    .unwrap();

    assert_eq!(config.max_retries, 5);
    assert_eq!(config.request_timeout, Duration::from_millis(2500));
    assert_eq!(config.endpoint_url(), "http://localhost:4566");
}

#[test]
fn missing_log_group_is_a_parse_error() {
    let err = WriterConfig::from_toml_str(r#"region = "us-east-1""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
}

#[test]
fn blank_region_is_rejected() {
    let err = WriterConfig::new("  ", "jobs").validate().unwrap_err();
    assert!(matches!(err, ConfigError::Missing("region")));
}

#[test]
fn zero_retries_is_rejected() {
    let err = WriterConfig::new("us-east-1", "jobs")
        .with_max_retries(0)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("max_retries"));
}

#[test]
fn non_http_endpoint_is_rejected() {
    let err = WriterConfig::new("us-east-1", "jobs")
        .with_endpoint("localhost:4566")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "endpoint", .. }));
}

#[test]
fn overlong_log_group_is_rejected() {
    let err = WriterConfig::new("us-east-1", "g".repeat(513))
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "log_group", .. }));
}

#[test]
fn load_reads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "region = \"ap-south-1\"\nlog_group = \"svc\"").unwrap();

    let config = WriterConfig::load(file.path()).unwrap();
    assert_eq!(config.region, "ap-south-1");
    assert_eq!(config.log_group, "svc");
}

#[test]
fn load_reports_missing_file() {
    let err = WriterConfig::load(Path::new("/nonexistent/seqlog.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/seqlog.toml"));
}
