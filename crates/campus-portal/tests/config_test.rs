//! Config parsing and validation integration tests

use std::path::PathBuf;

use campus_portal::config::Args;
use clap::Parser;

#[test]
fn test_defaults() {
    // Env overrides would bleed into the default assertions.
    for var in [
        "CAMPUS_API_URL",
        "CAMPUS_HTTP_TIMEOUT",
        "CAMPUS_OUTPUT_DIR",
        "CAMPUS_LOG_LEVEL",
    ] {
        std::env::remove_var(var);
    }

    let args = Args::try_parse_from(["campus-portal"]).expect("defaults parse");
    assert_eq!(args.api_url, "http://localhost:8000/api");
    assert_eq!(args.timeout_secs, 30);
    assert_eq!(args.output_dir, PathBuf::from("."));
    assert_eq!(args.log_level, "info");
    assert!(args.validate().is_ok());
}

#[test]
fn test_flag_overrides() {
    let args = Args::try_parse_from([
        "campus-portal",
        "--api-url",
        "https://campus.example.org/api",
        "--timeout-secs",
        "5",
        "--output-dir",
        "/tmp/certs",
        "--log-level",
        "debug",
    ])
    .expect("flags parse");

    assert_eq!(args.api_url, "https://campus.example.org/api");
    assert_eq!(args.timeout_secs, 5);
    assert_eq!(args.output_dir, PathBuf::from("/tmp/certs"));
    assert_eq!(args.log_level, "debug");
    assert!(args.validate().is_ok());
}

#[test]
fn test_client_config_mapping() {
    let args = Args::try_parse_from([
        "campus-portal",
        "--api-url",
        "https://campus.example.org/api",
        "--timeout-secs",
        "5",
    ])
    .expect("flags parse");

    let config = args.client_config();
    assert_eq!(config.base_url, "https://campus.example.org/api");
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let args = Args::try_parse_from(["campus-portal", "--timeout-secs", "0"]).expect("parses");
    assert!(args.validate().is_err());
}

#[test]
fn test_validate_rejects_non_http_url() {
    let args =
        Args::try_parse_from(["campus-portal", "--api-url", "ftp://campus"]).expect("parses");
    assert!(args.validate().is_err());
}
