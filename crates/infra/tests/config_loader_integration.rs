//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use tabsync_infra::config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "server_url": "https://tableau.example.com",
        "api_version": "3.22",
        "site": "analytics",
        "token_name": "ci-token",
        "token_secret": "s3cret"
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_ok(), "Failed to load config from JSON file");

    let config = result.unwrap();
    assert_eq!(config.server_url, "https://tableau.example.com");
    assert_eq!(config.api_version, "3.22");
    assert_eq!(config.site, "analytics");
    assert_eq!(config.token_name, "ci-token");
    assert_eq!(config.token_secret, "s3cret");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
        server_url = "https://tableau.example.com"
        api_version = "3.22"
        site = ""
        token_name = "ci-token"
        token_secret = "s3cret"
    "#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_ok(), "Failed to load config from TOML file");

    let config = result.unwrap();
    assert_eq!(config.site, "");
    assert_eq!(config.token_name, "ci-token");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_rejects_incomplete_file() {
    let json_content = r#"{
        "server_url": "https://tableau.example.com"
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_err(), "Incomplete config should fail to load");

    std::fs::remove_file(path).ok();
}
