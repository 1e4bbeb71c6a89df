// tests/config_test.rs
use bumper::config::{load_config, load_with_env, Config};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_from_file() {
    let temp_file = write_config(
        r#"
commit_range = "release..main"

[tracker]
base_url = "https://tracker.internal/services/v5"
api_key = "file-key"
project_id = 1234
"#,
    );

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.commit_range, "release..main");

    let settings = config.tracker_settings().unwrap();
    assert_eq!(settings.base_url, "https://tracker.internal/services/v5");
    assert_eq!(settings.api_key, "file-key");
    assert_eq!(settings.project_id, 1234);
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp_file = write_config("[tracker]\nproject_id = 7\n");

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.commit_range, Config::default().commit_range);
    assert_eq!(config.tracker.base_url, Config::default().tracker.base_url);
    assert_eq!(config.tracker.project_id, Some(7));
    assert_eq!(config.tracker.api_key, None);
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_file = write_config("[tracker\nproject_id = ");

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(load_config(Some("/nonexistent/bumper.toml")).is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let temp_file = write_config("[tracker]\napi_key = \"file-key\"\nproject_id = 1\n");
    env::set_var("TRACKER_KEY", "env-key");
    env::set_var("PROJECT_ID", "42");

    let config = load_with_env(Some(temp_file.path().to_str().unwrap()));

    env::remove_var("TRACKER_KEY");
    env::remove_var("PROJECT_ID");

    let settings = config.unwrap().tracker_settings().unwrap();
    assert_eq!(settings.api_key, "env-key");
    assert_eq!(settings.project_id, 42);
}

#[test]
#[serial]
fn test_invalid_project_id_in_environment() {
    let temp_file = write_config("");
    env::set_var("PROJECT_ID", "not-a-number");

    let result = load_with_env(Some(temp_file.path().to_str().unwrap()));

    env::remove_var("PROJECT_ID");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid Project ID"));
}
