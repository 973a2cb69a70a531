use packstrap::defaults::{JsonFileSettings, Settings, SettingsRepository};
use packstrap::error::Error;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let settings = JsonFileSettings::new(temp_dir.path().join(".packstrap"));
    assert!(settings.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".packstrap");
    let settings = JsonFileSettings::new(&path);

    let mut stored = Settings::new();
    stored.insert("author".to_string(), json!("Jane"));
    stored.insert("plugins".to_string(), json!(["docs"]));
    settings.save(&stored).unwrap();

    assert_eq!(settings.load().unwrap(), stored);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"author\": \"Jane\""));
}

#[test]
fn test_non_object_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".packstrap");
    fs::write(&path, "[1, 2]").unwrap();

    let result = JsonFileSettings::new(&path).load();
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_invalid_json_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".packstrap");
    fs::write(&path, "{\"author\": ").unwrap();

    let result = JsonFileSettings::new(&path).load();
    assert!(matches!(result, Err(Error::JsonError(_))));
}
