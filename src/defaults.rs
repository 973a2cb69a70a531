//! Persisted option defaults.
//! Values given to `packstrap defaults` are stored in a per-user JSON file
//! and seed the options of later `create` runs.

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::constants::{DEFAULT_SKELETON, DEFAULT_VERSION, PERSISTED_OPTIONS, SETTINGS_FILE};
use crate::error::{Error, Result};

/// Stored defaults, keyed by option name.
pub type Settings = IndexMap<String, Value>;

/// Storage for persisted defaults.
pub trait SettingsRepository {
    /// Loads every stored default. Missing storage yields an empty map.
    fn load(&self) -> Result<Settings>;

    /// Replaces the stored defaults with `settings`.
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Defaults kept in a JSON file, `~/.packstrap` unless told otherwise.
#[derive(Debug, Clone)]
pub struct JsonFileSettings {
    path: PathBuf,
}

impl JsonFileSettings {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the current user's home directory.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the home directory cannot be determined
    pub fn in_home_dir() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::ConfigError("cannot determine home directory".to_string()))?;
        Ok(Self::new(home.join(SETTINGS_FILE)))
    }
}

impl SettingsRepository for JsonFileSettings {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!("{} does not exist", self.path.display());
            return Ok(Settings::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(Error::ConfigError(format!(
                "{} must contain a JSON object",
                self.path.display()
            ))),
        }
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        debug!("Writing defaults to {}", self.path.display());
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory defaults, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySettings {
    settings: Mutex<Settings>,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsRepository for MemorySettings {
    fn load(&self) -> Result<Settings> {
        let settings = self
            .settings
            .lock()
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        Ok(settings.clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let mut stored = self
            .settings
            .lock()
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        *stored = settings.clone();
        Ok(())
    }
}

/// Project options that can be persisted, after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub version: String,
    pub skeleton: String,
    pub plugins: Vec<String>,
}

fn string_value(settings: &Settings, key: &str) -> Option<String> {
    match settings.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn list_value(settings: &Settings, key: &str) -> Vec<String> {
    match settings.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

impl Defaults {
    /// Resolves each option from `supplied` first, then `stored`, then the
    /// built-in default.
    pub fn resolve(supplied: &Settings, stored: &Settings) -> Self {
        let mut merged = stored.clone();
        merged.extend(supplied.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            author: string_value(&merged, "author"),
            author_email: string_value(&merged, "author_email"),
            version: string_value(&merged, "version")
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            skeleton: string_value(&merged, "skeleton")
                .unwrap_or_else(|| DEFAULT_SKELETON.to_string()),
            plugins: list_value(&merged, "plugins"),
        }
    }
}

/// Copies the persistable options of `supplied` into `stored`.
///
/// # Returns
/// * `bool` - Whether anything was written into `stored`
pub fn apply_updates(stored: &mut Settings, supplied: &Settings) -> bool {
    let mut changed = false;
    for key in PERSISTED_OPTIONS {
        if let Some(value) = supplied.get(key) {
            stored.insert(key.to_string(), value.clone());
            changed = true;
        }
    }
    changed
}
