//! Lookup of skeleton and plugin trees on disk.

use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR, PLUGINS_DIR, SKELETONS_DIR};
use crate::error::{Error, Result};

/// Directories holding the available skeletons and plugins.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    skeletons: PathBuf,
    plugins: PathBuf,
}

impl TemplateLibrary {
    pub fn new<S: Into<PathBuf>, P: Into<PathBuf>>(skeletons: S, plugins: P) -> Self {
        Self {
            skeletons: skeletons.into(),
            plugins: plugins.into(),
        }
    }

    /// Builds the library from explicit directories, falling back to
    /// `<data dir>/packstrap/skels` and `<data dir>/packstrap/plugins`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a directory is missing and the user data
    ///   directory cannot be determined
    pub fn locate(skeletons: Option<PathBuf>, plugins: Option<PathBuf>) -> Result<Self> {
        let app_dir = || {
            let data_dir = dirs::data_dir().ok_or_else(|| {
                Error::ConfigError("cannot determine user data directory".to_string())
            })?;
            Ok::<_, Error>(data_dir.join(APP_DIR))
        };
        let skeletons = match skeletons {
            Some(dir) => dir,
            None => app_dir()?.join(SKELETONS_DIR),
        };
        let plugins = match plugins {
            Some(dir) => dir,
            None => app_dir()?.join(PLUGINS_DIR),
        };
        Ok(Self::new(skeletons, plugins))
    }

    /// Root of the named skeleton. Its existence is checked when it is synced.
    pub fn skeleton(&self, name: &str) -> PathBuf {
        self.skeletons.join(name)
    }

    /// Root of the named plugin.
    ///
    /// # Errors
    /// * `Error::UnknownPlugin` if the plugins directory has no entry by that name
    pub fn plugin(&self, name: &str) -> Result<PathBuf> {
        self.validate_plugins(&[name.to_string()])?;
        Ok(self.plugins.join(name))
    }

    /// Names of every entry in the plugins directory, sorted.
    pub fn list_plugins(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.plugins)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Checks that every plugin name exists.
    pub fn validate_plugins(&self, plugins: &[String]) -> Result<()> {
        if plugins.is_empty() {
            return Ok(());
        }
        let available = self.list_plugins()?;
        match plugins.iter().find(|plugin| !available.contains(plugin)) {
            Some(name) => Err(Error::UnknownPlugin { name: name.clone() }),
            None => Ok(()),
        }
    }
}
