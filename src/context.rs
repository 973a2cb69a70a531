//! The values substituted into file names and template bodies.

use serde_json::{Map, Value};
use std::path::Path;

/// Field values shared by every sync pass of one invocation.
///
/// Built once, then only read, so the skeleton and every plugin see the
/// same substitutions.
#[derive(Debug, Clone, Default)]
pub struct SyncContext {
    fields: Map<String, Value>,
}

impl SyncContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field.
    pub fn with<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether existing destination files may be overwritten.
    pub fn force(&self) -> bool {
        self.get("force").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Options of a `create` run once CLI values and stored defaults are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectOptions {
    pub name: String,
    pub modname: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub version: String,
    pub skeleton: String,
    pub plugins: Vec<String>,
    pub copyright_year: i32,
    pub force: bool,
}

impl ProjectOptions {
    /// Builds the context for a project created in `dir`.
    /// `modname` falls back to the project name.
    pub fn to_context(&self, dir: &Path) -> SyncContext {
        let modname = self.modname.clone().unwrap_or_else(|| self.name.clone());
        SyncContext::new()
            .with("name", self.name.as_str())
            .with("dir", dir.display().to_string())
            .with("force", self.force)
            .with("copyright_year", self.copyright_year)
            .with("author", self.author.clone())
            .with("author_email", self.author_email.clone())
            .with("version", self.version.as_str())
            .with("skeleton", self.skeleton.as_str())
            .with("plugins", self.plugins.clone())
            .with("modname", modname)
            .with("description", self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_force_defaults_to_false() {
        assert!(!SyncContext::new().force());
        assert!(SyncContext::new().with("force", true).force());
        assert!(!SyncContext::new().with("force", "yes").force());
    }

    #[test]
    fn test_project_context_fields() {
        let options = ProjectOptions {
            name: "demo".to_string(),
            version: "0.7.0".to_string(),
            skeleton: "default".to_string(),
            copyright_year: 2024,
            ..Default::default()
        };
        let context = options.to_context(Path::new("/tmp/demo"));

        assert_eq!(context.get("modname"), Some(&json!("demo")));
        assert_eq!(context.get("author"), Some(&Value::Null));
        assert_eq!(context.get("plugins"), Some(&json!([])));
        assert_eq!(context.get("dir"), Some(&json!("/tmp/demo")));
        assert!(!context.force());
    }
}
