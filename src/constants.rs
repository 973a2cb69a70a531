//! Common constants used throughout packstrap.

/// Suffix marking a skeleton file as a content template
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Name of the per-user defaults file, stored in the home directory
pub const SETTINGS_FILE: &str = ".packstrap";

/// Application directory name under the user data directory
pub const APP_DIR: &str = "packstrap";

/// Directory holding skeletons, relative to the application directory
pub const SKELETONS_DIR: &str = "skels";

/// Directory holding plugins, relative to the application directory
pub const PLUGINS_DIR: &str = "plugins";

/// Built-in project version used when neither the CLI nor the defaults file set one
pub const DEFAULT_VERSION: &str = "0.7.0";

/// Built-in skeleton used when neither the CLI nor the defaults file set one
pub const DEFAULT_SKELETON: &str = "default";

/// Option names persisted by the `defaults` command
pub const PERSISTED_OPTIONS: [&str; 5] =
    ["author", "author_email", "version", "skeleton", "plugins"];
