//! Error handling for packstrap.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors raised while creating a project or managing defaults.
///
/// Filesystem failures are never caught inside the sync engine; they surface
/// here and abort the running command.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the content template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors reading or writing the defaults file
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// A filename placeholder names a field the context does not define
    #[error("Missing field '{field}' while formatting '{name}'.")]
    MissingField { field: String, name: String },

    /// A file name whose placeholders are malformed
    #[error("Cannot format '{name}': {reason}.")]
    FormatError { name: String, reason: String },

    /// A plugin name that has no directory under the plugins root
    #[error("Invalid plugin {name}.")]
    UnknownPlugin { name: String },

    /// Represents other configuration problems
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
