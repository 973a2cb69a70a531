//! packstrap creates new projects from a skeleton tree and optional plugin
//! trees. Files are copied into the project directory, file names are
//! filled in from the project context, and `.tmpl` files are rendered.

/// Command-line interface module
pub mod cli;

/// `create`, `defaults` and `plugins` command implementations
pub mod commands;

/// Common constants
pub mod constants;

/// Field values used for file name and content substitution
pub mod context;

/// Persisted option defaults (`~/.packstrap`)
pub mod defaults;

/// Error types and handling
pub mod error;

/// Shell-style file name patterns
pub mod glob;

/// Skeleton and plugin directory lookup
pub mod library;

/// The listener that renames and renders skeleton files
pub mod listener;

/// Logger setup
pub mod logger;

/// Body rendering and file name formatting
pub mod renderer;

/// Tree synchronization engine
/// Copies a source tree over a destination tree, one listener decision per file
pub mod sync;

/// Recursive tree listing with exclude/include filters
pub mod tree;
