//! Recursive listing of a skeleton or plugin tree.

use log::debug;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::glob::PatternList;

fn invalid_path(path: &Path) -> Error {
    Error::ConfigError(format!("Invalid path: {}", path.display()))
}

fn entry_name(entry: &DirEntry) -> Result<&str> {
    let name = entry.file_name().to_str();
    name.ok_or_else(|| invalid_path(entry.path()))
}

/// Joins the components of `path` below `root` with `/`, whatever the platform.
fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| Error::ConfigError(e.to_string()))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str();
        let part = part.ok_or_else(|| invalid_path(path))?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

/// Lists every file below `root` as a `/`-separated path relative to `root`.
///
/// # Arguments
/// * `root` - Directory to walk
/// * `exclude` - Entries whose base name matches are skipped, directories
///   with their whole subtree
/// * `include` - When non-empty, files whose base name matches none of the
///   patterns are skipped; directories are always descended
///
/// # Returns
/// * `Result<Vec<String>>` - Depth-first listing, entries sorted by file name
///   within each directory
///
/// # Errors
/// * `Error::IoError` if `root` does not exist, is not a directory, or a
///   directory cannot be read
pub fn list_tree<P: AsRef<Path>>(
    root: P,
    exclude: &PatternList,
    include: &PatternList,
) -> Result<Vec<String>> {
    let root = root.as_ref();
    if !std::fs::metadata(root)?.is_dir() {
        let message = format!("Not a directory: {}", root.display());
        return Err(Error::IoError(io::Error::other(message)));
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let excluded = entry
                .file_name()
                .to_str()
                .is_some_and(|name| exclude.matches_any(name));
            if excluded {
                debug!("Excluding {}", entry.path().display());
            }
            !excluded
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        if !include.is_empty() && !include.matches_any(entry_name(&entry)?) {
            debug!("Not included: {}", entry.path().display());
            continue;
        }

        files.push(relative_name(root, entry.path())?);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_name_uses_forward_slashes() {
        let root = PathBuf::from("root");
        let path = root.join("a").join("b").join("c.txt");
        assert_eq!(relative_name(&root, &path).unwrap(), "a/b/c.txt");
    }
}
