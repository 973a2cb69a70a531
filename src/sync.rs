//! Tree synchronization: copies a source tree onto a destination tree,
//! asking a [`SyncListener`] what to do with every file.

use log::debug;
use std::fs::{self, File, FileTimes, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::glob::PatternList;
use crate::tree::list_tree;

/// Per-file policy and notification hooks used by [`sync_tree`].
///
/// Every hook receives the source root, the file's path relative to it, and
/// the destination root and name as currently resolved. Each hook has a
/// neutral default, so implementors override only what they need.
pub trait SyncListener {
    /// Called for every file before anything else. May rewrite both the
    /// destination directory and the destination name.
    fn destpath(
        &self,
        _src_root: &Path,
        _src_name: &str,
        dst_root: &Path,
        dst_name: &str,
    ) -> Result<(PathBuf, String)> {
        Ok((dst_root.to_path_buf(), dst_name.to_string()))
    }

    /// Called when the destination already exists. `true` overwrites it,
    /// `false` skips the file.
    fn exists(
        &self,
        _src_root: &Path,
        _src_name: &str,
        _dst_root: &Path,
        _dst_name: &str,
    ) -> bool {
        true
    }

    /// Called when the destination does not exist yet. `true` copies the file.
    fn copy(&self, _src_root: &Path, _src_name: &str, _dst_root: &Path, _dst_name: &str) -> bool {
        true
    }

    /// Called after a file has been copied.
    fn copied(
        &self,
        _src_root: &Path,
        _src_name: &str,
        _dst_root: &Path,
        _dst_name: &str,
    ) -> Result<()> {
        Ok(())
    }
}

/// Listener that keeps every name and copies or overwrites every file.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultListener;

impl SyncListener for DefaultListener {}

/// Counts of the decisions taken during one [`sync_tree`] pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub copied: usize,
    pub skipped: usize,
}

/// Copies `src` to `dst` along with its permissions and timestamps.
fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    preserve_times(&fs::metadata(src)?, dst)
}

fn preserve_times(src_meta: &Metadata, dst: &Path) -> io::Result<()> {
    let times = FileTimes::new()
        .set_accessed(src_meta.accessed()?)
        .set_modified(src_meta.modified()?);
    let file = if src_meta.permissions().readonly() {
        File::open(dst)?
    } else {
        File::options().write(true).open(dst)?
    };
    file.set_times(times)
}

/// Synchronizes the files of `src_dir` into `dst_dir`.
///
/// # Arguments
/// * `src_dir` - Root of the tree to copy
/// * `dst_dir` - Root of the destination tree, created if missing
/// * `exclude` / `include` - Filters handed to [`list_tree`]
/// * `listener` - Decides destination names and whether each file is written
///
/// # Returns
/// * `Result<SyncSummary>` - How many files were copied and skipped
///
/// # Notes
/// Every file resolves its destination from `dst_dir` itself; a rewritten
/// destination root returned by `destpath` applies to that file only.
///
/// # Errors
/// Any I/O or listener error aborts the pass. Files already written stay on disk.
pub fn sync_tree<S, D>(
    src_dir: S,
    dst_dir: D,
    exclude: &PatternList,
    include: &PatternList,
    listener: &dyn SyncListener,
) -> Result<SyncSummary>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let src_dir = src_dir.as_ref();
    let dst_dir = dst_dir.as_ref();

    fs::create_dir_all(dst_dir)?;

    let mut summary = SyncSummary::default();
    for filename in list_tree(src_dir, exclude, include)? {
        let src = src_dir.join(&filename);
        let (dst_root, dst_name) = listener.destpath(src_dir, &filename, dst_dir, &filename)?;
        let dst = dst_root.join(&dst_name);
        if dst_name != filename {
            debug!("Rewrote {filename} to {}", dst.display());
        }

        let proceed = if dst.exists() {
            listener.exists(src_dir, &filename, &dst_root, &dst_name)
        } else {
            listener.copy(src_dir, &filename, &dst_root, &dst_name)
        };

        if !proceed {
            debug!("Skipping {filename}");
            summary.skipped += 1;
            continue;
        }

        copy_file(&src, &dst)?;
        listener.copied(src_dir, &filename, &dst_root, &dst_name)?;
        summary.copied += 1;
    }

    Ok(summary)
}
