//! Sync listener that turns skeleton files into project files.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_SUFFIX;
use crate::context::SyncContext;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::sync::SyncListener;

/// Returns true when `filename` carries the template marker.
pub fn is_template(filename: &str) -> bool {
    filename.ends_with(TEMPLATE_SUFFIX)
}

/// Renames destination files from the context and renders `.tmpl` bodies
/// after they are copied.
pub struct TemplateListener<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a SyncContext,
    /// Built once; the context does not change during a run
    values: serde_json::Value,
}

impl<'a> TemplateListener<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, context: &'a SyncContext) -> Self {
        Self {
            renderer,
            context,
            values: context.to_value(),
        }
    }
}

impl SyncListener for TemplateListener<'_> {
    fn destpath(
        &self,
        _src_root: &Path,
        _src_name: &str,
        dst_root: &Path,
        dst_name: &str,
    ) -> Result<(PathBuf, String)> {
        let dst_name = dst_name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(dst_name);
        let dst_name = self.renderer.format_name(dst_name, &self.values)?;
        Ok((dst_root.to_path_buf(), dst_name))
    }

    fn exists(&self, _src_root: &Path, _src_name: &str, dst_root: &Path, dst_name: &str) -> bool {
        let target = dst_root.join(dst_name);
        if self.context.force() {
            info!("  {} already exists but forcing overwrite", target.display());
            true
        } else {
            info!("  {} already exists, skipping", target.display());
            false
        }
    }

    fn copy(&self, _src_root: &Path, _src_name: &str, dst_root: &Path, dst_name: &str) -> bool {
        info!("  {} is new, syncing", dst_root.join(dst_name).display());
        true
    }

    fn copied(
        &self,
        _src_root: &Path,
        src_name: &str,
        dst_root: &Path,
        dst_name: &str,
    ) -> Result<()> {
        if !is_template(src_name) {
            return Ok(());
        }

        info!("  Evaluating template {src_name}");
        let target = dst_root.join(dst_name);
        let body = fs::read_to_string(&target)?;
        let rendered = self.renderer.render(&body, &self.values)?;
        fs::write(&target, rendered)?;
        Ok(())
    }
}
