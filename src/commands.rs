//! Implementations of the `create`, `defaults` and `plugins` commands.

use chrono::Datelike;
use indexmap::IndexSet;
use log::info;
use std::path::{Path, PathBuf};

use crate::cli::{ConfigArgs, CreateArgs};
use crate::context::{ProjectOptions, SyncContext};
use crate::defaults::{apply_updates, Defaults, Settings, SettingsRepository};
use crate::error::Result;
use crate::glob::PatternList;
use crate::library::TemplateLibrary;
use crate::listener::TemplateListener;
use crate::renderer::TemplateRenderer;
use crate::sync::{sync_tree, SyncSummary};

/// Expands a leading `~` and anchors relative paths at the current directory.
pub fn resolve_project_dir(dir: &Path) -> Result<PathBuf> {
    let expanded = match (dir.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => dir.to_path_buf(),
    };
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(std::env::current_dir()?.join(expanded))
    }
}

/// Removes repeated plugin names, keeping the first occurrence.
pub fn dedup_plugins(plugins: Vec<String>) -> Vec<String> {
    plugins
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Merges the `create` arguments with the stored defaults.
pub fn project_options(args: &CreateArgs, stored: &Settings) -> ProjectOptions {
    let defaults = Defaults::resolve(&args.config.supplied(), stored);
    ProjectOptions {
        name: args.name.clone(),
        modname: args.modname.clone(),
        description: args.description.clone(),
        author: defaults.author,
        author_email: defaults.author_email,
        version: defaults.version,
        skeleton: defaults.skeleton,
        plugins: dedup_plugins(defaults.plugins),
        copyright_year: args
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year()),
        force: args.force,
    }
}

/// Syncs the skeleton and then each plugin into `dir`.
///
/// Every pass shares the same context, so a plugin file that collides with
/// an earlier one is skipped unless `force` is set.
///
/// # Errors
/// * `Error::UnknownPlugin` before anything is written if a plugin is missing
/// * Any error raised by [`sync_tree`], aborting the remaining passes
pub fn create_project(
    library: &TemplateLibrary,
    renderer: &dyn TemplateRenderer,
    options: &ProjectOptions,
    dir: &Path,
) -> Result<SyncSummary> {
    library.validate_plugins(&options.plugins)?;

    info!(
        "Creating {} project {} at {}...",
        options.skeleton,
        options.name,
        dir.display()
    );

    let context: SyncContext = options.to_context(dir);
    let listener = TemplateListener::new(renderer, &context);
    let (exclude, include) = (PatternList::empty(), PatternList::empty());

    let mut total = sync_tree(
        library.skeleton(&options.skeleton),
        dir,
        &exclude,
        &include,
        &listener,
    )?;

    for plugin in &options.plugins {
        info!("Including plugin {plugin}...");
        let summary = sync_tree(library.plugin(plugin)?, dir, &exclude, &include, &listener)?;
        total.copied += summary.copied;
        total.skipped += summary.skipped;
    }

    Ok(total)
}

/// Runs `packstrap create`.
pub fn create(
    args: &CreateArgs,
    library: &TemplateLibrary,
    settings: &dyn SettingsRepository,
    renderer: &dyn TemplateRenderer,
) -> Result<SyncSummary> {
    let options = project_options(args, &settings.load()?);
    let dir = resolve_project_dir(&args.dir)?;
    create_project(library, renderer, &options, &dir)
}

/// Runs `packstrap defaults`: stores every supplied option and returns the
/// full set of stored defaults. The settings are written only on change.
pub fn set_defaults(
    args: &ConfigArgs,
    library: &TemplateLibrary,
    settings: &dyn SettingsRepository,
) -> Result<Settings> {
    let supplied = args.supplied();
    let plugins: Vec<String> = args
        .plugins
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect();
    library.validate_plugins(&plugins)?;

    let mut stored = settings.load()?;
    if apply_updates(&mut stored, &supplied) {
        settings.save(&stored)?;
    }

    settings.load()
}

/// Runs `packstrap plugins`.
pub fn list_plugins(library: &TemplateLibrary) -> Result<Vec<String>> {
    library.list_plugins()
}
