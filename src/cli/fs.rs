//! Declaration file discovery and output path mapping.

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const DECLARATION_SUFFIX: &str = ".d.ts";
const NODE_MODULES: &str = "node_modules";

#[must_use]
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(DECLARATION_SUFFIX))
}

fn in_node_modules(relative: &Path) -> bool {
    relative
        .components()
        .any(|component| matches!(component, Component::Normal(name) if name == NODE_MODULES))
}

/// Compile `--exclude` patterns. `*` also matches `/`.
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("invalid --exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder
        .build()
        .context("failed to compile --exclude patterns")
}

/// Find every declaration file under `src`, sorted by path.
///
/// Directories named `node_modules` and paths matching `excludes` (relative
/// to `src`) are pruned. A `src` naming a single declaration file yields
/// just that file.
pub fn discover_declaration_files(src: &Path, excludes: &GlobSet) -> Result<Vec<PathBuf>> {
    if !src.exists() {
        bail!("source path {} does not exist", src.display());
    }

    if src.is_file() {
        if is_declaration_file(src) {
            return Ok(vec![src.to_path_buf()]);
        }
        warn!(path = %src.display(), "skipping input that is not a declaration file");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(src).follow_links(true).into_iter();
    for entry in walker.filter_entry(|entry| {
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        if in_node_modules(relative) {
            debug!(path = %entry.path().display(), "skipping node_modules");
            return false;
        }
        if !relative.as_os_str().is_empty() && excludes.is_match(relative) {
            debug!(path = %entry.path().display(), "excluded");
            return false;
        }
        true
    }) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable path: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && is_declaration_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Map an input path under `src` to its mirror under `target`.
#[must_use]
pub fn output_path(src: &Path, target: &Path, input: &Path) -> PathBuf {
    match input.strip_prefix(src) {
        Ok(relative) if !relative.as_os_str().is_empty() => target.join(relative),
        _ => match input.file_name() {
            Some(name) => target.join(name),
            None => target.to_path_buf(),
        },
    }
}
