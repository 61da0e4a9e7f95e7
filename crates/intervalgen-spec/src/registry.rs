//! Enumeration of plugins inside one directory of the tree.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::DiscoveryError;

/// Directory names that are never plugins, regardless of contents.
const IGNORED_DIRS: &[&str] = &["__pycache__"];

/// Lists the plugins directly under `path`.
///
/// A plugin is an immediate subdirectory that is not a transient
/// tool-generated cache entry. Non-directory entries are skipped. The result
/// is sorted, but callers must not rely on any particular ordering.
///
/// # Errors
///
/// Returns [`DiscoveryError::NotADirectory`] when `path` does not exist or
/// is not a directory.
pub fn list_plugins(path: &Path) -> Result<Vec<String>, DiscoveryError> {
    if !path.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let entries = fs::read_dir(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        // Plugin identifiers are used as path segments and YAML keys; a
        // non-UTF-8 directory name cannot be one.
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if is_ignored(&name) {
            trace!(entry = %name, "skipping non-plugin directory");
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

fn is_ignored(name: &str) -> bool {
    name.starts_with('.') || IGNORED_DIRS.contains(&name)
}
