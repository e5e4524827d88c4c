//! Corpus walking for the enhancement pipeline.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ignore::WalkBuilder;
use tracing::warn;

use crate::core::classify::is_walked_extension;

/// Enumerate all snippet files under `root`, recursing through every
/// subdirectory, restricted to the walked extension set and sorted by path.
///
/// A missing root is a fatal configuration error, reported before any file
/// I/O rather than as an ambiguous "0 files processed" run. Standard ignore
/// filters are disabled: the corpus is walked as-is, hidden files included.
/// Symlinks are not followed. Unreadable directory entries are logged and
/// skipped.
pub fn walk_snippets(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("snippet root {} is not a directory", root.display());
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable walk entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if is_walked_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
