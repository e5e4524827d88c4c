//! Read-only classification listing for `polish scan`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use crate::core::classify::{Classification, classify};
use crate::io::walk::walk_snippets;

/// One walked file and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub classification: Classification,
}

/// Classify every walked file without modifying anything.
///
/// Files that cannot be read are logged and omitted from the listing.
pub fn scan_root(root: &Path) -> Result<Vec<ScanEntry>> {
    let files = walk_snippets(root)?;
    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable snippet");
                continue;
            }
        };
        let classification = classify(&path, &contents);
        entries.push(ScanEntry {
            path,
            classification,
        });
    }
    Ok(entries)
}
