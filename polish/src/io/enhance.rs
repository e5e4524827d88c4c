//! Per-file read, transform, and write-back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::classify::{Classification, classify};
use crate::core::rule::enhance;
use crate::core::stats::FileOutcome;

/// Read one snippet, apply its strategy, and write back if changed.
///
/// Changed files overwrite the original in place; there is no backup.
/// `dry_run` skips the write while still reporting [`FileOutcome::Changed`].
/// Errors carry the file path; the caller counts them as failures without
/// stopping the run.
pub fn enhance_file(path: &Path, dry_run: bool) -> Result<FileOutcome> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    let strategy = match classify(path, &contents) {
        Classification::Enhance(strategy) => strategy,
        Classification::PassThrough => return Ok(FileOutcome::Unchanged),
    };

    let (enhanced, applied) = enhance(strategy, &contents);
    if enhanced == contents {
        return Ok(FileOutcome::Unchanged);
    }

    debug!(path = %path.display(), rules = ?applied, "snippet changed");
    if !dry_run {
        fs::write(path, &enhanced).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(FileOutcome::Changed)
}
