//! Orchestration for `polish run`.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::stats::{FileOutcome, RunStats};
use crate::io::enhance::enhance_file;
use crate::io::walk::walk_snippets;

/// Options for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Classify and transform but never write anything back.
    pub dry_run: bool,
}

/// Walk `root` and enhance every classified snippet, file by file.
///
/// Single-threaded and synchronous; the only state shared across files is
/// the returned [`RunStats`]. Per-file read/write failures are counted and
/// logged with their path; only the upfront root check aborts the run.
pub fn run_pipeline(root: &Path, options: &RunOptions) -> Result<RunStats> {
    let files = walk_snippets(root)?;
    let mut stats = RunStats {
        discovered: files.len(),
        ..RunStats::default()
    };

    for path in &files {
        match enhance_file(path, options.dry_run) {
            Ok(outcome) => stats.record(outcome),
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "snippet enhancement failed");
                stats.record(FileOutcome::Failed);
            }
        }
        if stats.processed % 100 == 0 {
            debug!(
                processed = stats.processed,
                discovered = stats.discovered,
                "progress"
            );
        }
    }

    Ok(stats)
}

/// Render the deterministic end-of-run summary with all four counts.
pub fn render_summary(stats: &RunStats) -> String {
    let bar = "=".repeat(60);
    format!(
        "{bar}\n\
         Snippet enhancement complete\n\
         {bar}\n\
         Files discovered:   {}\n\
         Files processed:    {}\n\
         Files changed:      {}\n\
         Files failed:       {}\n\
         {bar}",
        stats.discovered, stats.processed, stats.changed, stats.failed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SnippetTree, fixtures};

    #[test]
    fn run_counts_every_discovered_file_as_processed() {
        let tree = SnippetTree::new().expect("tree");
        tree.write("card.component.ts", fixtures::ANGULAR_CARD)
            .expect("write");
        tree.write("Card.tsx", fixtures::REACT_CARD).expect("write");
        tree.write("Toggle.svelte", fixtures::SVELTE_TOGGLE)
            .expect("write");

        let stats = run_pipeline(tree.root(), &RunOptions::default()).expect("run");
        assert_eq!(stats.discovered, 3);
        assert_eq!(stats.processed, 3);
        assert_eq!(stats.changed, 2);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn second_run_over_the_same_tree_changes_nothing() {
        let tree = SnippetTree::new().expect("tree");
        tree.write("card.component.ts", fixtures::ANGULAR_CARD)
            .expect("write");
        tree.write("BaseButton.vue", fixtures::VUE_BUTTON)
            .expect("write");
        tree.write("Toggle.svelte", fixtures::SVELTE_TOGGLE)
            .expect("write");

        let first = run_pipeline(tree.root(), &RunOptions::default()).expect("first run");
        assert_eq!(first.changed, 3);

        let after_first = tree.read("BaseButton.vue").expect("read");
        let second = run_pipeline(tree.root(), &RunOptions::default()).expect("second run");
        assert_eq!(second.changed, 0);
        assert_eq!(tree.read("BaseButton.vue").expect("read"), after_first);
    }

    #[test]
    fn one_bad_file_does_not_stop_the_run() {
        let tree = SnippetTree::new().expect("tree");
        tree.write("a.component.ts", fixtures::ANGULAR_CARD)
            .expect("write");
        let bad = tree
            .write("broken.vue", b"<template>\xff\xfe</template>".as_slice())
            .expect("write");
        tree.write("z.component.ts", fixtures::ANGULAR_CARD)
            .expect("write");

        let stats = run_pipeline(tree.root(), &RunOptions::default()).expect("run");
        assert_eq!(stats.discovered, 3);
        assert_eq!(stats.processed, 3);
        assert_eq!(stats.changed, 2);
        assert_eq!(stats.failed, 1);

        // The bad file's bytes are untouched on disk.
        let bytes = std::fs::read(&bad).expect("read bytes");
        assert_eq!(bytes, b"<template>\xff\xfe</template>");
    }

    #[test]
    fn dry_run_leaves_the_tree_untouched() {
        let tree = SnippetTree::new().expect("tree");
        tree.write("card.component.ts", fixtures::ANGULAR_CARD)
            .expect("write");

        let stats = run_pipeline(tree.root(), &RunOptions { dry_run: true }).expect("run");
        assert_eq!(stats.changed, 1);
        assert_eq!(
            tree.read("card.component.ts").expect("read"),
            fixtures::ANGULAR_CARD
        );
    }

    #[test]
    fn summary_contains_all_four_counts() {
        let stats = RunStats {
            discovered: 4,
            processed: 4,
            changed: 2,
            failed: 1,
        };
        let summary = render_summary(&stats);
        assert!(summary.contains("Files discovered:   4"));
        assert!(summary.contains("Files processed:    4"));
        assert!(summary.contains("Files changed:      2"));
        assert!(summary.contains("Files failed:       1"));
    }
}
