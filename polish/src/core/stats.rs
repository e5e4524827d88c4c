//! Run-scoped counters describing one pipeline invocation.

use serde::Serialize;

/// Terminal state for a single visited file.
///
/// Per file the state machine is `Discovered -> Classified -> terminal`;
/// there is no retry transition, each file is visited exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Pass-through, or enhancement produced identical text.
    Unchanged,
    /// Enhancement produced new text (written back unless dry-run).
    Changed,
    /// Read or write failed; counted and logged, never fatal.
    Failed,
}

/// Aggregate counters for one run.
///
/// Created by the orchestration function and threaded through the per-file
/// loop, never a process-wide singleton, so the pipeline is callable
/// repeatedly and testable in isolation. Counters only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Files the walker admitted (extension filter applied).
    pub discovered: usize,
    /// Files visited by the per-file loop, whatever their outcome.
    pub processed: usize,
    /// Files whose enhanced text differed from the original.
    pub changed: usize,
    /// Files that failed to read or write.
    pub failed: usize,
}

impl RunStats {
    /// Record one terminal per-file outcome.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.processed += 1;
        match outcome {
            FileOutcome::Unchanged => {}
            FileOutcome::Changed => self.changed += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_updates_the_matching_counter() {
        let mut stats = RunStats::default();
        stats.record(FileOutcome::Unchanged);
        stats.record(FileOutcome::Changed);
        stats.record(FileOutcome::Failed);
        assert_eq!(
            stats,
            RunStats {
                discovered: 0,
                processed: 3,
                changed: 1,
                failed: 1,
            }
        );
    }

    #[test]
    fn changed_and_failed_never_exceed_processed() {
        let mut stats = RunStats::default();
        for _ in 0..5 {
            stats.record(FileOutcome::Changed);
        }
        stats.record(FileOutcome::Failed);
        assert!(stats.changed <= stats.processed);
        assert!(stats.failed <= stats.processed);
    }
}
