//! Idempotent batch enhancer for UI component snippet corpora.
//!
//! Walks a snippet tree, classifies each file into an enhancement strategy
//! (Angular, Vue, Svelte, or pass-through), applies an ordered set of guarded
//! text rewrite rules, and writes changed files back in place. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (classification, rewrite rules,
//!   counters). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (walking, per-file read/write).
//!   Isolated so failures stay scoped to a single file.
//!
//! Orchestration modules ([`run`], [`scan`]) coordinate core logic with I/O
//! to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
pub mod scan;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
