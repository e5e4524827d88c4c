//! Deterministic, pure logic shared by the pipeline.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests.

pub mod angular;
pub mod catalog;
pub mod classify;
pub mod rule;
pub mod stats;
pub mod svelte;
pub mod vue;
