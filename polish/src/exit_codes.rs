//! Stable exit codes for polish CLI commands.

/// Run completed, including runs with per-file failures (those are reported
/// in the summary, not fatal).
pub const OK: i32 = 0;
/// Fatal configuration error (snippet root missing or not a directory) or
/// any other error raised outside the per-file loop.
pub const INVALID: i32 = 1;
