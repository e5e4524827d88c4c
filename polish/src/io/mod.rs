//! I/O helpers for pipeline commands.

pub mod enhance;
pub mod walk;
