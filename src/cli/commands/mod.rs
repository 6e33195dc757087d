//! CLI command handlers for `gpacalc`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod gpa;
pub mod scale;
