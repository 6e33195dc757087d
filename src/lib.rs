//! Weighted GPA engine for `gpacalc`
//! Grade scale lookup, per-course quality points, and period / cumulative aggregation

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
