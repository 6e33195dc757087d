//! Core module: the GPA engine and its configuration

pub mod aggregate;
pub mod config;
pub mod cumulative;
pub mod error;
pub mod models;
pub mod period;
pub mod records;

pub use aggregate::{aggregate, compute_year_gpa, Gpa, Totals};
pub use cumulative::{compute_cumulative_gpa, cumulative, CumulativeReport, SkippedYear};
pub use error::GpaError;
pub use period::{Period, Quarter};

/// Returns the current version of the `gpa_calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
