//! Error types for the GPA engine

use thiserror::Error;

/// Errors raised while building courses, looking up grades, or replacing the scale.
///
/// The first four variants describe bad caller input and are grouped by
/// [`GpaError::is_validation`]. `OutOfRange` and `InvalidScale` point at the
/// grade scale configuration instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GpaError {
    /// Grade is not a number in `0..=100`
    #[error("invalid grade '{0}': enter an integer or decimal between 0 and 100")]
    InvalidGrade(String),

    /// Level is not one of AP, H, CP1, CP2
    #[error("invalid level '{0}': select one of AP, H, CP1, CP2")]
    InvalidLevel(String),

    /// Credits are not 2.5 or 5
    #[error("invalid credits '{0}': select 2.5 (1st-Semester), 2.5 (2nd-Semester) or 5")]
    InvalidCredits(String),

    /// Term marker is malformed or does not fit the credit value
    #[error("invalid term: {0}")]
    InvalidTerm(String),

    /// No cutoff in the active scale covers the rounded grade
    #[error("grade {grade} is above the highest scale cutoff ({highest}); the grade scale is misconfigured")]
    OutOfRange {
        /// Grade after rounding
        grade: f64,
        /// Highest cutoff in the active scale
        highest: f64,
    },

    /// A replacement scale was rejected
    #[error("invalid grade scale: {0}")]
    InvalidScale(String),

    /// Requested year index is past the supplied years
    #[error("no academic year at index {index} ({len} years supplied)")]
    UnknownYear {
        /// Requested index
        index: usize,
        /// Number of years supplied
        len: usize,
    },
}

impl GpaError {
    /// Returns true for errors caused by a bad course record rather than configuration.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidGrade(_)
                | Self::InvalidLevel(_)
                | Self::InvalidCredits(_)
                | Self::InvalidTerm(_)
        )
    }
}
