//! Reporting periods within an academic year

use crate::core::error::GpaError;
use std::fmt;

/// A completed quarter of the school year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    /// First quarter
    Q1,
    /// Second quarter (end of first semester)
    Q2,
    /// Third quarter
    Q3,
    /// Fourth quarter (end of year)
    Q4,
}

impl Quarter {
    /// Quarter number, 1 through 4
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }
}

impl TryFrom<u8> for Quarter {
    type Error = GpaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            other => Err(GpaError::InvalidTerm(format!(
                "quarter must be between 1 and 4, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

/// Which slice of a year to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// First semester; same weighting as year-to-date through Q2
    Semester1,
    /// Year-to-date through the given quarter
    YearToDate(Quarter),
    /// Whole year; same weighting as year-to-date through Q4
    FullYear,
}

impl Period {
    /// Last completed quarter covered by this period
    #[must_use]
    pub const fn quarter(self) -> Quarter {
        match self {
            Self::Semester1 => Quarter::Q2,
            Self::YearToDate(q) => q,
            Self::FullYear => Quarter::Q4,
        }
    }
}

impl From<Option<Quarter>> for Period {
    /// A missing quarter means the full year
    fn from(quarter: Option<Quarter>) -> Self {
        quarter.map_or(Self::FullYear, Self::YearToDate)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semester1 => write!(f, "Semester 1"),
            Self::YearToDate(q) => write!(f, "YTD through {q}"),
            Self::FullYear => write!(f, "Full Year"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_quarters() {
        assert_eq!(Period::Semester1.quarter(), Quarter::Q2);
        assert_eq!(Period::FullYear.quarter(), Quarter::Q4);
        assert_eq!(Period::YearToDate(Quarter::Q3).quarter(), Quarter::Q3);
    }

    #[test]
    fn test_quarter_try_from() {
        assert_eq!(Quarter::try_from(1).unwrap(), Quarter::Q1);
        assert_eq!(Quarter::try_from(4).unwrap(), Quarter::Q4);
        assert!(Quarter::try_from(0).is_err());
        assert!(Quarter::try_from(5).is_err());
    }

    #[test]
    fn test_missing_quarter_is_full_year() {
        assert_eq!(Period::from(None), Period::FullYear);
        assert_eq!(
            Period::from(Some(Quarter::Q1)),
            Period::YearToDate(Quarter::Q1)
        );
    }
}
