//! Course rigor levels

use crate::core::error::GpaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course level, most rigorous first
///
/// The rank is how many deduction steps are subtracted from the base GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Advanced Placement
    AP,
    /// Honors
    Honors,
    /// College Prep 1
    CP1,
    /// College Prep 2
    CP2,
}

impl Level {
    /// All levels in rank order
    pub const ALL: [Self; 4] = [Self::AP, Self::Honors, Self::CP1, Self::CP2];

    /// Number of deduction steps below the top level
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::AP => 0,
            Self::Honors => 1,
            Self::CP1 => 2,
            Self::CP2 => 3,
        }
    }

    /// Short code used in course data files
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AP => "AP",
            Self::Honors => "H",
            Self::CP1 => "CP1",
            Self::CP2 => "CP2",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Level {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AP" => Ok(Self::AP),
            "H" | "HONORS" => Ok(Self::Honors),
            "CP1" => Ok(Self::CP1),
            "CP2" => Ok(Self::CP2),
            _ => Err(GpaError::InvalidLevel(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_rigor() {
        let ranks: Vec<u8> = Level::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("AP".parse::<Level>().unwrap(), Level::AP);
        assert_eq!("h".parse::<Level>().unwrap(), Level::Honors);
        assert_eq!("Honors".parse::<Level>().unwrap(), Level::Honors);
        assert_eq!(" cp1 ".parse::<Level>().unwrap(), Level::CP1);
        assert_eq!("CP2".parse::<Level>().unwrap(), Level::CP2);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "CP3".parse::<Level>(),
            Err(GpaError::InvalidLevel("CP3".to_string()))
        );
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }
}
