//! Course model

use crate::core::error::GpaError;
use crate::core::models::{GradeScale, Level};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credits for a half-year course
pub const HALF_CREDITS: f64 = 2.5;

/// Credits for a full-year course
pub const FULL_CREDITS: f64 = 5.0;

/// Semester in which a half-year course is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// First semester (quarters 1 and 2)
    First,
    /// Second semester (quarters 3 and 4)
    Second,
}

impl Term {
    /// Semester number (1 or 2)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl TryFrom<u8> for Term {
    type Error = GpaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(GpaError::InvalidTerm(format!(
                "semester must be 1 or 2, got {other}"
            ))),
        }
    }
}

/// How much of the year a course runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// 5 credits over all four quarters
    FullYear,
    /// 2.5 credits over one semester
    Semester(Term),
}

impl Schedule {
    /// Build a schedule from a numeric credit value and optional term
    ///
    /// # Errors
    /// - `InvalidCredits` when credits are neither 2.5 nor 5
    /// - `InvalidTerm` when a full-year course carries a term or a half-year course lacks one
    pub fn from_parts(credits: f64, term: Option<u8>) -> Result<Self, GpaError> {
        #[allow(clippy::float_cmp)]
        let is_full = credits == FULL_CREDITS;
        #[allow(clippy::float_cmp)]
        let is_half = credits == HALF_CREDITS;

        match (is_full, is_half, term) {
            (true, _, None) => Ok(Self::FullYear),
            (true, _, Some(t)) => Err(GpaError::InvalidTerm(format!(
                "full-year (5 credit) courses cannot be assigned to semester {t}"
            ))),
            (_, true, Some(t)) => Ok(Self::Semester(Term::try_from(t)?)),
            (_, true, None) => Err(GpaError::InvalidTerm(
                "2.5 credit courses must specify the 1st or 2nd semester".to_string(),
            )),
            _ => Err(GpaError::InvalidCredits(credits.to_string())),
        }
    }

    /// Credits earned when the course is complete
    #[must_use]
    pub const fn credits(self) -> f64 {
        match self {
            Self::FullYear => FULL_CREDITS,
            Self::Semester(_) => HALF_CREDITS,
        }
    }

    /// Term marker, absent for full-year courses
    #[must_use]
    pub const fn term(self) -> Option<Term> {
        match self {
            Self::FullYear => None,
            Self::Semester(term) => Some(term),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullYear => write!(f, "5"),
            Self::Semester(Term::First) => write!(f, "2.5 (1st-Semester)"),
            Self::Semester(Term::Second) => write!(f, "2.5 (2nd-Semester)"),
        }
    }
}

impl FromStr for Schedule {
    type Err = GpaError;

    /// Parse the stored credits column, e.g. `5`, `2.5 (1st-Semester)`, `2.5 (2nd-Semester)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);

        let credits = parts
            .next()
            .unwrap_or_default()
            .parse::<f64>()
            .map_err(|_| GpaError::InvalidCredits(trimmed.to_string()))?;

        let term = match parts.next().map(str::trim) {
            None | Some("") => None,
            Some(marker) => Some(parse_term_marker(marker)?),
        };

        Self::from_parts(credits, term)
    }
}

/// Semester number for a `(1st-Semester)` / `(2nd-Semester)` marker or a bare `1` / `2`
fn parse_term_marker(marker: &str) -> Result<u8, GpaError> {
    match marker.to_ascii_lowercase().as_str() {
        "(1st-semester)" | "1" => Ok(1),
        "(2nd-semester)" | "2" => Ok(2),
        _ => Err(GpaError::InvalidTerm(format!(
            "unrecognized semester marker '{marker}'"
        ))),
    }
}

/// Raw course fields as entered by the user or read from a data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course name
    pub name: String,
    /// Level code (AP, H, CP1, CP2)
    pub level: String,
    /// Numeric grade as text
    pub grade: String,
    /// Credits column, optionally with a semester marker
    pub credits: String,
}

impl CourseRecord {
    /// Returns true when every field is blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.level, &self.grade, &self.credits]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// A graded course with its GPA resolved against a grade scale
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    grade: f64,
    level: Level,
    schedule: Schedule,
    gpa: f64,
}

impl Course {
    /// Create a course from numeric inputs
    ///
    /// # Arguments
    /// * `name` - Course name (not used in computation)
    /// * `grade` - Average grade, `0..=100`
    /// * `level` - Course level
    /// * `credits` - 2.5 or 5
    /// * `term` - Semester (1 or 2) for 2.5 credit courses
    /// * `scale` - Active grade scale
    ///
    /// # Errors
    /// Returns a validation error for a bad grade, credit value or term, and
    /// `GpaError::OutOfRange` if the scale does not cover the grade.
    pub fn create(
        name: impl Into<String>,
        grade: f64,
        level: Level,
        credits: f64,
        term: Option<u8>,
        scale: &GradeScale,
    ) -> Result<Self, GpaError> {
        let schedule = Schedule::from_parts(credits, term)?;
        Self::new(name, grade, level, schedule, scale)
    }

    /// Create a course from an already typed schedule
    ///
    /// # Errors
    /// Returns `GpaError::InvalidGrade` for grades outside `0..=100` and
    /// `GpaError::OutOfRange` if the scale does not cover the grade.
    pub fn new(
        name: impl Into<String>,
        grade: f64,
        level: Level,
        schedule: Schedule,
        scale: &GradeScale,
    ) -> Result<Self, GpaError> {
        if !grade.is_finite() || !(0.0..=100.0).contains(&grade) {
            return Err(GpaError::InvalidGrade(grade.to_string()));
        }

        let gpa = scale.lookup(grade, level.rank())?;

        Ok(Self {
            name: name.into(),
            grade,
            level,
            schedule,
            gpa,
        })
    }

    /// Parse and validate a raw record
    ///
    /// Fields are checked in the order grade, level, credits so the first
    /// reported problem matches the order users fix them in.
    ///
    /// # Errors
    /// Returns the validation error for the first bad field, or
    /// `GpaError::OutOfRange` from the scale lookup.
    pub fn from_record(record: &CourseRecord, scale: &GradeScale) -> Result<Self, GpaError> {
        let grade_text = record.grade.trim();
        let grade = grade_text
            .parse::<f64>()
            .map_err(|_| GpaError::InvalidGrade(grade_text.to_string()))?;
        let level = record.level.parse::<Level>()?;
        let schedule = record.credits.parse::<Schedule>()?;

        Self::new(record.name.trim(), grade, level, schedule, scale)
    }

    /// Course name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grade as entered
    #[must_use]
    pub const fn grade(&self) -> f64 {
        self.grade
    }

    /// Course level
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Full-year or semester schedule
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Credits earned when complete
    #[must_use]
    pub const fn credits(&self) -> f64 {
        self.schedule.credits()
    }

    /// Semester marker, absent for full-year courses
    #[must_use]
    pub const fn term(&self) -> Option<Term> {
        self.schedule.term()
    }

    /// GPA after level deduction
    #[must_use]
    pub const fn gpa(&self) -> f64 {
        self.gpa
    }

    /// GPA times credits for the complete course
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.gpa * self.credits()
    }
}
