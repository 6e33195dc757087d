//! Weighted GPA aggregation for a single academic year
//!
//! Full-year courses accrue credit linearly, 1.25 credits per completed
//! quarter. Semester courses accrue half their credits per quarter, but only
//! during the semester they are offered.

use crate::core::models::{Course, Schedule, Term, YearRecord};
use crate::core::period::{Period, Quarter};
use crate::debug;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Credits a full-year course earns per completed quarter
const CREDITS_PER_QUARTER: f64 = 1.25;

/// Running quality-point and credit totals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Sum of gpa × weighted credits
    pub quality_points: f64,
    /// Sum of weighted credits
    pub credits: f64,
}

impl Totals {
    /// Create totals from raw values
    #[must_use]
    pub const fn new(quality_points: f64, credits: f64) -> Self {
        Self {
            quality_points,
            credits,
        }
    }

    /// Add one course at the given credit weight
    pub fn add_weighted(&mut self, gpa: f64, weighted_credits: f64) {
        self.quality_points += gpa * weighted_credits;
        self.credits += weighted_credits;
    }

    /// Weighted average, or `None` when no credits have accrued
    #[must_use]
    pub fn gpa(&self) -> Option<Gpa> {
        if self.credits > 0.0 {
            Some(Gpa(self.quality_points / self.credits))
        } else {
            None
        }
    }
}

impl Add for Totals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.quality_points + rhs.quality_points,
            self.credits + rhs.credits,
        )
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A computed GPA; displays with exactly two decimals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Gpa(pub f64);

impl Gpa {
    /// Unrounded value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Fraction of a semester course's credits earned by the end of `quarter`
#[must_use]
pub const fn term_factor(term: Term, quarter: Quarter) -> f64 {
    match (term, quarter) {
        (Term::First, Quarter::Q1) | (Term::Second, Quarter::Q3) => 0.5,
        (Term::First, _) | (Term::Second, Quarter::Q4) => 1.0,
        (Term::Second, _) => 0.0,
    }
}

/// Credits a course has earned by the end of `quarter`
#[must_use]
pub fn weighted_credits(course: &Course, quarter: Quarter) -> f64 {
    match course.schedule() {
        Schedule::FullYear => CREDITS_PER_QUARTER * f64::from(quarter.number()),
        Schedule::Semester(term) => term_factor(term, quarter) * course.credits(),
    }
}

/// Aggregate one year's courses over a period
///
/// Returns the unrounded totals for composing with other years, or `None`
/// when nothing in the period carries credit (including an empty year).
#[must_use]
pub fn aggregate(year: &YearRecord, period: Period) -> Option<Totals> {
    let quarter = period.quarter();
    let mut totals = Totals::default();

    for course in year.courses() {
        let weight = weighted_credits(course, quarter);
        if weight > 0.0 {
            totals.add_weighted(course.gpa(), weight);
        }
    }

    debug!(
        "Aggregated {} courses in '{}' for {period}: {} QP / {} credits",
        year.courses().len(),
        year.label(),
        totals.quality_points,
        totals.credits
    );

    (totals.credits > 0.0).then_some(totals)
}

/// Totals for a finished year: every course at full credit
#[must_use]
pub fn complete_totals(year: &YearRecord) -> Totals {
    let mut totals = Totals::default();
    for course in year.courses() {
        totals.add_weighted(course.gpa(), course.credits());
    }
    totals
}

/// GPA of one year over a period, or `None` if nothing is computable
#[must_use]
pub fn compute_year_gpa(year: &YearRecord, period: Period) -> Option<Gpa> {
    aggregate(year, period).and_then(|totals| totals.gpa())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{GradeScale, Level};

    fn course(grade: f64, level: Level, credits: f64, term: Option<u8>) -> Course {
        Course::create("Course", grade, level, credits, term, &GradeScale::default()).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_term_factor_table() {
        use Quarter::{Q1, Q2, Q3, Q4};
        let first: Vec<f64> = [Q1, Q2, Q3, Q4]
            .iter()
            .map(|&q| term_factor(Term::First, q))
            .collect();
        let second: Vec<f64> = [Q1, Q2, Q3, Q4]
            .iter()
            .map(|&q| term_factor(Term::Second, q))
            .collect();

        assert_eq!(first, vec![0.5, 1.0, 1.0, 1.0]);
        assert_eq!(second, vec![0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_full_year_accrues_per_quarter() {
        let c = course(90.0, Level::AP, 5.0, None);
        assert!(approx(weighted_credits(&c, Quarter::Q1), 1.25));
        assert!(approx(weighted_credits(&c, Quarter::Q3), 3.75));
        assert!(approx(weighted_credits(&c, Quarter::Q4), 5.0));
    }

    #[test]
    fn test_mixed_year_at_q2() {
        let year = YearRecord::new(
            "Junior",
            vec![
                course(90.0, Level::AP, 5.0, None),
                course(85.0, Level::Honors, 2.5, Some(1)),
            ],
        );

        let totals = aggregate(&year, Period::YearToDate(Quarter::Q2)).unwrap();
        assert!(approx(totals.quality_points, 20.0));
        assert!(approx(totals.credits, 5.0));
        assert_eq!(totals.gpa().unwrap().to_string(), "4.00");
    }

    #[test]
    fn test_semester_one_matches_q2() {
        let year = YearRecord::new(
            "Junior",
            vec![
                course(78.0, Level::CP1, 5.0, None),
                course(95.0, Level::AP, 2.5, Some(1)),
                course(88.0, Level::Honors, 2.5, Some(2)),
            ],
        );

        assert_eq!(
            aggregate(&year, Period::Semester1),
            aggregate(&year, Period::YearToDate(Quarter::Q2))
        );
    }

    #[test]
    fn test_full_year_matches_q4() {
        let year = YearRecord::new(
            "Senior",
            vec![
                course(93.0, Level::AP, 5.0, None),
                course(81.0, Level::CP2, 5.0, None),
            ],
        );

        assert_eq!(
            aggregate(&year, Period::FullYear),
            aggregate(&year, Period::YearToDate(Quarter::Q4))
        );
        // A finished year weighs each course by its full credits
        assert_eq!(
            aggregate(&year, Period::FullYear),
            Some(complete_totals(&year))
        );
    }

    #[test]
    fn test_term_one_q1_is_half_of_q2() {
        let year = YearRecord::new("Freshman", vec![course(88.0, Level::AP, 2.5, Some(1))]);

        let q1 = aggregate(&year, Period::YearToDate(Quarter::Q1)).unwrap();
        let q2 = aggregate(&year, Period::YearToDate(Quarter::Q2)).unwrap();

        assert!(approx(q1.quality_points * 2.0, q2.quality_points));
        assert!(approx(q1.credits * 2.0, q2.credits));
    }

    #[test]
    fn test_empty_year_is_not_computable() {
        let year = YearRecord::new("Freshman", Vec::new());
        assert_eq!(aggregate(&year, Period::FullYear), None);
        assert_eq!(compute_year_gpa(&year, Period::FullYear), None);
    }

    #[test]
    fn test_second_term_only_before_q3_is_not_computable() {
        let year = YearRecord::new("Freshman", vec![course(90.0, Level::AP, 2.5, Some(2))]);
        assert_eq!(aggregate(&year, Period::YearToDate(Quarter::Q2)), None);
        assert!(aggregate(&year, Period::YearToDate(Quarter::Q3)).is_some());
    }

    #[test]
    fn test_zero_gpa_is_still_computable() {
        let year = YearRecord::new("Freshman", vec![course(40.0, Level::AP, 5.0, None)]);
        assert_eq!(
            compute_year_gpa(&year, Period::FullYear).map(|g| g.to_string()),
            Some("0.00".to_string())
        );
    }

    #[test]
    fn test_gpa_display() {
        assert_eq!(Gpa(3.6).to_string(), "3.60");
        assert_eq!(Gpa(4.0).to_string(), "4.00");
        assert_eq!(Gpa(3.456).to_string(), "3.46");
    }
}
