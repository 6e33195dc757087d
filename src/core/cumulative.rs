//! Cumulative GPA across academic years

use crate::core::aggregate::{aggregate, complete_totals, Gpa, Totals};
use crate::core::error::GpaError;
use crate::core::models::{AcademicYear, GradeScale, YearRecord};
use crate::core::period::{Period, Quarter};
use crate::debug;

/// A year left out of the cumulative total because its records did not validate
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedYear {
    /// Label of the skipped year
    pub label: String,
    /// Why the year's courses could not be built
    pub error: GpaError,
}

/// Result of a cumulative computation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeReport {
    /// Summed totals, `None` when nothing is computable
    pub totals: Option<Totals>,
    /// Years dropped from the total, in input order
    pub skipped: Vec<SkippedYear>,
}

impl CumulativeReport {
    /// Cumulative GPA, `None` when nothing is computable
    #[must_use]
    pub fn gpa(&self) -> Option<Gpa> {
        self.totals.and_then(|totals| totals.gpa())
    }
}

/// Combine finished years with the current year's partial totals
///
/// Years before `current` count at full credit. The current year is
/// aggregated through `quarter`, or over the full year when no quarter is
/// given. Returns `None` if the current year has nothing computable or no
/// credits accrue overall.
#[must_use]
pub fn cumulative(
    completed: &[YearRecord],
    current: &YearRecord,
    quarter: Option<Quarter>,
) -> Option<Totals> {
    let mut totals = aggregate(current, Period::from(quarter))?;

    for year in completed {
        totals += complete_totals(year);
    }

    (totals.credits > 0.0).then_some(totals)
}

/// Build each year's courses and compute the cumulative GPA through `through`
///
/// Years whose records fail validation are skipped and listed in the report.
/// If the year at `through` is itself skipped, the remaining earlier years
/// are treated as complete. Years after `through` are ignored.
///
/// # Errors
/// - `GpaError::UnknownYear` if `through` is past the end of `years`
/// - `GpaError::OutOfRange` if the scale cannot convert a grade in any year
pub fn compute_cumulative_gpa(
    years: &[AcademicYear],
    through: usize,
    quarter: Option<Quarter>,
    scale: &GradeScale,
) -> Result<CumulativeReport, GpaError> {
    if through >= years.len() {
        return Err(GpaError::UnknownYear {
            index: through,
            len: years.len(),
        });
    }

    let mut report = CumulativeReport::default();
    let mut completed = Vec::new();
    let mut current = None;

    for (index, year) in years.iter().enumerate().take(through + 1) {
        match year.build(scale) {
            Ok(built) if index == through => current = Some(built),
            Ok(built) => completed.push(built),
            Err(err) if err.is_validation() => {
                debug!("Skipping '{}' in cumulative GPA: {err}", year.label);
                report.skipped.push(SkippedYear {
                    label: year.label.clone(),
                    error: err,
                });
            }
            Err(err) => {
                debug!("Grade scale cannot convert a grade in '{}': {err}", year.label);
                return Err(err);
            }
        }
    }

    report.totals = match current {
        Some(current) => cumulative(&completed, &current, quarter),
        None => {
            let totals = completed
                .iter()
                .map(complete_totals)
                .fold(Totals::default(), |acc, t| acc + t);
            (totals.credits > 0.0).then_some(totals)
        }
    };

    debug!(
        "Cumulative through index {through}: {:?} ({} skipped)",
        report.totals,
        report.skipped.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, CourseRecord, Level, ScaleStep};

    /// Every AP grade converts to 3.6
    fn flat_scale() -> GradeScale {
        GradeScale::new(vec![ScaleStep::new(100.0, 3.6)], 0.5).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn record(level: &str, grade: &str, credits: &str) -> CourseRecord {
        CourseRecord {
            name: "Course".to_string(),
            level: level.to_string(),
            grade: grade.to_string(),
            credits: credits.to_string(),
        }
    }

    fn year(label: &str, records: Vec<CourseRecord>) -> AcademicYear {
        AcademicYear {
            label: label.to_string(),
            records,
        }
    }

    #[test]
    fn test_cumulative_combines_years() {
        let scale = flat_scale();
        // 5 credits at 3.6 => 18.0 QP
        let finished = YearRecord::new(
            "Freshman",
            vec![Course::create("Bio", 83.0, Level::AP, 5.0, None, &scale).unwrap()],
        );
        // Full-year 3.6 at Q2 => 2.5 credits, 9.0 QP
        let current = YearRecord::new(
            "Sophomore",
            vec![Course::create("Chem", 83.0, Level::AP, 5.0, None, &scale).unwrap()],
        );

        let totals = cumulative(&[finished], &current, Some(Quarter::Q2)).unwrap();
        assert!(approx(totals.quality_points, 27.0));
        assert!(approx(totals.credits, 7.5));
        assert_eq!(totals.gpa().unwrap().to_string(), "3.60");
    }

    #[test]
    fn test_empty_current_year_is_not_computable() {
        let scale = GradeScale::default();
        let finished = YearRecord::new(
            "Freshman",
            vec![Course::create("Bio", 90.0, Level::AP, 5.0, None, &scale).unwrap()],
        );
        let current = YearRecord::new("Sophomore", Vec::new());

        assert_eq!(cumulative(&[finished], &current, None), None);
    }

    #[test]
    fn test_unknown_year_index() {
        let years = vec![year("Freshman", Vec::new())];
        assert_eq!(
            compute_cumulative_gpa(&years, 3, None, &GradeScale::default()),
            Err(GpaError::UnknownYear { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_invalid_year_is_skipped_and_reported() {
        let years = vec![
            year("Freshman", vec![record("AP", "83", "5")]),
            year("Sophomore", vec![record("AP", "not a grade", "5")]),
            year("Junior", vec![record("AP", "83", "5")]),
        ];

        let report = compute_cumulative_gpa(&years, 2, None, &flat_scale()).unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].label, "Sophomore");
        assert!(matches!(report.skipped[0].error, GpaError::InvalidGrade(_)));
        assert_eq!(report.gpa().unwrap().to_string(), "3.60");
    }

    #[test]
    fn test_years_after_through_are_ignored() {
        let years = vec![
            year("Freshman", vec![record("AP", "95", "5")]),
            year("Sophomore", vec![record("CP2", "60", "5")]),
        ];

        let report = compute_cumulative_gpa(&years, 0, None, &GradeScale::default()).unwrap();
        assert_eq!(report.gpa().unwrap().to_string(), "4.70");
    }

    #[test]
    fn test_out_of_range_propagates() {
        let scale = GradeScale::new(
            vec![ScaleStep::new(64.0, 0.0), ScaleStep::new(90.0, 4.0)],
            0.5,
        )
        .unwrap();
        let years = vec![year("Freshman", vec![record("AP", "99", "5")])];

        assert!(matches!(
            compute_cumulative_gpa(&years, 0, None, &scale),
            Err(GpaError::OutOfRange { .. })
        ));
    }
}
