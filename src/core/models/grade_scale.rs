//! Grade to GPA conversion table

use crate::core::error::GpaError;
use crate::debug;
use serde::{Deserialize, Serialize};

/// GPA subtracted per level below the top level
pub const DEFAULT_DEDUCTION: f64 = 0.5;

/// Offset added before rounding so that x.5 grades always round up
const ROUNDING_EPSILON: f64 = 0.001;

/// Built-in scale for the top (AP) level as `(cutoff, gpa)` pairs
const DEFAULT_STEPS: [(f64, f64); 11] = [
    (64.0, 0.0),
    (69.0, 2.0),
    (72.0, 2.7),
    (76.0, 3.0),
    (79.0, 3.4),
    (82.0, 3.7),
    (86.0, 4.0),
    (89.0, 4.3),
    (92.0, 4.5),
    (97.0, 4.7),
    (100.0, 5.0),
];

/// One row of the scale: every rounded grade up to `cutoff` earns `gpa`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleStep {
    /// Highest rounded grade covered by this step
    #[serde(rename = "grade")]
    pub cutoff: f64,
    /// Base GPA for the top level
    pub gpa: f64,
}

impl ScaleStep {
    /// Create a new step
    #[must_use]
    pub const fn new(cutoff: f64, gpa: f64) -> Self {
        Self { cutoff, gpa }
    }
}

/// Ordered cutoff → GPA table plus the per-level deduction
///
/// Steps are kept sorted by ascending cutoff. The table is only ever
/// replaced as a whole through [`GradeScale::replace`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    steps: Vec<ScaleStep>,
    deduction: f64,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS
                .iter()
                .map(|&(cutoff, gpa)| ScaleStep::new(cutoff, gpa))
                .collect(),
            deduction: DEFAULT_DEDUCTION,
        }
    }
}

impl GradeScale {
    /// Build a scale from unsorted steps and a deduction step
    ///
    /// # Errors
    /// Returns `GpaError::InvalidScale` if the steps are empty, a cutoff lies
    /// outside `0..=100`, cutoffs repeat, a GPA is not finite, or the
    /// deduction is negative.
    pub fn new(steps: Vec<ScaleStep>, deduction: f64) -> Result<Self, GpaError> {
        if !deduction.is_finite() || deduction < 0.0 {
            return Err(GpaError::InvalidScale(format!(
                "deduction must be a non-negative number, got {deduction}"
            )));
        }
        let steps = validate_steps(steps)?;

        if let Some(top) = steps.last() {
            if top.cutoff < 100.0 {
                crate::warn!(
                    "Grade scale tops out at {}; grades above it cannot be converted",
                    top.cutoff
                );
            }
        }

        Ok(Self { steps, deduction })
    }

    /// Steps in ascending cutoff order
    #[must_use]
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    /// GPA subtracted per level rank
    #[must_use]
    pub const fn deduction(&self) -> f64 {
        self.deduction
    }

    /// Replace every step at once, keeping the current deduction
    ///
    /// The new table is validated and sorted before it is swapped in; on
    /// error the current table is left untouched.
    ///
    /// # Errors
    /// Same conditions as [`GradeScale::new`].
    pub fn replace(&mut self, steps: Vec<ScaleStep>) -> Result<(), GpaError> {
        let replacement = Self::new(steps, self.deduction)?;
        *self = replacement;
        debug!("Grade scale replaced with {} steps", self.steps.len());
        Ok(())
    }

    /// Apply the level deduction to a base GPA, flooring at zero
    #[must_use]
    pub fn deducted(&self, base_gpa: f64, rank: u8) -> f64 {
        f64::from(rank).mul_add(-self.deduction, base_gpa).max(0.0)
    }

    /// Convert a grade to a GPA for a level of the given rank
    ///
    /// The grade is rounded half-up, matched to the first cutoff it does not
    /// exceed, and reduced by `deduction * rank`, never going below zero.
    ///
    /// # Errors
    /// Returns `GpaError::OutOfRange` if no cutoff is at least the rounded grade.
    pub fn lookup(&self, grade: f64, rank: u8) -> Result<f64, GpaError> {
        let rounded = (grade + ROUNDING_EPSILON).round();

        let step = self
            .steps
            .iter()
            .find(|step| rounded <= step.cutoff)
            .ok_or_else(|| GpaError::OutOfRange {
                grade: rounded,
                highest: self.steps.last().map_or(0.0, |s| s.cutoff),
            })?;

        let gpa = self.deducted(step.gpa, rank);
        debug!("Grade {grade} (rank {rank}) -> cutoff {} -> gpa {gpa}", step.cutoff);
        Ok(gpa)
    }
}

fn validate_steps(mut steps: Vec<ScaleStep>) -> Result<Vec<ScaleStep>, GpaError> {
    if steps.is_empty() {
        return Err(GpaError::InvalidScale(
            "at least one grade increment is required".to_string(),
        ));
    }

    for step in &steps {
        if !step.cutoff.is_finite() || !(0.0..=100.0).contains(&step.cutoff) {
            return Err(GpaError::InvalidScale(format!(
                "grade cutoff {} must be between 0 and 100",
                step.cutoff
            )));
        }
        if !step.gpa.is_finite() {
            return Err(GpaError::InvalidScale(format!(
                "gpa for cutoff {} must be a number",
                step.cutoff
            )));
        }
    }

    steps.sort_by(|a, b| a.cutoff.total_cmp(&b.cutoff));

    if let Some(pair) = steps.windows(2).find(|w| w[0].cutoff == w[1].cutoff) {
        return Err(GpaError::InvalidScale(format!(
            "grade cutoff {} appears more than once",
            pair[0].cutoff
        )));
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_scale_brackets() {
        let scale = GradeScale::default();
        assert!(approx(scale.lookup(90.0, 0).unwrap(), 4.5));
        assert!(approx(scale.lookup(92.0, 0).unwrap(), 4.5));
        assert!(approx(scale.lookup(93.0, 0).unwrap(), 4.7));
        assert!(approx(scale.lookup(100.0, 0).unwrap(), 5.0));
        assert!(approx(scale.lookup(0.0, 0).unwrap(), 0.0));
        assert!(approx(scale.lookup(65.0, 0).unwrap(), 2.0));
    }

    #[test]
    fn test_half_grades_round_up() {
        let scale = GradeScale::default();
        // 92.5 rounds to 93, which is past the 92 cutoff
        assert!(approx(scale.lookup(92.5, 0).unwrap(), 4.7));
        // 92.4 rounds to 92
        assert!(approx(scale.lookup(92.4, 0).unwrap(), 4.5));
        assert!(approx(scale.lookup(88.5, 0).unwrap(), 4.3));
    }

    #[test]
    fn test_deduction_per_rank() {
        let scale = GradeScale::default();
        assert!(approx(scale.lookup(90.0, 2).unwrap(), 3.5));
        assert!(approx(scale.lookup(85.0, 1).unwrap(), 3.5));
        assert!(approx(scale.lookup(90.0, 3).unwrap(), 3.0));
    }

    #[test]
    fn test_deduction_floors_at_zero() {
        let scale = GradeScale::default();
        assert!(approx(scale.lookup(50.0, 3).unwrap(), 0.0));
        assert!(approx(scale.lookup(66.0, 3).unwrap(), 0.5));
    }

    #[test]
    fn test_lookup_fails_closed_above_top_cutoff() {
        let scale = GradeScale::new(
            vec![ScaleStep::new(64.0, 0.0), ScaleStep::new(90.0, 4.0)],
            DEFAULT_DEDUCTION,
        )
        .unwrap();

        assert_eq!(
            scale.lookup(95.0, 0),
            Err(GpaError::OutOfRange {
                grade: 95.0,
                highest: 90.0
            })
        );
    }

    #[test]
    fn test_new_sorts_steps() {
        let scale = GradeScale::new(
            vec![
                ScaleStep::new(100.0, 5.0),
                ScaleStep::new(64.0, 0.0),
                ScaleStep::new(80.0, 3.0),
            ],
            DEFAULT_DEDUCTION,
        )
        .unwrap();

        let cutoffs: Vec<f64> = scale.steps().iter().map(|s| s.cutoff).collect();
        assert_eq!(cutoffs, vec![64.0, 80.0, 100.0]);
    }

    #[test]
    fn test_replace_rejects_bad_tables() {
        let mut scale = GradeScale::default();
        let before = scale.clone();

        assert!(scale.replace(Vec::new()).is_err());
        assert!(scale.replace(vec![ScaleStep::new(101.0, 5.0)]).is_err());
        assert!(scale.replace(vec![ScaleStep::new(-1.0, 0.0)]).is_err());
        assert!(scale
            .replace(vec![ScaleStep::new(90.0, 4.0), ScaleStep::new(90.0, 4.5)])
            .is_err());
        assert!(scale.replace(vec![ScaleStep::new(90.0, f64::NAN)]).is_err());

        // Failed replacements leave the table as it was
        assert_eq!(scale, before);
    }

    #[test]
    fn test_replace_with_own_contents_is_identity() {
        let mut scale = GradeScale::default();
        let original = scale.clone();
        let steps = scale.steps().to_vec();

        scale.replace(steps).unwrap();
        assert_eq!(scale, original);

        for grade in 0..=100 {
            for rank in 0..4 {
                let g = f64::from(grade);
                assert!(approx(
                    scale.lookup(g, rank).unwrap(),
                    original.lookup(g, rank).unwrap()
                ));
            }
        }
    }

    #[test]
    fn test_negative_deduction_rejected() {
        assert!(GradeScale::new(vec![ScaleStep::new(100.0, 4.0)], -0.5).is_err());
    }
}
