//! Academic years

use crate::core::error::GpaError;
use crate::core::models::{Course, CourseRecord, GradeScale};

/// Raw course records for one academic year, as supplied by the input layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcademicYear {
    /// Year label (e.g., "Freshman"); only used for grouping and reporting
    pub label: String,
    /// Course records in entry order
    pub records: Vec<CourseRecord>,
}

impl AcademicYear {
    /// Create an empty year
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn add_record(&mut self, record: CourseRecord) {
        self.records.push(record);
    }

    /// Build the year's courses against a scale
    ///
    /// # Errors
    /// Fails on the first record that does not validate or that the scale cannot convert.
    pub fn build(&self, scale: &GradeScale) -> Result<YearRecord, GpaError> {
        YearRecord::from_records(self.label.clone(), &self.records, scale)
    }
}

/// The validated courses of one academic year
///
/// Always rebuilt from records as a whole; courses are never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearRecord {
    label: String,
    courses: Vec<Course>,
}

impl YearRecord {
    /// Create a year from already built courses
    #[must_use]
    pub fn new(label: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            label: label.into(),
            courses,
        }
    }

    /// Build every course from raw records, failing fast on the first bad one
    ///
    /// Blank records are ignored.
    ///
    /// # Errors
    /// Returns the first validation or scale error encountered.
    pub fn from_records(
        label: impl Into<String>,
        records: &[CourseRecord],
        scale: &GradeScale,
    ) -> Result<Self, GpaError> {
        let courses = records
            .iter()
            .filter(|record| !record.is_empty())
            .map(|record| Course::from_record(record, scale))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(label, courses))
    }

    /// Year label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Courses in entry order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Returns true if the year has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, level: &str, grade: &str, credits: &str) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            level: level.to_string(),
            grade: grade.to_string(),
            credits: credits.to_string(),
        }
    }

    #[test]
    fn test_build_year() {
        let mut year = AcademicYear::new("Freshman");
        year.add_record(record("Biology", "H", "91", "5"));
        year.add_record(record("Health", "CP1", "88", "2.5 (2nd-Semester)"));
        year.add_record(CourseRecord::default());

        let built = year.build(&GradeScale::default()).unwrap();
        assert_eq!(built.label(), "Freshman");
        assert_eq!(built.courses().len(), 2);
        assert_eq!(built.courses()[0].name(), "Biology");
    }

    #[test]
    fn test_build_fails_fast() {
        let mut year = AcademicYear::new("Sophomore");
        year.add_record(record("Biology", "H", "91", "5"));
        year.add_record(record("Latin", "XX", "91", "5"));

        assert_eq!(
            year.build(&GradeScale::default()),
            Err(GpaError::InvalidLevel("XX".to_string()))
        );
    }

    #[test]
    fn test_empty_year() {
        let built = AcademicYear::new("Senior")
            .build(&GradeScale::default())
            .unwrap();
        assert!(built.is_empty());
    }
}
