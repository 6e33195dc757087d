//! CSV parser for saved course data
//!
//! The file has the columns `year,name,level,grade,credits`. Rows are grouped
//! into academic years in the order each year label first appears.

use crate::core::models::{AcademicYear, CourseRecord};
use crate::debug;
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of the course data file
#[derive(Debug, Deserialize)]
struct CourseRow {
    year: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    level: String,
    #[serde(default)]
    grade: String,
    #[serde(default)]
    credits: String,
}

impl From<CourseRow> for CourseRecord {
    fn from(row: CourseRow) -> Self {
        Self {
            name: row.name,
            level: row.level,
            grade: row.grade,
            credits: row.credits,
        }
    }
}

/// Parse a course data CSV file into academic years
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// The years found in the file, in first-seen order, each with its records
///
/// # Errors
/// Returns an error if the file cannot be opened or a row cannot be read
pub fn parse_course_csv<P: AsRef<Path>>(path: P) -> Result<Vec<AcademicYear>, Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let years = read_course_records(file)?;
    debug!("Loaded {} academic years from {}", years.len(), path.display());
    Ok(years)
}

/// Read course rows from any reader and group them by year label (case-insensitive)
///
/// Rows with every course field blank are dropped. Field values are only
/// trimmed here; they are validated when courses are built.
///
/// # Errors
/// Returns an error if the CSV is malformed or lacks a `year` column
pub fn read_course_records<R: Read>(reader: R) -> Result<Vec<AcademicYear>, Box<dyn Error>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut years: Vec<AcademicYear> = Vec::new();

    for row in csv_reader.deserialize::<CourseRow>() {
        let row = row?;
        let label = row.year.clone();
        let record = CourseRecord::from(row);

        if record.is_empty() {
            continue;
        }

        match years.iter_mut().find(|y| y.label.eq_ignore_ascii_case(&label)) {
            Some(year) => year.add_record(record),
            None => {
                let mut year = AcademicYear::new(label);
                year.add_record(record);
                years.push(year);
            }
        }
    }

    Ok(years)
}

/// Find a year's index by label (case-insensitive)
#[must_use]
pub fn find_year(years: &[AcademicYear], label: &str) -> Option<usize> {
    years
        .iter()
        .position(|year| year.label.eq_ignore_ascii_case(label.trim()))
}
