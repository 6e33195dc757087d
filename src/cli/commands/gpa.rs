//! Year and cumulative GPA command handlers

use gpa_calc::config::Config;
use gpa_calc::core::models::{AcademicYear, GradeScale};
use gpa_calc::core::records::{find_year, parse_course_csv};
use gpa_calc::core::{compute_cumulative_gpa, compute_year_gpa, GpaError, Period, Quarter};
use gpa_calc::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Shown instead of a number when nothing in the period carries credit
const NOT_COMPUTABLE: &str =
    "No GPA can be computed: no courses carry credit for the requested period.";

/// Compute and print one year's GPA for a period
///
/// # Errors
/// Returns a printable message if the data file cannot be read, the year is
/// missing, or a course fails validation.
pub fn run_year(
    input_file: Option<&Path>,
    label: &str,
    period: Period,
    config: &Config,
) -> Result<(), String> {
    let (years, scale) = load(input_file, config)?;
    let index = locate(&years, label)?;
    let year = &years[index];

    let built = year.build(&scale).map_err(|e| describe(&year.label, &e))?;
    verbose!("Loaded {} courses for {}", built.courses().len(), built.label());

    match compute_year_gpa(&built, period) {
        Some(gpa) => println!("{} GPA ({period}): {gpa}", built.label()),
        None => println!("{} GPA ({period}): {NOT_COMPUTABLE}", built.label()),
    }
    Ok(())
}

/// Compute and print the cumulative GPA through a year
///
/// # Errors
/// Returns a printable message if the data file cannot be read, the year is
/// missing, or the grade scale cannot convert a grade.
pub fn run_cumulative(
    input_file: Option<&Path>,
    through: &str,
    quarter: Option<u8>,
    config: &Config,
) -> Result<(), String> {
    let quarter = quarter
        .map(Quarter::try_from)
        .transpose()
        .map_err(|e| format!("✗ {e}"))?;

    let (years, scale) = load(input_file, config)?;
    let index = locate(&years, through)?;

    let report = compute_cumulative_gpa(&years, index, quarter, &scale)
        .map_err(|e| describe(through, &e))?;

    for skipped in &report.skipped {
        eprintln!("⚠ Skipped {}: {}", skipped.label, skipped.error);
    }

    let period = Period::from(quarter);
    match report.gpa() {
        Some(gpa) => println!("Cumulative GPA through {through} ({period}): {gpa}"),
        None => println!("Cumulative GPA through {through} ({period}): {NOT_COMPUTABLE}"),
    }

    if let Some(totals) = report.totals {
        verbose!(
            "Quality points: {:.2}  Credits: {:.2}",
            totals.quality_points,
            totals.credits
        );
    }
    Ok(())
}

/// Read the data file and build the active grade scale
fn load(input_file: Option<&Path>, config: &Config) -> Result<(Vec<AcademicYear>, GradeScale), String> {
    let path = input_file.map_or_else(|| PathBuf::from(&config.paths.data_file), Path::to_path_buf);

    let scale = config.grade_scale().map_err(|e| {
        error!("Configured grade scale is invalid: {e}");
        format!("✗ {e}")
    })?;

    let years = parse_course_csv(&path).map_err(|e| {
        error!("Failed to load course data {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;

    info!("Course data loaded: {}", path.display());
    Ok((years, scale))
}

fn locate(years: &[AcademicYear], label: &str) -> Result<usize, String> {
    find_year(years, label).ok_or_else(|| {
        let known: Vec<&str> = years.iter().map(|y| y.label.as_str()).collect();
        format!("✗ No courses found for '{label}' (years in file: {})", known.join(", "))
    })
}

/// Turn an engine error into user guidance
///
/// Only course entry errors name the year; scale errors can come from any
/// year that was built.
fn describe(label: &str, err: &GpaError) -> String {
    if err.is_validation() {
        format!("✗ Invalid course entry in {label}: {err}")
    } else {
        error!("{err}");
        format!("✗ {err}. Check the grade scale with `gpacalc scale show`.")
    }
}
