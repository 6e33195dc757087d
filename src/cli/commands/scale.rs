//! Scale command handler: show, replace, or reset the grade scale

use crate::args::ScaleSubcommand;
use gpa_calc::config::Config;
use gpa_calc::core::models::{GradeScale, Level, ScaleStep};
use gpa_calc::info;

/// Dispatch scale subcommands
///
/// # Errors
/// Returns a printable message if the increments are malformed, the new
/// scale is rejected, or the config cannot be saved.
pub fn run(
    subcommand: Option<ScaleSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ScaleSubcommand::Show) => {
            let scale = config.grade_scale().map_err(|e| e.to_string())?;
            print_scale(&scale);
            Ok(())
        }
        Some(ScaleSubcommand::Set { steps, deduction }) => {
            let steps = steps
                .iter()
                .map(|s| parse_step(s))
                .collect::<Result<Vec<_>, _>>()?;

            let mut scale = config.grade_scale().map_err(|e| e.to_string())?;
            if let Some(deduction) = deduction {
                scale = GradeScale::new(scale.steps().to_vec(), deduction)
                    .map_err(|e| e.to_string())?;
            }
            scale.replace(steps).map_err(|e| e.to_string())?;

            save_scale(config, &scale)?;
            println!("✓ Grade scale replaced ({} increments)", scale.steps().len());
            Ok(())
        }
        Some(ScaleSubcommand::Reset) => {
            let scale = defaults.grade_scale().map_err(|e| e.to_string())?;
            save_scale(config, &scale)?;
            println!("✓ Grade scale reset to defaults");
            Ok(())
        }
    }
}

/// Parse a `GRADE:GPA` increment
///
/// # Errors
/// Returns a message if the value has no `:` or either side is not a number.
pub fn parse_step(value: &str) -> Result<ScaleStep, String> {
    let (grade, gpa) = value
        .split_once(':')
        .ok_or_else(|| format!("Invalid increment '{value}': expected GRADE:GPA"))?;

    let grade = grade
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid grade in '{value}': enter a number between 0 and 100"))?;
    let gpa = gpa
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid gpa in '{value}'"))?;

    Ok(ScaleStep::new(grade, gpa))
}

fn save_scale(config: &mut Config, scale: &GradeScale) -> Result<(), String> {
    config.set_grade_scale(scale);
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Grade scale saved with {} increments", scale.steps().len());
    Ok(())
}

fn print_scale(scale: &GradeScale) {
    println!("\n=== Grade Scale (deduction {} per level) ===\n", scale.deduction());
    print!("{:>8}", "Grade");
    for level in Level::ALL {
        print!("{:>8}", level.code());
    }
    println!();

    let mut lower = 0.0;
    for step in scale.steps() {
        let range = format!("{lower}-{}", step.cutoff);
        print!("{range:>8}");
        for level in Level::ALL {
            let gpa = scale.deducted(step.gpa, level.rank());
            print!("{gpa:>8.2}");
        }
        println!();
        lower = step.cutoff + 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_step("92:4.5").unwrap(), ScaleStep::new(92.0, 4.5));
        assert_eq!(parse_step(" 64 : 0 ").unwrap(), ScaleStep::new(64.0, 0.0));
    }

    #[test]
    fn test_parse_step_rejects_malformed() {
        assert!(parse_step("92").is_err());
        assert!(parse_step("abc:4.5").is_err());
        assert!(parse_step("92:x").is_err());
    }
}
