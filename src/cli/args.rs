//! CLI argument definitions for `gpacalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_calc::config::ConfigOverrides;
use gpa_calc::core::{Period, Quarter};
use gpa_calc::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Period selector for a single-year GPA
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum PeriodArg {
    /// Whole year
    Full,
    /// First semester
    Semester,
    /// Year to date through quarter 1
    Q1,
    /// Year to date through quarter 2
    Q2,
    /// Year to date through quarter 3
    Q3,
    /// Year to date through quarter 4
    Q4,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Full => Self::FullYear,
            PeriodArg::Semester => Self::Semester1,
            PeriodArg::Q1 => Self::YearToDate(Quarter::Q1),
            PeriodArg::Q2 => Self::YearToDate(Quarter::Q2),
            PeriodArg::Q3 => Self::YearToDate(Quarter::Q3),
            PeriodArg::Q4 => Self::YearToDate(Quarter::Q4),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`, `deduction`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ScaleSubcommand {
    /// Print the active grade scale and what each level earns.
    Show,
    /// Replace the whole grade scale.
    ///
    /// Each increment is GRADE:GPA, e.g. `64:0 69:2.0 ... 100:5.0`.
    /// Increments may be given in any order; they are sorted by grade.
    Set {
        /// Grade increments as GRADE:GPA pairs
        #[arg(value_name = "GRADE:GPA", num_args = 1.., required = true)]
        steps: Vec<String>,

        /// GPA subtracted per level below AP (keeps the current value when omitted)
        #[arg(long, value_name = "GPA")]
        deduction: Option<f64>,
    },
    /// Restore the built-in grade scale.
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// View or change the grade to GPA scale.
    Scale {
        #[command(subcommand)]
        subcommand: Option<ScaleSubcommand>,
    },
    /// Compute the GPA of one academic year.
    Year {
        /// Course data CSV (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Year label as it appears in the data file (e.g., Freshman)
        #[arg(short, long, value_name = "LABEL")]
        year: String,

        /// Period to aggregate
        #[arg(short, long, value_enum, default_value = "full")]
        period: PeriodArg,
    },
    /// Compute the cumulative GPA through a given year.
    Cumulative {
        /// Course data CSV (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Last year to include; earlier years count as complete
        #[arg(short, long, value_name = "LABEL")]
        through: String,

        /// Most recently finished quarter of the last year (full year when omitted)
        #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=4))]
        quarter: Option<u8>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpacalc",
    about = "Weighted GPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config course data file
    #[arg(long = "config-data-file", value_name = "PATH")]
    pub config_data_file: Option<PathBuf>,

    /// Override config course data file (short form)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--data-file` takes precedence over `--config-data-file` when both are given.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .or(self.config_data_file.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
