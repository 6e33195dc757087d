//! Configuration module for `gpacalc`

use crate::core::error::GpaError;
use crate::core::models::grade_scale::{GradeScale, ScaleStep, DEFAULT_DEDUCTION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$GPA_CALC";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Course data CSV used when no file is given on the command line
    #[serde(default)]
    pub data_file: String,
}

const fn default_deduction() -> f64 {
    DEFAULT_DEDUCTION
}

/// Grade scale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// GPA subtracted per level below AP
    #[serde(default = "default_deduction")]
    pub deduction: f64,
    /// `(grade, gpa)` increments for AP courses
    #[serde(default)]
    pub steps: Vec<ScaleStep>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            deduction: DEFAULT_DEDUCTION,
            steps: Vec::new(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Grade scale settings
    #[serde(default)]
    pub scale: ScaleConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override course data file
    pub data_file: Option<String>,
}

impl Config {
    /// Get the `$GPA_CALC` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpacalc`
    /// - macOS: `~/Library/Application Support/gpacalc`
    /// - Windows: `%APPDATA%\gpacalc`
    #[must_use]
    pub fn get_gpacalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpacalc")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used on load so that fields added in newer versions pick up their
    /// defaults while existing user settings are kept. An empty scale is
    /// replaced by the default scale.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_file.is_empty() && !defaults.paths.data_file.is_empty() {
            self.paths.data_file.clone_from(&defaults.paths.data_file);
            changed = true;
        }

        if self.scale.steps.is_empty() && !defaults.scale.steps.is_empty() {
            self.scale.steps.clone_from(&defaults.scale.steps);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; the config file is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_gpacalc_dir`].
    ///
    /// [`get_gpacalc_dir`]: Self::get_gpacalc_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpacalc_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_CALC` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gpacalc_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$GPA_CALC` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists it is loaded, missing fields are merged
    ///   from defaults and the result saved back.
    /// - On first run the directory and file are created from defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Build the active grade scale from the `[scale]` section
    ///
    /// # Errors
    /// Returns `GpaError::InvalidScale` if the configured steps or deduction are invalid.
    pub fn grade_scale(&self) -> Result<GradeScale, GpaError> {
        GradeScale::new(self.scale.steps.clone(), self.scale.deduction)
    }

    /// Replace the configured scale with an already validated one
    pub fn set_grade_scale(&mut self, scale: &GradeScale) {
        self.scale.steps = scale.steps().to_vec();
        self.scale.deduction = scale.deduction();
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `data_file`: Default course data CSV
    /// - `deduction`: GPA subtracted per level below AP
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "deduction" => Some(self.scale.deduction.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_file" | "data-file" => self.paths.data_file = value.to_string(),
            "deduction" => {
                let deduction = value
                    .parse::<f64>()
                    .ok()
                    .filter(|d| d.is_finite() && *d >= 0.0)
                    .ok_or_else(|| format!("Invalid value for 'deduction': '{value}'"))?;
                self.scale.deduction = deduction;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_file" | "data-file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "deduction" => self.scale.deduction = defaults.scale.deduction,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;

        writeln!(f, "\n[scale]")?;
        writeln!(f, "  deduction = {}", self.scale.deduction)?;
        for step in &self.scale.steps {
            writeln!(f, "  grade <= {:>5} -> gpa {}", step.cutoff, step.gpa)?;
        }

        Ok(())
    }
}
