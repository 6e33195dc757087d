//! Leveled logger for `gpacalc`.
//!
//! Feature flags:
//! - `log-info` enables `info!` output.
//! - `log-debug` enables `debug!` output, subject to a runtime switch.
//! - `verbose` enables `verbose!`, an untagged printer that never goes to the log file.
//! - `file-logging` allows redirecting tagged messages to a file.
//!
//! `warn!` and `error!` are always active and go to stderr; `info!` and
//! `debug!` go to stdout. Once a log file is set, tagged messages go only
//! to the file.

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Mutex;

/// Logging levels, lowest number is most severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Errors (always enabled).
    Error = 1,
    /// Warnings (always enabled).
    Warn = 2,
    /// Informational messages (requires `log-info`).
    Info = 3,
    /// Debug messages (requires `log-debug` and the runtime switch).
    Debug = 4,
}

impl Level {
    /// Tag written in front of each message
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Parse a level name (case-insensitive); accepts `err` and `warning` aliases
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    const fn compiled_in(self) -> bool {
        match self {
            Self::Error | Self::Warn => true,
            Self::Info => cfg!(feature = "log-info"),
            Self::Debug => cfg!(feature = "log-debug"),
        }
    }
}

/// Most verbose level the build supports
const fn default_level() -> Level {
    if cfg!(feature = "log-debug") {
        Level::Debug
    } else if cfg!(feature = "log-info") {
        Level::Info
    } else {
        Level::Warn
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level() as u8);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "log-debug"));
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set the level from a string. Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    Level::parse(level).map(set_level).is_some()
}

/// Turn on `debug!` output (no-op without `log-debug`).
pub fn enable_debug() {
    DEBUG_ENABLED.store(cfg!(feature = "log-debug"), Ordering::SeqCst);
}

/// Turn off `debug!` output.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `debug!` output is switched on.
#[must_use]
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Turn on `verbose!` output (no-op without `verbose`).
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(cfg!(feature = "verbose"), Ordering::SeqCst);
}

/// Turn off `verbose!` output.
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` output is switched on.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Send tagged messages to `path`, appending. Returns true on success.
///
/// Always false when the `file-logging` feature is off.
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    if !cfg!(feature = "file-logging") {
        return false;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    LOG_FILE.lock().map_or(false, |mut slot| {
        *slot = Some(file);
        true
    })
}

/// Append a line to the log file; returns false when no file is set.
fn write_to_file(line: &str) -> bool {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return false;
    };
    match slot.as_mut() {
        Some(file) => {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
            true
        }
        None => false,
    }
}

fn should_log(level: Level) -> bool {
    level.compiled_in()
        && (level as u8) <= LOG_LEVEL.load(Ordering::SeqCst)
        && (level != Level::Debug || is_debug_enabled())
}

/// Dispatch used by the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }

    let line = format!("{} {args}", level.tag());
    if write_to_file(&line) {
        return;
    }

    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Logs an error-level message (always enabled).
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*)) };
}

/// Logs a warning-level message (always enabled).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Warn, format_args!($($arg)*)) };
}

/// Logs an info-level message (requires `log-info`).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Info, format_args!($($arg)*)) };
}

/// Logs a debug-level message (requires `log-debug` and the runtime switch).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*)) };
}

/// Prints an untagged message when verbose output is on. Never written to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() {
            println!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("ERR"), Some(Level::Error));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse(" info "), Some(Level::Info));
        assert_eq!(Level::parse("debug"), Some(Level::Debug));
        assert_eq!(Level::parse("trace"), None);
    }

    #[test]
    fn test_set_level_from_str() {
        assert!(set_level_from_str("warn"));
        assert!(!set_level_from_str(""));
        set_level(default_level());
    }

    #[test]
    fn test_levels_order_by_severity() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn test_macros_do_not_panic() {
        crate::error!("error {}", 1);
        crate::warn!("warn {}", 2);
        crate::info!("info {}", 3);
        crate::debug!("debug {}", 4);
        crate::verbose!("verbose {}", 5);
    }

    #[cfg(feature = "log-debug")]
    #[test]
    fn test_debug_runtime_switch() {
        disable_debug();
        assert!(!is_debug_enabled());
        crate::debug!("should be silent");
        enable_debug();
        assert!(is_debug_enabled());
    }
}
