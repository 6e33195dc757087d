//! Integration tests for logger behavior.

use gpa_calc::logger::{set_level, set_level_from_str, Level};
use gpa_calc::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_tagged_lines() {
    use gpa_calc::logger::init_file_logging;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("logs").join("gpacalc.log");

    assert!(init_file_logging(&log_path));
    set_level(Level::Warn);
    error!("scale misconfigured");

    let content = std::fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(content.contains("[ERROR] scale misconfigured"));
}
