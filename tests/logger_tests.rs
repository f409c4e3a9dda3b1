//! Integration tests for logger behavior.

use multimajor_advisor::logger::{init_file_logging, set_level, set_level_from_str, Level};
use multimajor_advisor::{debug, error, info, verbose, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("DEBUG"));
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
    verbose!("verbose integration");
}

#[test]
fn file_logging_appends_prefixed_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("logs").join("mmadvisor.log");

    assert!(init_file_logging(&log_path));
    // Error level passes whatever level the other tests leave behind
    error!("table primary.csv could not be read");

    let content = fs::read_to_string(&log_path).expect("log file exists");
    assert!(content.contains("[ERROR] table primary.csv could not be read"));
}
