//! Tests for loading the TUI configuration file.

use std::io::Write;
use tictactoe_history::TuiConfig;

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
sort_ascending = false
log_file = "game.log"
show_coordinates = false
highlight_winning_line = false
"#
    )
    .unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert!(!config.sort_ascending());
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert!(!config.show_coordinates());
    assert!(!config.highlight_winning_line());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_load_or_default_rejects_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "show_coordinates = [").unwrap();
    let err = TuiConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_sort_override() {
    let config = TuiConfig::default().with_sort_ascending(false);
    assert!(!config.sort_ascending());
}
