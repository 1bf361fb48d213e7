//! Tests for loading the TOML config from disk.

use std::io::Write;
use std::path::Path;
use tictactoe_tui::TuiConfig;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tictactoe.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(
        f,
        r#"
player_one_default = "Noughts"
log_filter = "debug"
"#
    )
    .unwrap();

    let config = TuiConfig::load(&path).unwrap();
    assert_eq!(config.player_one_default(), "Noughts");
    assert_eq!(config.player_two_default(), "Player 2");
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_load_or_default_missing_file() {
    let config = TuiConfig::load_or_default(Path::new("does_not_exist.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_invalid_toml_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "player_one_default = [").unwrap();

    let err = TuiConfig::load(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_blank_default_name_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.toml");
    std::fs::write(&path, "player_two_default = \"\"\n").unwrap();

    assert!(TuiConfig::load_or_default(&path).is_err());
}
