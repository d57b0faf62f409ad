//! Tests for config loading.

use std::io::Write;
use tictac::Config;
use tictac_core::Mark;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(*config.show_hints());
    assert_eq!(config.player_name(Mark::X), "player1");
    assert_eq!(config.player_name(Mark::O), "player2");
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_from_file_full() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
show_hints = false
player_x = "Ada"
player_o = "Grace"
log_filter = "debug"
"#
    )
    .expect("write config");

    let config = Config::from_file(file.path()).expect("valid config");
    assert!(!*config.show_hints());
    assert_eq!(config.player_name(Mark::X), "Ada");
    assert_eq!(config.player_name(Mark::O), "Grace");
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"player_o = "Grace""#).expect("write config");

    let config = Config::load(Some(file.path())).expect("valid config");
    assert!(*config.show_hints());
    assert_eq!(config.player_name(Mark::X), "player1");
    assert_eq!(config.player_name(Mark::O), "Grace");
}

#[test]
fn test_malformed_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_hints = \"sometimes\"").expect("write config");

    let err = Config::from_file(file.path()).expect_err("wrong type");
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: "));
}

#[test]
fn test_missing_explicit_file_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = Config::load(Some(missing.as_path())).expect_err("missing file");
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_discovers_file_in_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join(tictac::DEFAULT_CONFIG_FILE),
        "player_x = \"Ada\"\n",
    )
    .expect("write config");

    let config = Config::load_from(None, dir.path()).expect("valid config");
    assert_eq!(config.player_name(Mark::X), "Ada");
}

#[test]
fn test_empty_dir_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_from(None, dir.path()).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_explicit_path_beats_discovered_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join(tictac::DEFAULT_CONFIG_FILE), "player_x = \"Ada\"\n")
        .expect("write config");
    let mut explicit = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(explicit, r#"player_x = "Grace""#).expect("write config");

    let config = Config::load_from(Some(explicit.path()), dir.path()).expect("valid config");
    assert_eq!(config.player_name(Mark::X), "Grace");
}
