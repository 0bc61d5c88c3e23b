//! Tests for TOML match configuration.

use parlor::MatchConfig;
use parlor_tictactoe::Difficulty;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(*config.level(), 1);
    assert_eq!(config.player_name(), "You");
    assert_eq!(config.effective_difficulty(), Difficulty::Easy);
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
level = 35
difficulty = "medium"
seed = 99
player_name = "Ada"
"#,
    );
    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.level(), 35);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(config.effective_difficulty(), Difficulty::Medium);

    let rules = config.series_rules();
    assert_eq!(*rules.games_needed(), 6);
    assert_eq!(*rules.wins_needed(), 3);
    assert_eq!(*rules.difficulty(), Difficulty::Medium);
}

#[test]
fn test_overrides_win_over_file() {
    let file = write_config("level = 5\nseed = 1\n");
    let config = MatchConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(40), Some(Difficulty::Easy), None)
        .unwrap();
    assert_eq!(*config.level(), 40);
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(config.effective_difficulty(), Difficulty::Easy);
}

#[test]
fn test_rejects_bad_files() {
    let file = write_config("level = \"high\"");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let file = write_config("level = 0");
    assert!(MatchConfig::from_file(file.path()).is_err());

    let file = write_config("difficulty = \"impossible\"");
    assert!(MatchConfig::from_file(file.path()).is_err());

    let err = MatchConfig::from_file("/nonexistent/parlor.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_rejects_level_zero_override() {
    let err = MatchConfig::default()
        .with_overrides(Some(0), None, None)
        .unwrap_err();
    assert!(err.message.contains("Level must be at least 1"));

    let config = MatchConfig::default()
        .with_overrides(None, None, Some(9))
        .unwrap();
    assert_eq!(*config.level(), 1);
    assert_eq!(*config.seed(), Some(9));
}
