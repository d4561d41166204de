//! Integration tests for the config command

use lyricsync::Config;
use tempfile::TempDir;

use crate::helpers::{run_lyricsync_in, write_file};

#[test]
fn path_honors_env_override() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_lyricsync_in(&home, &["config", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim_end(),
        home.path().join("config.toml").to_string_lossy()
    );
}

#[test]
fn show_prints_defaults_without_file() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_lyricsync_in(&home, &["config", "show"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
[playback]
strategy = "tick"
frame_interval_ms = 16
time_update_interval_ms = 250
speed = 1.0
seek_step_secs = 5.0
tail_secs = 5.0

[display]
theme = "stage"
context_lines = 3

[lyrics]
strict = false

[logging]
level = "warn"
"#);
}

#[test]
fn show_reflects_file_values() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), "config.toml", "[playback]\nstrategy = \"event\"\n");
    let (stdout, _stderr, exit_code) = run_lyricsync_in(&home, &["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("strategy = \"event\""), "{stdout}");
    assert!(stdout.contains("context_lines = 3"), "{stdout}");
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), "config.toml", "[playback\n");
    let (_stdout, stderr, exit_code) = run_lyricsync_in(&home, &["config", "show"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config file"), "{stderr}");
}

#[test]
fn migrate_without_yes_is_a_no_op_when_not_interactive() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_lyricsync_in(&home, &["config", "migrate"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("use --yes"), "{stdout}");
    assert!(stdout.contains("No changes made."), "{stdout}");
    assert!(!home.path().join("config.toml").exists());
}

#[test]
fn migrate_yes_creates_config() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_lyricsync_in(&home, &["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config file created successfully."), "{stdout}");

    let written = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(written.contains("[playback]"));
    assert!(written.contains("[logging]"));
    assert_eq!(Config::from_toml(&written).unwrap(), Config::default());

    let (stdout, _stderr, _) = run_lyricsync_in(&home, &["config", "migrate"]);
    assert!(stdout.contains("Config is already up to date."), "{stdout}");
}

#[test]
fn migrate_yes_fills_missing_fields_and_keeps_comments() {
    let home = TempDir::new().unwrap();
    let path = write_file(
        home.path(),
        "config.toml",
        "# tuned for my laptop\n[playback]\nspeed = 1.25\n",
    );
    let (stdout, _stderr, exit_code) = run_lyricsync_in(&home, &["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("new section(s)"), "{stdout}");
    assert!(stdout.contains("+ tail_secs = 5.0"), "{stdout}");

    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.starts_with("# tuned for my laptop\n[playback]\nspeed = 1.25\n"));
    assert!(written.contains("[display]"));
}

#[test]
fn migrate_yes_creates_missing_config_directory() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nested").join("dir").join("config.toml");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_lyricsync"))
        .args(["config", "migrate", "--yes"])
        .env("NO_COLOR", "1")
        .env("LYRICSYNC_CONFIG", &path)
        .output()
        .expect("Failed to execute lyricsync");
    assert!(output.status.success());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(Config::from_toml(&written).unwrap(), Config::default());
}
