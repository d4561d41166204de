//! Integration tests for the top-level CLI

use crate::helpers::{fixture_arg, run_lyricsync};

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_lyricsync(&["--help"]);
    assert_eq!(exit_code, 0);
    for command in ["play", "resolve", "lines", "check", "config", "completions"] {
        assert!(stdout.contains(command), "missing {command}: {stdout}");
    }
}

#[test]
fn version_flag() {
    let (stdout, _stderr, exit_code) = run_lyricsync(&["--version"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("lyricsync "), "{stdout}");
}

#[test]
fn no_arguments_shows_usage() {
    let (_stdout, stderr, exit_code) = run_lyricsync(&[]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn play_requires_file() {
    let (_stdout, stderr, exit_code) = run_lyricsync(&["play"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<FILE>"), "{stderr}");
}

#[test]
fn play_rejects_unknown_strategy() {
    let (_stdout, stderr, exit_code) = run_lyricsync(&[
        "play",
        &fixture_arg("abc.json"),
        "--strategy",
        "sometimes",
    ]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("tick"), "{stderr}");
}

#[test]
fn play_strict_refuses_invalid_track_before_touching_terminal() {
    let (_stdout, stderr, exit_code) =
        run_lyricsync(&["play", &fixture_arg("unsorted.json"), "--strict"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Lyrics failed validation"), "{stderr}");
}

#[test]
fn play_rejects_unknown_theme() {
    let (_stdout, stderr, exit_code) =
        run_lyricsync(&["play", &fixture_arg("abc.json"), "--theme", "neon"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown theme 'neon'"), "{stderr}");
}

#[test]
fn completions_for_bash() {
    let (stdout, _stderr, exit_code) = run_lyricsync(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("lyricsync"), "{stdout}");
}
