//! Integration tests for the resolve command

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_arg, load_fixture, run_lyricsync, write_file};

fn resolve_stdin(request: &str) -> assert_cmd::assert::Assert {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("lyricsync")
        .unwrap()
        .env("LYRICSYNC_CONFIG", home.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .arg("resolve")
        .write_stdin(request.to_string())
        .assert()
}

// ============================================================================
// JSON boundary
// ============================================================================

#[test]
fn resolves_interval_request_from_stdin() {
    resolve_stdin(&load_fixture("resolve_request.json"))
        .success()
        .stdout("{\"currentLineIndex\":1}\n");
}

#[test]
fn before_first_line_is_minus_one() {
    let request = r#"{"currentTime": 0.2, "lyricsData": [
        {"startTime": 0.5, "endTime": 3.0, "text": "Hallo Tante"}
    ]}"#;
    resolve_stdin(request)
        .success()
        .stdout("{\"currentLineIndex\":-1}\n");
}

#[test]
fn gap_holds_last_completed_line() {
    let request = r#"{"currentTime": 7.0, "lyricsData": [
        {"startTime": 0.5, "endTime": 3.0, "text": "a"},
        {"startTime": 3.0, "endTime": 6.5, "text": "b"},
        {"startTime": 8.0, "endTime": 11.0, "text": "c"}
    ]}"#;
    resolve_stdin(request)
        .success()
        .stdout("{\"currentLineIndex\":1}\n");
}

#[test]
fn point_request_resolves() {
    let request = r#"{"currentTime": 5.0, "lyricsData": [
        {"time": 0.0, "text": "A"},
        {"time": 4.0, "text": "B"},
        {"time": 7.5, "text": "C"}
    ]}"#;
    resolve_stdin(request)
        .success()
        .stdout("{\"currentLineIndex\":1}\n");
}

#[test]
fn empty_lyrics_resolve_to_minus_one() {
    resolve_stdin(r#"{"currentTime": 3.0, "lyricsData": []}"#)
        .success()
        .stdout("{\"currentLineIndex\":-1}\n");
}

#[test]
fn stale_current_line_index_is_ignored() {
    let request = r#"{"currentTime": 0.0, "currentLineIndex": 2, "lyricsData": [
        {"time": 0.0, "text": "A"},
        {"time": 4.0, "text": "B"}
    ]}"#;
    resolve_stdin(request)
        .success()
        .stdout("{\"currentLineIndex\":0}\n");
}

#[test]
fn malformed_request_fails() {
    resolve_stdin("{\"currentTime\": \"soon\"}")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn mixed_forms_are_rejected() {
    let request = format!(
        "{{\"currentTime\": 1.0, \"lyricsData\": {}}}",
        load_fixture("mixed.json")
    );
    resolve_stdin(&request)
        .failure()
        .stderr(predicate::str::contains("mix point entries"));
}

#[test]
fn request_can_come_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "req.json", &load_fixture("resolve_request.json"));
    let (stdout, _stderr, exit_code) =
        run_lyricsync(&["resolve", "--input", path.to_str().unwrap()]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"{"currentLineIndex":1}"#);
}

// ============================================================================
// Track files
// ============================================================================

#[test]
fn resolves_against_json_track() {
    let track = fixture_arg("tante.json");
    for (at, expected) in [("0.2", -1), ("0.5", 0), ("3.0", 0), ("4.0", 1), ("7.0", 1), ("20", 2)] {
        let (stdout, stderr, exit_code) =
            run_lyricsync(&["resolve", "--track", &track, "--at", at]);
        assert_eq!(exit_code, 0, "{stderr}");
        assert_eq!(
            stdout,
            format!("{{\"currentLineIndex\":{}}}\n", expected),
            "at {at}"
        );
    }
}

#[test]
fn resolves_against_lrc_track() {
    let track = fixture_arg("sample.lrc");
    let (stdout, _stderr, exit_code) =
        run_lyricsync(&["resolve", "--track", &track, "--at", "10"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "{\"currentLineIndex\":2}\n");
}

#[test]
fn negative_time_is_before_everything() {
    let track = fixture_arg("abc.json");
    let (stdout, _stderr, exit_code) =
        run_lyricsync(&["resolve", "--track", &track, "--at", "-1"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "{\"currentLineIndex\":-1}\n");
}

#[test]
fn missing_track_file_fails() {
    let (_stdout, stderr, exit_code) =
        run_lyricsync(&["resolve", "--track", "/nonexistent/song.json", "--at", "1"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read lyrics file"), "{stderr}");
}

#[test]
fn at_without_track_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_lyricsync(&["resolve", "--at", "1"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--track"), "{stderr}");
}
