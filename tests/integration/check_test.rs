//! Integration tests for the check command

use tempfile::TempDir;

use crate::helpers::{fixture_arg, run_lyricsync, write_file};

#[test]
fn clean_track_passes() {
    let (stdout, _stderr, exit_code) = run_lyricsync(&["check", &fixture_arg("tante.json")]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("3 lines, no issues"), "{stdout}");
}

#[test]
fn unsorted_track_fails_with_issue() {
    let (stdout, stderr, exit_code) = run_lyricsync(&["check", &fixture_arg("unsorted.json")]);
    assert_eq!(exit_code, 1);
    assert!(stdout.contains("line 2: starts before the previous line"), "{stdout}");
    assert!(stderr.contains("1 issue(s) found"), "{stderr}");
}

#[test]
fn overlapping_and_empty_windows_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "bad.json",
        r#"[
            {"startTime": 0.0, "endTime": 4.0, "text": "a"},
            {"startTime": 3.0, "endTime": 3.0, "text": "b"}
        ]"#,
    );
    let (stdout, stderr, exit_code) = run_lyricsync(&["check", path.to_str().unwrap()]);
    assert_eq!(exit_code, 1);
    assert!(stdout.contains("line 2: start time is not before end time"), "{stdout}");
    assert!(stdout.contains("line 2: starts before the previous line ends"), "{stdout}");
    assert!(stderr.contains("2 issue(s) found"), "{stderr}");
}

#[test]
fn unknown_extension_needs_format() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "song.txt", "[00:01.00]hi\n");
    let (_stdout, stderr, exit_code) = run_lyricsync(&["check", path.to_str().unwrap()]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Cannot infer lyrics format"), "{stderr}");

    let (stdout, _stderr, exit_code) =
        run_lyricsync(&["check", path.to_str().unwrap(), "--format", "lrc"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("1 lines, no issues"), "{stdout}");
}

#[test]
fn bad_lrc_time_tag_reports_line_number() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "bad.lrc", "[00:01.00]ok\n[00:xx]broken\n");
    let (_stdout, stderr, exit_code) = run_lyricsync(&["check", path.to_str().unwrap()]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("LRC line 2"), "{stderr}");
}
