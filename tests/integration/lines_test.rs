//! Integration tests for the lines command

use crate::helpers::{fixture_arg, run_lyricsync};

#[test]
fn lists_interval_track_with_active_line() {
    let (stdout, stderr, exit_code) =
        run_lyricsync(&["lines", &fixture_arg("tante.json"), "--at", "4"]);
    assert_eq!(exit_code, 0, "{stderr}");
    insta::assert_snapshot!(stdout.trim_end(), @r"
Tante (3 lines, interval form)
  1  00:00.50 -> 00:03.00  Hallo Tante
> 2  00:03.00 -> 00:06.50  wie geht es dir
  3  00:08.00 -> 00:11.00  mir geht es gut
Active at 00:04.00: line 2
");
}

#[test]
fn lists_lrc_track_sorted_with_repeated_tags() {
    let (stdout, stderr, exit_code) = run_lyricsync(&["lines", &fixture_arg("sample.lrc")]);
    assert_eq!(exit_code, 0, "{stderr}");
    insta::assert_snapshot!(stdout.trim_end(), @r"
Sample Song (5 lines, point form)
  1  00:01.00 -> 00:04.50  First line
  2  00:04.50 -> 00:09.00  Second line
  3  00:09.00 -> 00:12.25  Chorus
  4  00:12.25 -> 00:15.00  Bridge
  5  00:15.00 -> end       Chorus
");
}

#[test]
fn reports_no_active_line_before_start() {
    let (stdout, _stderr, exit_code) =
        run_lyricsync(&["lines", &fixture_arg("sample.lrc"), "--at", "0.5"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Active at 00:00.50: none"), "{stdout}");
    assert!(!stdout.lines().any(|l| l.starts_with('>')), "{stdout}");
}

#[test]
fn format_flag_overrides_extension() {
    let (_stdout, stderr, exit_code) = run_lyricsync(&[
        "lines",
        &fixture_arg("sample.lrc"),
        "--format",
        "json",
    ]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid lyrics JSON"), "{stderr}");
}
