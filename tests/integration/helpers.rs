//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture into a string.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    path
}

/// A lyricsync command with colors off and config isolated in `home`.
pub fn lyricsync_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lyricsync"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env("LYRICSYNC_CONFIG", home.path().join("config.toml"));
    cmd
}

/// Run lyricsync with an isolated config and capture output.
pub fn run_lyricsync(args: &[&str]) -> (String, String, i32) {
    let home = TempDir::new().expect("Failed to create temp dir");
    run_lyricsync_in(&home, args)
}

/// Run lyricsync against the config in `home` and capture output.
pub fn run_lyricsync_in(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = lyricsync_cmd(home)
        .args(args)
        .output()
        .expect("Failed to execute lyricsync");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Fixture path as a `&str` argument.
pub fn fixture_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}
