//! Logging setup
//!
//! `RUST_LOG` takes precedence over the configured level. Plain commands log
//! to stderr; the player must not write to the terminal it draws on, so it
//! logs to a file or not at all.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

/// Build the filter for `level`, unless `RUST_LOG` is set.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => level_filter(level),
    }
}

/// Parse a level or directive string such as `warn` or `lyricsync=debug`.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))
}

/// Install the global subscriber.
#[cfg(not(tarpaulin_include))]
pub fn init(level: &str, target: LogTarget) -> Result<()> {
    let filter = match target {
        LogTarget::Off => return Ok(()),
        _ => env_filter(level)?,
    };

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Off => Ok(()),
    };

    installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_levels_parse() {
        for level in ["error", "warn", "info", "debug", "trace", "off"] {
            assert!(level_filter(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn directives_parse() {
        assert!(level_filter("warn,lyricsync=debug").is_ok());
    }

    #[test]
    fn bad_level_is_an_error() {
        let err = level_filter("lyricsync=loud").unwrap_err();
        assert!(err.to_string().contains("lyricsync=loud"));
    }
}
