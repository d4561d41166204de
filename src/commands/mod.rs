//! Subcommand handlers

pub mod check;
pub mod completions;
pub mod config;
pub mod lines;
pub mod play;
pub mod resolve;

use lyricsync::tui::Theme;
use lyricsync::Config;

/// Theme from the config file, or the default when it cannot be loaded.
pub fn current_theme() -> Theme {
    Config::load()
        .ok()
        .and_then(|config| config.theme().ok())
        .unwrap_or_default()
}
