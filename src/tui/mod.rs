//! TUI building blocks shared by the player and CLI output
//!
//! Themes (ratatui styles plus ANSI helpers) and layout helpers.

pub mod theme;
pub mod ui;

pub use theme::Theme;
