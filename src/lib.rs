//! lyricsync: karaoke-style lyrics synchronized to a playback clock
//!
//! The core is [`resolver`]: given a playback time and an ordered
//! [`lyrics::LyricTrack`], find the line that should be highlighted. The
//! [`player`] drives it from a clock and renders the result in the terminal.

pub mod cli;
pub mod config;
pub mod logging;
pub mod lyrics;
pub mod player;
pub mod resolver;
pub mod tui;

pub use config::Config;
pub use lyrics::{LyricTrack, TrackError, TrackFormat};
pub use resolver::{resolve, LineResolver, LocalResolver};
