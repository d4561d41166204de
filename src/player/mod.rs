//! Terminal lyrics player
//!
//! Drives the line resolver from a playback clock and renders the active
//! line with a karaoke highlight.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `clock`: playback position sources (wall clock and a manual test clock)
//! - `refresh`: refresh strategies (per-frame tick or coarse time updates)
//! - `driver`: owns clock, track and display state; calls the resolver
//! - `state`: display snapshot and input control flow
//! - `input/`: keyboard handling
//! - `render/`: lyric panel, progress bar, status bar and help overlay
//!
//! # Usage
//!
//! ```no_run
//! use lyricsync::lyrics::LyricTrack;
//! use lyricsync::player::{play_track, PlaybackOutcome, PlayerOptions};
//! use lyricsync::player::refresh::RefreshStrategy;
//! use lyricsync::tui::Theme;
//! use std::path::Path;
//!
//! let track = LyricTrack::load(Path::new("song.lrc"), None).unwrap();
//! let options = PlayerOptions {
//!     title: "song.lrc".to_string(),
//!     strategy: RefreshStrategy::default(),
//!     speed: 1.0,
//!     duration: None,
//!     tail_secs: 5.0,
//!     seek_step: 5.0,
//!     context_lines: 3,
//!     theme: Theme::default(),
//!     autoplay: false,
//! };
//! match play_track(track, options).unwrap() {
//!     PlaybackOutcome::Finished => println!("Finished"),
//!     PlaybackOutcome::Quit => println!("Stopped by user"),
//! }
//! ```

pub mod clock;
pub mod driver;
pub(crate) mod input;
mod native;
pub mod refresh;
pub mod render;
pub mod state;

pub use clock::{ManualClock, PlaybackClock, WallClock};
pub use driver::Driver;
pub use native::{play_track, session_duration, PlaybackOutcome, PlayerOptions};
pub use refresh::{RefreshMode, RefreshStrategy};
pub use state::{DisplayState, InputResult};
