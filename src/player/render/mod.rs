//! Rendering components for the player.
//!
//! Layout, top to bottom: title, lyric panel, progress bar, status bar.
//! The help overlay is drawn on top when visible.

mod help;
mod lyrics;
mod progress;
mod status;

pub use help::{render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use lyrics::{build_lyric_lines, render_lyrics, split_sung, visible_window, START_HINT};
pub use progress::{build_progress_bar_chars, build_progress_line, format_duration};
pub use status::{build_hint_spans, build_status_line, KEY_HINTS};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::lyrics::LyricTrack;
use crate::player::refresh::RefreshMode;
use crate::player::state::DisplayState;
use crate::tui::Theme;

/// Snapshot of everything drawn in one frame.
pub struct PlayerView<'a> {
    pub title: &'a str,
    pub artist: Option<&'a str>,
    pub track: &'a LyricTrack,
    pub markers: &'a [f64],
    pub display: DisplayState,
    pub position: f64,
    pub duration: f64,
    pub speed: f64,
    pub mode: RefreshMode,
    pub context_lines: usize,
    pub show_help: bool,
    pub theme: &'a Theme,
}

/// Draw a full player frame.
pub fn draw(frame: &mut Frame, view: &PlayerView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(1),    // lyrics
            Constraint::Length(1), // progress
            Constraint::Length(1), // status
        ])
        .split(frame.area());

    let mut title = vec![Span::styled(view.title, view.theme.accent_bold_style())];
    if let Some(artist) = view.artist {
        title.push(Span::styled(
            format!(" - {}", artist),
            view.theme.text_secondary_style(),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(title)).alignment(Alignment::Center),
        chunks[0],
    );

    render_lyrics(
        frame,
        chunks[1],
        view.track,
        &view.display,
        view.context_lines,
        view.theme,
    );
    progress::render_progress_bar(
        frame,
        chunks[2],
        view.position,
        view.duration,
        view.markers,
        view.theme,
    );
    status::render_status_bar(
        frame,
        chunks[3],
        &view.display,
        view.speed,
        view.mode,
        view.theme,
    );

    if view.show_help {
        render_help(frame, frame.area(), view.theme);
    }
}
