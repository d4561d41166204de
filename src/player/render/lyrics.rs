//! Lyric panel rendering.
//!
//! Shows a window of lines around the active one. The active line is split
//! into a sung prefix and an unsung rest, proportional to its progress.

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::lyrics::LyricTrack;
use crate::player::state::DisplayState;
use crate::tui::Theme;

/// Shown for lines with no text (instrumental breaks).
const INSTRUMENTAL: &str = "♪";

/// Shown while idle before the first line.
pub const START_HINT: &str = "Press space to start";

/// Range of line indices to show, centered on `active`.
///
/// Before the first line the window starts at the top of the track.
pub fn visible_window(active: Option<usize>, len: usize, context: usize) -> Range<usize> {
    if len == 0 {
        return 0..0;
    }
    let span = context * 2 + 1;
    let center = active.unwrap_or(0).min(len - 1);
    let start = center.saturating_sub(context).min(len.saturating_sub(span));
    start..(start + span).min(len)
}

/// Split `text` at the display column `progress * width`.
///
/// Wide characters are never cut in half: a character is sung once its
/// midpoint has been reached.
pub fn split_sung(text: &str, progress: f64) -> (&str, &str) {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    let target = total as f64 * progress.clamp(0.0, 1.0);

    let mut col = 0usize;
    for (byte, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if col as f64 + w as f64 / 2.0 > target {
            return text.split_at(byte);
        }
        col += w;
    }
    (text, "")
}

/// Build the styled lines of the lyric panel.
pub fn build_lyric_lines<'a>(
    track: &'a LyricTrack,
    display: &DisplayState,
    context: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let window = visible_window(display.line, track.len(), context);
    let mut lines = Vec::with_capacity(window.len() + 2);

    for index in window {
        let text = match track.text(index) {
            Some("") | None => INSTRUMENTAL,
            Some(text) => text,
        };

        if display.line == Some(index) {
            let (sung, rest) = split_sung(text, display.progress);
            let mut spans = Vec::with_capacity(2);
            if !sung.is_empty() {
                spans.push(Span::styled(sung, theme.sung_style()));
            }
            if !rest.is_empty() {
                spans.push(Span::styled(rest, theme.active_style()));
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::styled(text, theme.text_secondary_style()));
        }
    }

    if display.is_idle() {
        lines.push(Line::default());
        lines.push(Line::styled(START_HINT, theme.accent_bold_style()));
    }

    lines
}

/// Render the lyric panel, vertically centered in `area`.
pub fn render_lyrics(
    frame: &mut Frame,
    area: Rect,
    track: &LyricTrack,
    display: &DisplayState,
    context: usize,
    theme: &Theme,
) {
    let lines = build_lyric_lines(track, display, context, theme);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .min(area.height);
    let top = area.y + (area.height - height) / 2;
    let panel = Rect::new(area.x, top, area.width, height);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, panel);
}
