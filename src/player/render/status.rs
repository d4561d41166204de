//! Status bar rendering for the player.
//!
//! Displays playback state, speed, refresh strategy and keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::refresh::RefreshMode;
use crate::player::state::DisplayState;
use crate::tui::Theme;

/// Key hints shown on the right of the status bar.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("←/→", "seek"),
    ("r", "rewind"),
    ("s", "stop"),
    ("?", "help"),
    ("q", "quit"),
];

/// Build styled spans for keybinding hints.
///
/// Keys use the accent color, descriptions the secondary color, and entries
/// are separated by " | ".
pub fn build_hint_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

/// Build the status line: state, speed, strategy, then key hints.
pub fn build_status_line(
    display: &DisplayState,
    speed: f64,
    mode: RefreshMode,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" {} ", display.label()), theme.accent_bold_style()),
        Span::styled(
            format!("{:.2}x  {}  ", speed, mode),
            theme.text_secondary_style(),
        ),
    ];
    spans.extend(build_hint_spans(KEY_HINTS, theme));
    Line::from(spans)
}

/// Render the status bar into `area` (one row).
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    display: &DisplayState,
    speed: f64,
    mode: RefreshMode,
    theme: &Theme,
) {
    let line = build_status_line(display, speed, mode, theme);
    frame.render_widget(Paragraph::new(line), area);
}
