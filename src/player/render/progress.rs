//! Progress bar rendering for the player.
//!
//! Displays playback progress with a marker at the start of every lyric line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::Theme;

/// Playhead glyph.
const PLAYHEAD: char = '⏺';
/// Line-start marker glyph.
const MARKER: char = '◆';
/// Unplayed bar glyph.
const TRACK: char = '─';
/// Played bar glyph.
const PLAYED: char = '━';

/// Format a duration in seconds to MM:SS format.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// Creates a visual representation of the progress bar including
/// the playhead position and line-start markers.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `current_time` - Current playback time
/// * `total_duration` - Total duration of the track
/// * `markers` - Marker times (line starts)
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    markers: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec![TRACK; bar_width];

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    for &time in markers {
        let marker_pos = if total_duration > 0.0 {
            ((time / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if marker_pos < bar_width && bar[marker_pos] != PLAYHEAD {
            bar[marker_pos] = MARKER;
        }
    }

    (bar, filled)
}

/// Build the styled progress line: bar followed by ` MM:SS/MM:SS`.
pub fn build_progress_line(
    width: u16,
    current_time: f64,
    total_duration: f64,
    markers: &[f64],
    theme: &Theme,
) -> Line<'static> {
    let time_display = format!(
        " {}/{}",
        format_duration(current_time),
        format_duration(total_duration)
    );
    let bar_width = (width as usize).saturating_sub(time_display.len() + 1);
    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total_duration, markers);

    let played = theme.accent_style();
    let unplayed = theme.text_secondary_style();
    let marker = Style::default().fg(theme.text_primary);

    let mut spans = Vec::with_capacity(bar.len() + 2);
    spans.push(Span::raw(" "));
    for (i, &c) in bar.iter().enumerate() {
        let span = if c == MARKER {
            Span::styled(c.to_string(), marker)
        } else if i < filled {
            Span::styled(PLAYED.to_string(), played)
        } else if c == PLAYHEAD {
            Span::styled(c.to_string(), theme.accent_bold_style())
        } else {
            Span::styled(c.to_string(), unplayed)
        };
        spans.push(span);
    }
    spans.push(Span::styled(time_display, theme.text_style()));

    Line::from(spans)
}

/// Render the progress bar into `area` (one row).
pub fn render_progress_bar(
    frame: &mut Frame,
    area: Rect,
    current_time: f64,
    total_duration: f64,
    markers: &[f64],
    theme: &Theme,
) {
    let line = build_progress_line(area.width, current_time, total_duration, markers, theme);
    frame.render_widget(Paragraph::new(line), area);
}
