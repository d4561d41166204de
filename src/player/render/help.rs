//! Help overlay rendering for the player.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::ui::centered_fixed;
use crate::tui::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space      Play / Pause",
    "    r          Rewind to start",
    "    s          Stop (rewind and clear)",
    "    <-/->      Seek -/+ seek step",
    "    +/-        Speed up / down",
    "",
    "  General",
    "    ?          Show this help",
    "    q / Esc    Quit player",
    "",
    "      Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 44;

/// Render the help overlay centered over `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = HELP_LINES.len() as u16 + 2;
    let rect = centered_fixed(HELP_BOX_WIDTH, height, area);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|l| Line::styled(*l, theme.text_style()))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" lyricsync help ")
        .title_style(theme.accent_bold_style());

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
