//! Lines command: list a track with its time windows

use anyhow::Result;

use lyricsync::cli::LinesArgs;
use lyricsync::lyrics::LyricTrack;
use lyricsync::resolver::resolve;
use lyricsync::tui::Theme;
use lyricsync::Config;

pub fn handle(args: &LinesArgs, config: &Config) -> Result<()> {
    let theme = config.theme()?;
    let track = LyricTrack::load(&args.file, args.format)?;
    let fallback = args.file.display().to_string();

    let form = if track.is_point_form() { "point" } else { "interval" };
    println!(
        "{}",
        theme.accent_text(&format!(
            "{} ({} lines, {} form)",
            track.title_or(&fallback),
            track.len(),
            form
        ))
    );

    let active = args.at.and_then(|at| resolve(at, &track));
    for line in format_lines(&track, active) {
        if line.active {
            println!("{}", theme.primary_text(&line.text));
        } else {
            println!("{}", theme.secondary_text(&line.text));
        }
    }

    if let Some(at) = args.at {
        print_active_summary(&theme, at, active);
    }
    Ok(())
}

fn print_active_summary(theme: &Theme, at: f64, active: Option<usize>) {
    let summary = match active {
        Some(index) => format!("Active at {}: line {}", format_timestamp(at), index + 1),
        None => format!("Active at {}: none", format_timestamp(at)),
    };
    println!("{}", theme.accent_text(&summary));
}

struct ListedLine {
    text: String,
    active: bool,
}

fn format_lines(track: &LyricTrack, active: Option<usize>) -> Vec<ListedLine> {
    let width = track.len().to_string().len();
    (0..track.len())
        .map(|index| {
            let is_active = active == Some(index);
            let marker = if is_active { '>' } else { ' ' };
            let start = track
                .start_of(index)
                .map_or_else(|| "--:--.--".to_string(), format_timestamp);
            let end = track
                .end_of(index)
                .map_or_else(|| "end".to_string(), format_timestamp);
            ListedLine {
                text: format!(
                    "{} {:>width$}  {} -> {:<8}  {}",
                    marker,
                    index + 1,
                    start,
                    end,
                    track.text(index).unwrap_or_default(),
                    width = width
                ),
                active: is_active,
            }
        })
        .collect()
}

/// `MM:SS.cc`, or the raw value when it is not a usable time.
fn format_timestamp(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return format!("{}", secs);
    }
    let centis = (secs * 100.0).round() as u64;
    format!(
        "{:02}:{:02}.{:02}",
        centis / 6000,
        (centis / 100) % 60,
        centis % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyricsync::lyrics::{PointLine, SpanLine};

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(0.0), "00:00.00");
        assert_eq!(format_timestamp(7.5), "00:07.50");
        assert_eq!(format_timestamp(125.456), "02:05.46");
        assert_eq!(format_timestamp(-1.0), "-1");
        assert_eq!(format_timestamp(f64::NAN), "NaN");
    }

    #[test]
    fn point_lines_end_at_next_start() {
        let track = LyricTrack::points(vec![PointLine::new(0.0, "a"), PointLine::new(4.0, "b")]);
        let lines = format_lines(&track, Some(1));
        assert_eq!(lines[0].text, "  1  00:00.00 -> 00:04.00  a");
        assert_eq!(lines[1].text, "> 2  00:04.00 -> end       b");
        assert!(lines[1].active);
    }

    #[test]
    fn interval_lines_show_windows() {
        let track = LyricTrack::spans(vec![SpanLine::new(1.0, 2.5, "x")]);
        let lines = format_lines(&track, None);
        assert_eq!(lines[0].text, "  1  00:01.00 -> 00:02.50  x");
        assert!(!lines[0].active);
    }
}
