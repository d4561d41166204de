//! Lyric track model and loaders
//!
//! A track is an ordered, immutable list of lyric lines in one of two shapes:
//!
//! - point form: each line has a single `time` and stays active until the
//!   next line starts (LRC files load this way)
//! - interval form: each line has an explicit `[start_time, end_time]` window
//!
//! Tracks are loaded once at startup and never mutated afterwards.

mod json;
pub mod lrc;
pub mod validate;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use json::{ResolveRequest, ResolveResponse};
pub use validate::TrackIssue;

/// A lyric line that becomes active at `time` (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct PointLine {
    pub time: f64,
    pub text: String,
}

impl PointLine {
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// A lyric line active over `[start_time, end_time]` (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct SpanLine {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl SpanLine {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }
}

/// Optional descriptive metadata carried by a lyrics file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackMeta {
    pub title: Option<String>,
    pub artist: Option<String>,
}

/// The lines of a track, all in the same shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Lines {
    Point(Vec<PointLine>),
    Interval(Vec<SpanLine>),
}

/// An ordered lyric track plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricTrack {
    pub meta: TrackMeta,
    pub lines: Lines,
}

/// Errors raised while loading a lyric track.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Failed to read lyrics file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid lyrics JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lyrics mix point entries (`time`) with interval entries (`startTime`/`endTime`)")]
    MixedForms,

    #[error("LRC line {line}: {reason}")]
    Lrc { line: usize, reason: String },

    #[error("Cannot infer lyrics format from {path}; use --format json|lrc")]
    UnknownFormat { path: PathBuf },

    #[error("Lyrics failed validation: {}", summarize(.0))]
    Invalid(Vec<TrackIssue>),
}

fn summarize(issues: &[TrackIssue]) -> String {
    match issues {
        [] => "no issues".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

/// On-disk lyrics formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TrackFormat {
    Json,
    Lrc,
}

impl TrackFormat {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(TrackFormat::Json),
            "lrc" => Some(TrackFormat::Lrc),
            _ => None,
        }
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackFormat::Json => write!(f, "json"),
            TrackFormat::Lrc => write!(f, "lrc"),
        }
    }
}

impl LyricTrack {
    pub fn points(lines: Vec<PointLine>) -> Self {
        Self {
            meta: TrackMeta::default(),
            lines: Lines::Point(lines),
        }
    }

    pub fn spans(lines: Vec<SpanLine>) -> Self {
        Self {
            meta: TrackMeta::default(),
            lines: Lines::Interval(lines),
        }
    }

    pub fn with_meta(mut self, meta: TrackMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Load a track from disk.
    ///
    /// When `format` is `None` it is inferred from the file extension.
    pub fn load(path: &Path, format: Option<TrackFormat>) -> Result<Self, TrackError> {
        let format = match format.or_else(|| TrackFormat::from_path(path)) {
            Some(format) => format,
            None => {
                return Err(TrackError::UnknownFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = fs::read_to_string(path).map_err(|source| TrackError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let track = match format {
            TrackFormat::Json => Self::from_json_str(&content)?,
            TrackFormat::Lrc => lrc::parse(&content)?,
        };

        tracing::debug!(
            path = %path.display(),
            %format,
            lines = track.len(),
            "loaded lyric track"
        );
        Ok(track)
    }

    /// Load a track and run [`validate::check`] over it.
    ///
    /// Issues are logged as warnings; when `strict` is set they fail the load.
    pub fn load_checked(
        path: &Path,
        format: Option<TrackFormat>,
        strict: bool,
    ) -> Result<Self, TrackError> {
        let track = Self::load(path, format)?;
        let issues = validate::check(&track);
        for issue in &issues {
            tracing::warn!(path = %path.display(), "{}", issue);
        }
        if strict && !issues.is_empty() {
            return Err(TrackError::Invalid(issues));
        }
        Ok(track)
    }

    /// Parse a JSON lyrics document (bare array or `{ "lines": [...] }`).
    pub fn from_json_str(content: &str) -> Result<Self, TrackError> {
        json::parse_track(content)
    }

    pub fn len(&self) -> usize {
        match &self.lines {
            Lines::Point(lines) => lines.len(),
            Lines::Interval(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_point_form(&self) -> bool {
        matches!(self.lines, Lines::Point(_))
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        match &self.lines {
            Lines::Point(lines) => lines.get(index).map(|l| l.text.as_str()),
            Lines::Interval(lines) => lines.get(index).map(|l| l.text.as_str()),
        }
    }

    /// Time at which line `index` becomes active.
    pub fn start_of(&self, index: usize) -> Option<f64> {
        match &self.lines {
            Lines::Point(lines) => lines.get(index).map(|l| l.time),
            Lines::Interval(lines) => lines.get(index).map(|l| l.start_time),
        }
    }

    /// Time at which line `index` stops being active.
    ///
    /// For point form this is the next line's time; the last line's window
    /// is unbounded and returns `None`.
    pub fn end_of(&self, index: usize) -> Option<f64> {
        match &self.lines {
            Lines::Point(lines) => lines.get(index + 1).map(|l| l.time),
            Lines::Interval(lines) => lines.get(index).map(|l| l.end_time),
        }
    }

    /// Start times of every line, in track order.
    pub fn starts(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.start_of(i)).collect()
    }

    /// Latest timestamp carried by the track (0.0 for an empty track).
    pub fn last_time(&self) -> f64 {
        let latest = match &self.lines {
            Lines::Point(lines) => lines.iter().map(|l| l.time).fold(f64::NAN, f64::max),
            Lines::Interval(lines) => lines
                .iter()
                .map(|l| l.end_time.max(l.start_time))
                .fold(f64::NAN, f64::max),
        };
        if latest.is_finite() {
            latest.max(0.0)
        } else {
            0.0
        }
    }

    /// Display title: metadata title, else the given fallback.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.meta.title.as_deref().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_track() -> LyricTrack {
        LyricTrack::points(vec![
            PointLine::new(0.0, "a"),
            PointLine::new(4.0, "b"),
            PointLine::new(7.5, "c"),
        ])
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            TrackFormat::from_path(Path::new("song.lrc")),
            Some(TrackFormat::Lrc)
        );
        assert_eq!(
            TrackFormat::from_path(Path::new("song.JSON")),
            Some(TrackFormat::Json)
        );
        assert_eq!(TrackFormat::from_path(Path::new("song.txt")), None);
        assert_eq!(TrackFormat::from_path(Path::new("song")), None);
    }

    #[test]
    fn point_windows_run_to_next_line() {
        let track = point_track();
        assert_eq!(track.start_of(1), Some(4.0));
        assert_eq!(track.end_of(1), Some(7.5));
        assert_eq!(track.end_of(2), None); // last line is unbounded
        assert_eq!(track.start_of(3), None);
    }

    #[test]
    fn interval_windows_use_end_time() {
        let track = LyricTrack::spans(vec![SpanLine::new(1.9, 4.7, "a")]);
        assert_eq!(track.start_of(0), Some(1.9));
        assert_eq!(track.end_of(0), Some(4.7));
        assert!(!track.is_point_form());
    }

    #[test]
    fn last_time_covers_both_forms() {
        assert_eq!(point_track().last_time(), 7.5);
        let spans = LyricTrack::spans(vec![
            SpanLine::new(1.0, 2.0, "a"),
            SpanLine::new(3.0, 6.5, "b"),
        ]);
        assert_eq!(spans.last_time(), 6.5);
        assert_eq!(LyricTrack::points(vec![]).last_time(), 0.0);
    }

    #[test]
    fn starts_lists_every_line() {
        assert_eq!(point_track().starts(), vec![0.0, 4.0, 7.5]);
    }

    #[test]
    fn text_and_len() {
        let track = point_track();
        assert_eq!(track.len(), 3);
        assert!(!track.is_empty());
        assert_eq!(track.text(2), Some("c"));
        assert_eq!(track.text(3), None);
    }

    #[test]
    fn title_falls_back() {
        let track = point_track();
        assert_eq!(track.title_or("song.lrc"), "song.lrc");
        let titled = point_track().with_meta(TrackMeta {
            title: Some("Tante".to_string()),
            artist: None,
        });
        assert_eq!(titled.title_or("song.lrc"), "Tante");
    }

    #[test]
    fn invalid_error_summarizes_issues() {
        let err = TrackError::Invalid(vec![
            TrackIssue::Unsorted { index: 1 },
            TrackIssue::EmptyWindow { index: 2 },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("and 1 more"), "{msg}");
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let err = LyricTrack::load(Path::new("lyrics.txt"), None).unwrap_err();
        assert!(matches!(err, TrackError::UnknownFormat { .. }));
    }
}
