//! JSON lyrics documents and the resolve request/response boundary.
//!
//! Entries use camelCase keys: `{startTime, endTime, text}` for interval
//! lines and `{time, text}` for point lines.

use serde::{Deserialize, Serialize};

use super::{LyricTrack, PointLine, SpanLine, TrackError, TrackMeta};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Span {
        #[serde(rename = "startTime")]
        start_time: f64,
        #[serde(rename = "endTime")]
        end_time: f64,
        text: String,
    },
    Point {
        time: f64,
        text: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Bare(Vec<RawEntry>),
    Titled {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        artist: Option<String>,
        lines: Vec<RawEntry>,
    },
}

/// Split raw entries into a single-form track, rejecting mixed shapes.
fn into_track(entries: Vec<RawEntry>, meta: TrackMeta) -> Result<LyricTrack, TrackError> {
    let span_count = entries
        .iter()
        .filter(|e| matches!(e, RawEntry::Span { .. }))
        .count();

    let track = if span_count == 0 {
        let lines = entries
            .into_iter()
            .filter_map(|e| match e {
                RawEntry::Point { time, text } => Some(PointLine { time, text }),
                RawEntry::Span { .. } => None,
            })
            .collect();
        LyricTrack::points(lines)
    } else if span_count == entries.len() {
        let lines = entries
            .into_iter()
            .filter_map(|e| match e {
                RawEntry::Span {
                    start_time,
                    end_time,
                    text,
                } => Some(SpanLine {
                    start_time,
                    end_time,
                    text,
                }),
                RawEntry::Point { .. } => None,
            })
            .collect();
        LyricTrack::spans(lines)
    } else {
        return Err(TrackError::MixedForms);
    };

    Ok(track.with_meta(meta))
}

pub(super) fn parse_track(content: &str) -> Result<LyricTrack, TrackError> {
    match serde_json::from_str(content)? {
        RawDocument::Bare(entries) => into_track(entries, TrackMeta::default()),
        RawDocument::Titled {
            title,
            artist,
            lines,
        } => into_track(lines, TrackMeta { title, artist }),
    }
}

/// Input of a single resolve call.
///
/// `currentLineIndex` is accepted for compatibility with callers that echo
/// back the last result, but it never influences resolution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub current_time: f64,
    lyrics_data: Vec<RawEntry>,
    #[serde(default)]
    pub current_line_index: Option<i64>,
}

impl ResolveRequest {
    pub fn from_json_str(content: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the track carried by this request.
    pub fn track(&self) -> Result<LyricTrack, TrackError> {
        into_track(self.lyrics_data.clone(), TrackMeta::default())
    }
}

/// Output of a single resolve call; `-1` means no line applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub current_line_index: i64,
}

impl ResolveResponse {
    pub fn from_index(index: Option<usize>) -> Self {
        Self {
            current_line_index: index.map_or(-1, |i| i as i64),
        }
    }

    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.current_line_index).ok()
    }
}
