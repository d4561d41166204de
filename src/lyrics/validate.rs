//! Track integrity checks.
//!
//! The resolver tolerates malformed tracks (it never panics), but its answer
//! on them has no defined ordering. These checks surface such data so the
//! loader can warn about it or refuse it in strict mode.

use std::fmt;

use super::{Lines, LyricTrack};

/// A single integrity violation. Indices are 0-based; `Display` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackIssue {
    /// A time is NaN or infinite.
    NonFinite { index: usize },
    /// Point line starts before the line preceding it.
    Unsorted { index: usize },
    /// Interval line has `start_time >= end_time`.
    EmptyWindow { index: usize },
    /// Interval line starts before the previous line ends.
    Overlap { index: usize },
}

impl TrackIssue {
    pub fn index(&self) -> usize {
        match self {
            TrackIssue::NonFinite { index }
            | TrackIssue::Unsorted { index }
            | TrackIssue::EmptyWindow { index }
            | TrackIssue::Overlap { index } => *index,
        }
    }
}

impl fmt::Display for TrackIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.index() + 1;
        match self {
            TrackIssue::NonFinite { .. } => write!(f, "line {}: time is not a finite number", line),
            TrackIssue::Unsorted { .. } => {
                write!(f, "line {}: starts before the previous line", line)
            }
            TrackIssue::EmptyWindow { .. } => {
                write!(f, "line {}: start time is not before end time", line)
            }
            TrackIssue::Overlap { .. } => {
                write!(f, "line {}: starts before the previous line ends", line)
            }
        }
    }
}

/// Collect every integrity issue in `track`, in line order.
pub fn check(track: &LyricTrack) -> Vec<TrackIssue> {
    let mut issues = Vec::new();

    match &track.lines {
        Lines::Point(lines) => {
            for (index, line) in lines.iter().enumerate() {
                if !line.time.is_finite() {
                    issues.push(TrackIssue::NonFinite { index });
                    continue;
                }
                if index > 0 && line.time < lines[index - 1].time {
                    issues.push(TrackIssue::Unsorted { index });
                }
            }
        }
        Lines::Interval(lines) => {
            for (index, line) in lines.iter().enumerate() {
                if !line.start_time.is_finite() || !line.end_time.is_finite() {
                    issues.push(TrackIssue::NonFinite { index });
                    continue;
                }
                if line.start_time >= line.end_time {
                    issues.push(TrackIssue::EmptyWindow { index });
                }
                // Touching boundaries are fine; only strict overlap counts.
                if index > 0 && line.start_time < lines[index - 1].end_time {
                    issues.push(TrackIssue::Overlap { index });
                }
            }
        }
    }

    issues
}
