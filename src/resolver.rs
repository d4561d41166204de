//! Lyric line resolution
//!
//! Maps a playback position to the index of the lyric line that should be
//! highlighted. Resolution is a pure function of `(time, track)`: nothing is
//! cached between calls and inputs are never mutated, so callers may resolve
//! from any thread, at any rate, in any order.
//!
//! `None` means no line applies yet (before the first line, or an empty
//! track). On the JSON boundary it is written as `-1`.

use crate::lyrics::{Lines, LyricTrack, PointLine, SpanLine};

/// Resolve the active line of `track` at `time` seconds.
pub fn resolve(time: f64, track: &LyricTrack) -> Option<usize> {
    match &track.lines {
        Lines::Point(lines) => resolve_points(time, lines),
        Lines::Interval(lines) => resolve_spans(time, lines),
    }
}

/// Point form: the last line whose `time <= t`.
///
/// The track is sorted, so this is a binary search for the first line that
/// starts after `t`. On unsorted input the answer is unspecified but the
/// search still terminates without panicking. NaN resolves to `None`.
pub fn resolve_points(time: f64, lines: &[PointLine]) -> Option<usize> {
    let started = lines.partition_point(|line| line.time <= time);
    started.checked_sub(1)
}

/// Interval form.
///
/// The first line with `start <= t <= end` wins, so on a shared boundary
/// the earlier line is kept. Between lines the last completed line (highest
/// index with `end <= t`) stays active instead of blanking the display.
pub fn resolve_spans(time: f64, lines: &[SpanLine]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.start_time <= time && time <= line.end_time)
        .or_else(|| lines.iter().rposition(|line| line.end_time <= time))
}

/// Fraction of line `index` already sung at `time`, clamped to `[0, 1]`.
///
/// The window ends at [`LyricTrack::end_of`]. The last point line has no
/// end, and zero-length windows have no extent; both read as fully sung
/// once reached.
pub fn line_progress(time: f64, track: &LyricTrack, index: usize) -> f64 {
    let Some(start) = track.start_of(index) else {
        return 0.0;
    };
    if time.is_nan() || time < start {
        return 0.0;
    }
    match track.end_of(index) {
        Some(end) if end > start => ((time - start) / (end - start)).clamp(0.0, 1.0),
        _ => 1.0,
    }
}

/// Failure reported by a [`LineResolver`] that sits behind a fallible call.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Resolver unavailable: {0}")]
    Unavailable(String),
}

/// The seam a playback driver resolves through.
///
/// Implementations must be deterministic in `(time, track)`. A driver that
/// receives an error keeps showing its previous line.
pub trait LineResolver {
    fn resolve(&self, time: f64, track: &LyricTrack) -> Result<Option<usize>, ResolveError>;
}

/// In-process resolver; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResolver;

impl LineResolver for LocalResolver {
    fn resolve(&self, time: f64, track: &LyricTrack) -> Result<Option<usize>, ResolveError> {
        Ok(resolve(time, track))
    }
}
