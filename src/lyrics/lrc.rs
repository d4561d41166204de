//! LRC lyrics parser.
//!
//! Handles the common subset of the format:
//!
//! ```text
//! [ti:Song title]
//! [ar:Artist]
//! [offset:+250]
//! [00:01.90]first line
//! [00:04.70][01:10.20]repeated chorus line
//! ```
//!
//! Time tags may be `mm:ss`, `mm:ss.xx` or `mm:ss.xxx`. A positive `offset`
//! (milliseconds) makes every line appear sooner.

use super::{LyricTrack, PointLine, TrackError, TrackMeta};

/// Parse LRC text into a point-form track sorted by time.
pub fn parse(content: &str) -> Result<LyricTrack, TrackError> {
    let mut meta = TrackMeta::default();
    let mut offset_ms: i64 = 0;
    let mut lines: Vec<PointLine> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let mut rest = raw.trim().trim_start_matches('\u{feff}');
        let mut times = Vec::new();

        while let Some(tagged) = rest.strip_prefix('[') {
            let Some(close) = tagged.find(']') else {
                return Err(TrackError::Lrc {
                    line: line_no,
                    reason: "unterminated tag".to_string(),
                });
            };
            let tag = &tagged[..close];
            rest = &tagged[close + 1..];

            if tag.starts_with(|c: char| c.is_ascii_digit()) {
                let time = parse_time_tag(tag).ok_or_else(|| TrackError::Lrc {
                    line: line_no,
                    reason: format!("invalid time tag [{}]", tag),
                })?;
                times.push(time);
                continue;
            }

            let (key, value) = tag.split_once(':').unwrap_or((tag, ""));
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "ti" if !value.is_empty() => meta.title = Some(value.to_string()),
                "ar" if !value.is_empty() => meta.artist = Some(value.to_string()),
                "offset" => {
                    offset_ms = value.parse().map_err(|_| TrackError::Lrc {
                        line: line_no,
                        reason: format!("invalid offset [{}]", tag),
                    })?;
                }
                other => tracing::trace!(line = line_no, tag = other, "ignoring LRC id tag"),
            }
        }

        if times.is_empty() {
            if !rest.trim().is_empty() {
                tracing::debug!(line = line_no, "skipping LRC line without time tag");
            }
            continue;
        }

        let text = rest.trim();
        for time in times {
            lines.push(PointLine::new(time, text));
        }
    }

    if offset_ms != 0 {
        let shift = offset_ms as f64 / 1000.0;
        for line in &mut lines {
            line.time = (line.time - shift).max(0.0);
        }
    }

    // Stable, so lines sharing a timestamp keep file order.
    lines.sort_by(|a, b| a.time.total_cmp(&b.time));

    Ok(LyricTrack::points(lines).with_meta(meta))
}

/// Parse `mm:ss`, `mm:ss.f…` or `mm:ss:f…` into seconds.
fn parse_time_tag(tag: &str) -> Option<f64> {
    let (minutes, rest) = tag.split_once(':')?;
    let (seconds, fraction) = match rest.find(['.', ':']) {
        Some(pos) => (&rest[..pos], &rest[pos + 1..]),
        None => (rest, ""),
    };

    let minutes: u64 = minutes.trim().parse().ok()?;
    let seconds: u64 = seconds.trim().parse().ok()?;
    let fraction = if fraction.is_empty() {
        0.0
    } else {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits: u32 = fraction.len().try_into().ok()?;
        let value: u64 = fraction.parse().ok()?;
        value as f64 / 10f64.powi(digits as i32)
    };

    Some(minutes as f64 * 60.0 + seconds as f64 + fraction)
}
