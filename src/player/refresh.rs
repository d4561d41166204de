//! Refresh scheduling for the playback driver.
//!
//! Two strategies decide when the driver re-resolves the active line:
//!
//! - `Tick`: once per frame while playing. Frames are requested and
//!   cancelled explicitly, so pausing guarantees no further resolution.
//! - `Event`: only when the playback position has moved by a coarse
//!   time-update interval. Cheaper, but progress within a line is choppier.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Strategy selector used by config and CLI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    /// Resolve on every frame while playing
    #[default]
    Tick,
    /// Resolve on coarse time-update events
    Event,
}

impl fmt::Display for RefreshMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshMode::Tick => write!(f, "tick"),
            RefreshMode::Event => write!(f, "event"),
        }
    }
}

/// Strategy with its timing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStrategy {
    Tick { frame_interval: Duration },
    Event { update_interval: Duration },
}

impl RefreshStrategy {
    /// Build a strategy from its mode and the configured intervals.
    pub fn from_mode(mode: RefreshMode, frame_interval: Duration, update_interval: Duration) -> Self {
        match mode {
            RefreshMode::Tick => RefreshStrategy::Tick { frame_interval },
            RefreshMode::Event => RefreshStrategy::Event { update_interval },
        }
    }

    pub fn mode(&self) -> RefreshMode {
        match self {
            RefreshStrategy::Tick { .. } => RefreshMode::Tick,
            RefreshStrategy::Event { .. } => RefreshMode::Event,
        }
    }

    /// How long the host loop may sleep between driver turns.
    pub fn poll_interval(&self) -> Duration {
        match self {
            RefreshStrategy::Tick { frame_interval } => *frame_interval,
            RefreshStrategy::Event { update_interval } => {
                // Poll faster than the update interval so updates are not late
                // by a whole interval.
                (*update_interval / 4).max(Duration::from_millis(1))
            }
        }
    }
}

impl Default for RefreshStrategy {
    fn default() -> Self {
        RefreshStrategy::Tick {
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// Request/cancel bookkeeping for animation frames.
///
/// At most one frame is pending at a time. A cancelled frame never fires.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<u64>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame; returns the id of the (single) pending frame.
    pub fn request(&mut self) -> u64 {
        if let Some(id) = self.pending {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);
        id
    }

    /// Cancel the pending frame. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consume the pending frame, if any, so it can run.
    pub fn take(&mut self) -> Option<u64> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Emits coarse time updates from a continuously moving position.
#[derive(Debug)]
pub struct TimeUpdateEmitter {
    interval: f64,
    last: Option<f64>,
}

impl TimeUpdateEmitter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            last: None,
        }
    }

    /// Return `Some(position)` when an update is due.
    pub fn poll(&mut self, position: f64) -> Option<f64> {
        let due = match self.last {
            None => true,
            Some(last) => (position - last).abs() >= self.interval,
        };
        if due {
            self.last = Some(position);
            Some(position)
        } else {
            None
        }
    }

    /// Force the next poll to emit (after a seek or stop).
    pub fn mark_discontinuity(&mut self) {
        self.last = None;
    }
}
