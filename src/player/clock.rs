//! Playback clocks
//!
//! A clock stands in for the media element: it owns the playback position
//! and the playing flag. The driver only reads a snapshot of the position
//! on each refresh.

use std::time::Instant;

/// Minimum playback speed multiplier.
pub const MIN_SPEED: f64 = 0.1;
/// Maximum playback speed multiplier.
pub const MAX_SPEED: f64 = 16.0;

/// Source of playback time.
pub trait PlaybackClock {
    /// Current position in seconds, clamped to `[0, duration]`.
    fn position(&self) -> f64;
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    /// Jump to `time` seconds (clamped to the valid range).
    fn seek(&mut self, time: f64);
    /// Total length, if known.
    fn duration(&self) -> Option<f64>;
    fn speed(&self) -> f64;
    /// Set the speed multiplier (clamped to `MIN_SPEED..=MAX_SPEED`).
    fn set_speed(&mut self, speed: f64);

    /// Whether the position has reached the end of a known duration.
    fn has_ended(&self) -> bool {
        self.duration().is_some_and(|d| self.position() >= d)
    }
}

fn clamp_position(time: f64, duration: Option<f64>) -> f64 {
    let time = if time.is_nan() { 0.0 } else { time.max(0.0) };
    match duration {
        Some(d) => time.min(d),
        None => time,
    }
}

/// Clock driven by wall time, scaled by the playback speed.
#[derive(Debug, Clone)]
pub struct WallClock {
    /// Wall clock time when playback started/resumed (None while paused)
    resumed_at: Option<Instant>,
    /// Position at `resumed_at`, or the frozen position while paused
    offset: f64,
    speed: f64,
    duration: Option<f64>,
}

impl WallClock {
    /// Create a paused clock at position 0.
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            resumed_at: None,
            offset: 0.0,
            speed: 1.0,
            duration,
        }
    }

    fn elapsed(&self) -> f64 {
        self.resumed_at
            .map_or(0.0, |at| at.elapsed().as_secs_f64() * self.speed)
    }
}

impl PlaybackClock for WallClock {
    fn position(&self) -> f64 {
        clamp_position(self.offset + self.elapsed(), self.duration)
    }

    fn is_playing(&self) -> bool {
        self.resumed_at.is_some()
    }

    fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        // Playing a finished clock starts over, like a media element does.
        if self.has_ended() {
            self.offset = 0.0;
        }
        self.resumed_at = Some(Instant::now());
    }

    fn pause(&mut self) {
        self.offset = self.position();
        self.resumed_at = None;
    }

    fn seek(&mut self, time: f64) {
        self.offset = clamp_position(time, self.duration);
        if self.is_playing() {
            self.resumed_at = Some(Instant::now());
        }
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn set_speed(&mut self, speed: f64) {
        // Rebase so the position does not jump when the rate changes.
        self.offset = self.position();
        if self.is_playing() {
            self.resumed_at = Some(Instant::now());
        }
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}

/// Clock that only moves when told to; used by headless drivers and tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    position: f64,
    playing: bool,
    speed: f64,
    duration: Option<f64>,
}

impl ManualClock {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            position: 0.0,
            playing: false,
            speed: 1.0,
            duration,
        }
    }

    /// Advance by `secs` of wall time (scaled by speed) if playing.
    pub fn advance(&mut self, secs: f64) {
        if self.playing {
            self.position = clamp_position(self.position + secs * self.speed, self.duration);
        }
    }
}

impl PlaybackClock for ManualClock {
    fn position(&self) -> f64 {
        self.position
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        if self.has_ended() {
            self.position = 0.0;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, time: f64) {
        self.position = clamp_position(time, self.duration);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}
