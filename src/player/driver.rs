//! Playback driver
//!
//! Owns the clock, the refresh schedule and the display state, and calls the
//! resolver on every due frame or time update. All mutable state lives here
//! and is only touched from the thread that owns the driver.

use tracing::{debug, info, warn};

use crate::lyrics::LyricTrack;
use crate::player::clock::PlaybackClock;
use crate::player::refresh::{FrameScheduler, RefreshStrategy, TimeUpdateEmitter};
use crate::player::state::DisplayState;
use crate::resolver::{line_progress, LineResolver, LocalResolver};

/// Speed multiplier step for speed up/down.
const SPEED_STEP: f64 = 1.5;

pub struct Driver<C, R = LocalResolver> {
    track: LyricTrack,
    clock: C,
    resolver: R,
    strategy: RefreshStrategy,
    frames: FrameScheduler,
    updates: TimeUpdateEmitter,
    display: DisplayState,
    invocations: u64,
}

impl<C: PlaybackClock> Driver<C, LocalResolver> {
    /// Driver resolving in-process.
    pub fn local(track: LyricTrack, clock: C, strategy: RefreshStrategy) -> Self {
        Self::new(track, clock, LocalResolver, strategy)
    }
}

impl<C: PlaybackClock, R: LineResolver> Driver<C, R> {
    pub fn new(track: LyricTrack, clock: C, resolver: R, strategy: RefreshStrategy) -> Self {
        let update_interval = match strategy {
            RefreshStrategy::Event { update_interval } => update_interval,
            RefreshStrategy::Tick { frame_interval } => frame_interval,
        };
        Self {
            track,
            clock,
            resolver,
            strategy,
            frames: FrameScheduler::new(),
            updates: TimeUpdateEmitter::new(update_interval),
            display: DisplayState::default(),
            invocations: 0,
        }
    }

    pub fn track(&self) -> &LyricTrack {
        &self.track
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn strategy(&self) -> RefreshStrategy {
        self.strategy
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    /// Number of resolver calls made so far.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// Whether a frame is scheduled (tick strategy only).
    pub fn frame_pending(&self) -> bool {
        self.frames.is_pending()
    }

    pub fn play(&mut self) {
        self.display.ended = false;
        // Resuming emits a time update on the next turn.
        self.updates.mark_discontinuity();
        self.clock.play();
        self.display.playing = true;
        if let RefreshStrategy::Tick { .. } = self.strategy {
            self.frames.request();
        }
        info!(position = self.clock.position(), "playback started");
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        self.display.playing = false;
        self.frames.cancel();
        // Pausing is a time update: show the line for the paused position.
        if let RefreshStrategy::Event { .. } = self.strategy {
            self.refresh();
        }
        info!(position = self.clock.position(), "playback paused");
    }

    pub fn toggle(&mut self) {
        if self.display.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pause, return to the start and clear the highlight.
    pub fn stop(&mut self) {
        self.clock.pause();
        self.clock.seek(0.0);
        self.frames.cancel();
        self.updates.mark_discontinuity();
        self.display = DisplayState::default();
        info!("playback stopped");
    }

    /// Return to the start, keeping the playing/paused state.
    pub fn rewind(&mut self) {
        self.seek_to(0.0);
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, delta: f64) {
        let target = self.clock.position() + delta;
        self.seek_to(target);
    }

    pub fn seek_to(&mut self, time: f64) {
        self.clock.seek(time);
        if self.display.ended && !self.clock.has_ended() {
            self.display.ended = false;
        }
        self.updates.mark_discontinuity();
        debug!(position = self.clock.position(), "seek");
        // A seek is a time update in its own right, even while paused.
        self.refresh();
    }

    pub fn speed_up(&mut self) {
        let speed = self.clock.speed() * SPEED_STEP;
        self.clock.set_speed(speed);
    }

    pub fn speed_down(&mut self) {
        let speed = self.clock.speed() / SPEED_STEP;
        self.clock.set_speed(speed);
    }

    /// Run one driver turn.
    ///
    /// Fires the pending frame (tick) or a due time update (event), and
    /// detects the end of playback. Returns true when the resolver ran or
    /// the display otherwise changed.
    pub fn pump(&mut self) -> bool {
        if self.display.playing && self.clock.has_ended() {
            self.finish();
            return true;
        }

        match self.strategy {
            RefreshStrategy::Tick { .. } => {
                if self.frames.take().is_none() {
                    return false;
                }
                self.refresh();
                if self.display.playing {
                    self.frames.request();
                }
                true
            }
            RefreshStrategy::Event { .. } => {
                if !self.display.playing {
                    return false;
                }
                match self.updates.poll(self.clock.position()) {
                    Some(time) => {
                        self.refresh_at(time);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Resolve at the clock's current position and apply the result.
    pub fn refresh(&mut self) {
        let time = self.clock.position();
        self.refresh_at(time);
    }

    fn refresh_at(&mut self, time: f64) {
        self.invocations += 1;
        match self.resolver.resolve(time, &self.track) {
            Ok(line) => {
                if line != self.display.line {
                    debug!(time, ?line, "active line changed");
                }
                self.display.line = line;
                self.display.progress =
                    line.map_or(0.0, |index| line_progress(time, &self.track, index));
            }
            Err(err) => {
                warn!(time, error = %err, "resolver failed; keeping current line");
            }
        }
    }

    /// Playback reached the end: hold the last line fully highlighted.
    fn finish(&mut self) {
        self.clock.pause();
        self.frames.cancel();
        self.display.playing = false;
        self.display.ended = true;
        self.display.line = self.track.len().checked_sub(1);
        self.display.progress = if self.display.line.is_some() { 1.0 } else { 0.0 };
        info!("playback ended");
    }
}
