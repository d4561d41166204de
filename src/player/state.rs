//! Player state types
//!
//! `DisplayState` is everything the renderer needs from the driver;
//! `InputResult` carries control flow from input handlers to the main loop.

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Visual state owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    /// Highlighted line, `None` before the first line starts
    pub line: Option<usize>,
    /// Sung fraction of the highlighted line, in `[0, 1]`
    pub progress: f64,
    /// Whether playback is running
    pub playing: bool,
    /// Whether playback reached the end of the track
    pub ended: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            line: None,
            progress: 0.0,
            playing: false,
            ended: false,
        }
    }
}

impl DisplayState {
    /// Nothing highlighted and nothing playing: the "press play" screen.
    pub fn is_idle(&self) -> bool {
        self.line.is_none() && !self.playing
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        if self.ended {
            "Ended"
        } else if self.playing {
            "Playing"
        } else if self.line.is_none() {
            "Stopped"
        } else {
            "Paused"
        }
    }
}
