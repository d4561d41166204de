//! Terminal karaoke player
//!
//! Sets up the terminal, runs the event loop and restores the terminal on
//! every exit path.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::lyrics::LyricTrack;
use crate::player::clock::{PlaybackClock, WallClock};
use crate::player::driver::Driver;
use crate::player::input::handle_event;
use crate::player::refresh::RefreshStrategy;
use crate::player::render::{draw, PlayerView};
use crate::player::state::InputResult;
use crate::tui::Theme;

/// Poll timeout while nothing is playing.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Options for a player session.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Title shown when the track carries none
    pub title: String,
    pub strategy: RefreshStrategy,
    pub speed: f64,
    /// Session length; defaults to the last timestamp plus `tail_secs`
    pub duration: Option<f64>,
    pub tail_secs: f64,
    pub seek_step: f64,
    pub context_lines: usize,
    pub theme: Theme,
    /// Start playing immediately instead of waiting for space
    pub autoplay: bool,
}

/// How a player session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Playback reached the end before the user quit
    Finished,
    /// The user quit before the end
    Quit,
}

/// Session length for `track` under `options`.
pub fn session_duration(track: &LyricTrack, options: &PlayerOptions) -> f64 {
    options
        .duration
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or_else(|| track.last_time() + options.tail_secs.max(0.0))
}

/// Restores the terminal when dropped, including on early returns and panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut Stdout) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        let _ = disable_raw_mode();
    }
}

/// Play `track` in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_track(track: LyricTrack, options: PlayerOptions) -> Result<PlaybackOutcome> {
    let duration = session_duration(&track, &options);
    let mut clock = WallClock::new(Some(duration));
    clock.set_speed(options.speed);

    let markers = track.starts();
    let title = track.title_or(&options.title).to_string();
    let artist = track.meta.artist.clone();

    let mut driver = Driver::local(track, clock, options.strategy);
    if options.autoplay {
        driver.play();
    }

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    terminal.hide_cursor()?;

    tracing::info!(
        title = %title,
        duration,
        strategy = %options.strategy.mode(),
        "player started"
    );

    let mut show_help = false;
    let outcome = loop {
        let display = driver.display();
        let view = PlayerView {
            title: &title,
            artist: artist.as_deref(),
            track: driver.track(),
            markers: &markers,
            display,
            position: driver.clock().position(),
            duration,
            speed: driver.clock().speed(),
            mode: driver.strategy().mode(),
            context_lines: options.context_lines,
            show_help,
            theme: &options.theme,
        };
        terminal.draw(|frame| draw(frame, &view))?;

        let timeout = if display.playing {
            driver.strategy().poll_interval()
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            let result = handle_event(event::read()?, &mut driver, &mut show_help, options.seek_step);
            if result == InputResult::Quit {
                break if driver.display().ended {
                    PlaybackOutcome::Finished
                } else {
                    PlaybackOutcome::Quit
                };
            }
        }

        driver.pump();
    };

    // Cancel any pending frame before the terminal is handed back.
    driver.stop();
    tracing::info!(?outcome, "player exited");
    Ok(outcome)
}
