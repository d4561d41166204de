//! Keyboard input handling for the player.
//!
//! Handles playback controls, seeking, speed and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::clock::PlaybackClock;
use crate::player::driver::Driver;
use crate::player::state::InputResult;
use crate::resolver::LineResolver;

/// Handle a keyboard event.
///
/// Updates the driver (and the help flag) and returns whether the player
/// should keep running.
pub fn handle_key_event<C: PlaybackClock, R: LineResolver>(
    key: KeyEvent,
    driver: &mut Driver<C, R>,
    show_help: &mut bool,
    seek_step: f64,
) -> InputResult {
    // Key release events are reported on some platforms; act on press only.
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if *show_help {
        *show_help = false;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        KeyCode::Char('?') => {
            *show_help = true;
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            driver.toggle();
            InputResult::Continue
        }
        KeyCode::Char('r') | KeyCode::Home => {
            driver.rewind();
            InputResult::Continue
        }
        KeyCode::Char('s') => {
            driver.stop();
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            driver.speed_up();
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            driver.speed_down();
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left | KeyCode::Char(',') | KeyCode::Char('<') => {
            driver.seek_by(-seek_step);
            InputResult::Continue
        }
        KeyCode::Right | KeyCode::Char('.') | KeyCode::Char('>') => {
            driver.seek_by(seek_step);
            InputResult::Continue
        }
        KeyCode::End => {
            if let Some(end) = driver.clock().duration() {
                driver.seek_to(end);
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
