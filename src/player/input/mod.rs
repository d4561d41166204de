//! Input handling for the player.
//!
//! Dispatches terminal events to their handlers and returns control flow
//! signals to the main loop.

mod keyboard;

pub use keyboard::handle_key_event;

use crossterm::event::Event;

use crate::player::clock::PlaybackClock;
use crate::player::driver::Driver;
use crate::player::state::InputResult;
use crate::resolver::LineResolver;

/// Handle any input event, dispatching to the appropriate handler.
///
/// Resize needs no handling: the next draw picks up the new size.
pub fn handle_event<C: PlaybackClock, R: LineResolver>(
    event: Event,
    driver: &mut Driver<C, R>,
    show_help: &mut bool,
    seek_step: f64,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, driver, show_help, seek_step),
        _ => InputResult::Continue, // Ignore mouse, focus, paste, resize
    }
}
