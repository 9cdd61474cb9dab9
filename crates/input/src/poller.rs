//! Input polling thread.
//!
//! The thread owns the terminal event source and forwards translated events over a
//! channel. The game loop is the only consumer and the only owner of the game
//! state, so input never touches the simulation directly.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, warn};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Message from the input thread to the game loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
    Resize(u16, u16),
    /// The event source failed; the channel closes right after this.
    Error(String),
}

/// Translate one terminal event. Key releases, repeats and unmapped keys are dropped.
pub fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(key).map(InputEvent::Action)
            }
        }
        Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

/// Start the input thread.
///
/// Each poll interval forwards at most one event. The thread exits after a quit key,
/// on an event-source error, or once the receiver is dropped.
pub fn spawn_input_thread(poll_interval: Duration) -> io::Result<mpsc::Receiver<InputEvent>> {
    let (tx, rx) = mpsc::channel::<InputEvent>();

    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            match event::poll(poll_interval) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!("input: poll failed: {}", e);
                    let _ = tx.send(InputEvent::Error(format!("input: poll failed: {}", e)));
                    return;
                }
            }

            let raw = match event::read() {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("input: read failed: {}", e);
                    let _ = tx.send(InputEvent::Error(format!("input: read failed: {}", e)));
                    return;
                }
            };

            let Some(input) = translate_event(raw) else {
                continue;
            };
            debug!("input: {:?}", input);

            let quit = input == InputEvent::Quit;
            if tx.send(input).is_err() || quit {
                return;
            }

            thread::sleep(poll_interval);
        })?;

    Ok(rx)
}
