//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and runs the
//! polling thread that hands them to the game loop as [`InputEvent`] messages.

pub mod map;
pub mod poller;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use poller::{spawn_input_thread, translate_event, InputEvent};
