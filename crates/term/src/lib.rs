//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: [`GameView`] lays a snapshot out into a
//! framebuffer of styled cells, and [`TerminalRenderer`] flushes framebuffers to the
//! terminal, writing only what changed since the previous frame.
//!
//! The view never mutates game state; it only reads [`core::GameSnapshot`]s.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{color_style, GameView, PanelLayout, Viewport};
pub use renderer::{changed_runs, encode_frame, TerminalRenderer};
