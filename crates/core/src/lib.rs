//! Core game logic - the falling-block simulation
//!
//! This crate contains the board, the piece catalog and the game state machine.
//! It has no dependencies on terminals, threads or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces and colors
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: the terminal front end is only one possible driver
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of color indices
//! - [`piece`]: a tetromino instance (bounding-box mask plus color)
//! - [`catalog`]: the seven canonical shapes and uniform random draws
//! - [`rng`]: small seedable generator
//! - [`game_state`]: spawn, movement, collision, gravity and row clearing
//! - [`snapshot`]: read-only copy of a game for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at `(width / 2, 0)` and never rotate
//! - Each tick moves the active piece down one row; a piece that cannot fall settles
//!   and the next piece spawns
//! - Full rows are cleared when a piece spawns, 10 points each
//! - The game ends when a piece on the top row cannot fall its own height
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//!
//! let mut game = GameState::new(10, 20, 12345);
//! game.move_left();
//! game.tick();
//! game.hard_drop();
//! game.tick();
//!
//! assert!(game.running());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use catalog::{random_color, PieceCatalog};
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
