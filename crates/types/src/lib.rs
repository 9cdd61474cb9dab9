//! Shared types and constants.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! simulation core, the terminal layers and the binary alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9, left to right)
//! - **Height**: 20 rows by default (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (width / 2, 0)
//!
//! Both dimensions are configurable per game; these are only the defaults.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 5 | Gravity ticks (and frames) per second |
//! | `INPUT_POLL_MS` | 10 | Input thread poll interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ShapeKind, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Default simulation rate: one gravity tick per frame
pub const DEFAULT_FPS: u32 = 5;

/// Interval between input polls on the input thread
pub const INPUT_POLL_MS: u64 = 10;

/// Points awarded for every cleared row (no multi-line bonus)
pub const ROW_CLEAR_SCORE: u32 = 10;

/// Number of distinct piece colors; colors are `1..=COLOR_COUNT`, `0` is an empty cell
pub const COLOR_COUNT: u8 = 7;

/// Empty board cell
pub const EMPTY: u8 = 0;

/// Largest piece bounding box side
pub const MAX_PIECE_SIDE: usize = 4;

/// The seven tetromino shapes
///
/// Each shape is defined in a single fixed orientation:
/// - **I**: 1x4 vertical bar
/// - **J**: 2x3, foot to the left
/// - **L**: 2x3, foot to the right
/// - **O**: 2x2 square
/// - **Z**: 3x2
/// - **T**: 3x2, stem up
/// - **S**: 3x2 (mirror of Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    Z,
    T,
    S,
}

impl ShapeKind {
    /// All shapes, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::S,
    ];

    /// Position in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::J => 1,
            ShapeKind::L => 2,
            ShapeKind::O => 3,
            ShapeKind::Z => 4,
            ShapeKind::T => 5,
            ShapeKind::S => 6,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
        }
    }
}

/// Driver actions that mutate the game
///
/// Produced by the input layer, consumed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down without spawning
    SoftDrop,
    /// Drop piece as far as it can fall
    HardDrop,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_index_matches_catalog_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
