use crate::piece::Piece;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, EMPTY};

/// Active piece with its board anchor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub piece: Piece,
    pub x: usize,
    pub y: usize,
}

/// Read-only view of a game for rendering.
///
/// `board` is row-major, `width * height` long, and already contains the active
/// piece once it has been stamped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<Piece>,
    pub score: u32,
    pub running: bool,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height);
        self.board[y * self.width + x]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            board: vec![EMPTY; DEFAULT_BOARD_WIDTH * DEFAULT_BOARD_HEIGHT],
            active: None,
            next: None,
            score: 0,
            running: true,
        }
    }
}
