//! Game state module - owns the board and drives the active piece
//!
//! The active piece lives *in* the grid: every displacement erases its filled cells,
//! moves the anchor, and stamps the cells back with the piece color. When it can no
//! longer fall, the next tick simply leaves the stamp behind as settled cells and
//! spawns the next piece.
//!
//! Every public mutator is a no-op once `running` is false.

use log::{debug, info};

use crate::board::Board;
use crate::catalog::{random_color, PieceCatalog};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, EMPTY, ROW_CLEAR_SCORE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    catalog: PieceCatalog,
    rng: SimpleRng,
    seed: u32,
    active: Piece,
    /// Top-left anchor of the active piece's bounding box
    active_x: usize,
    active_y: usize,
    next: Piece,
    /// Whether the active piece's filled cells are currently written into `board`
    stamped: bool,
    score: u32,
    running: bool,
}

impl GameState {
    /// Create a new game on an empty `width x height` board
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        Self::with_board(Board::new(width, height), seed)
    }

    /// Create a new game over an existing board.
    ///
    /// The first active piece is placed at the spawn anchor but not stamped, and the
    /// board is not scanned for full rows until the first spawn.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let catalog = PieceCatalog::new();
        let mut rng = SimpleRng::new(seed);
        let active = draw_piece(&catalog, &mut rng);
        let next = draw_piece(&catalog, &mut rng);

        let mut state = Self {
            board,
            catalog,
            rng,
            seed,
            active,
            active_x: 0,
            active_y: 0,
            next,
            stamped: false,
            score: 0,
            running: true,
        };
        state.active_x = state.spawn_x();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn active_x(&self) -> usize {
        self.active_x
    }

    pub fn active_y(&self) -> usize {
        self.active_y
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn is_stamped(&self) -> bool {
        self.stamped
    }

    /// Replace the active piece at an explicit anchor (scripted setups).
    ///
    /// The old footprint is erased if it was stamped; the new piece starts unstamped.
    pub fn place_active(&mut self, piece: Piece, x: usize, y: usize) {
        assert!(
            x + piece.width() <= self.board.width() && y + piece.height() <= self.board.height(),
            "piece {}x{} at ({}, {}) does not fit the board",
            piece.width(),
            piece.height(),
            x,
            y
        );
        self.erase_active();
        self.active = piece;
        self.active_x = x;
        self.active_y = y;
    }

    /// Replace the look-ahead piece (scripted setups)
    pub fn set_next(&mut self, piece: Piece) {
        self.next = piece;
    }

    /// Spawn anchor column, `width / 2` unless the piece would hang off the right edge
    fn spawn_x(&self) -> usize {
        let max_x = self.board.width().saturating_sub(self.active.width());
        (self.board.width() / 2).min(max_x)
    }

    /// Promote the next piece, draw a new look-ahead, then clear full rows.
    ///
    /// Rows are scanned once from top to bottom and each full row is cleared as it is
    /// found; indices are not revisited after a clear.
    pub fn spawn_next(&mut self) {
        if !self.running {
            return;
        }

        let fresh = draw_piece(&self.catalog, &mut self.rng);
        self.active = std::mem::replace(&mut self.next, fresh);
        self.stamped = false;
        self.active_x = self.spawn_x();
        self.active_y = 0;

        debug!(
            "spawn {:?} color {} at ({}, {}), next {:?}",
            self.active.kind(),
            self.active.color(),
            self.active_x,
            self.active_y,
            self.next.kind()
        );

        for y in 0..self.board.height() {
            if self.board.is_row_full(y) {
                self.clear_row(y);
            }
        }
    }

    /// Score a full row and shift everything above it down by one.
    ///
    /// Row 0 is not reset, so it ends up duplicated into row 1.
    pub fn clear_row(&mut self, row: usize) {
        if !self.running {
            return;
        }
        self.score += ROW_CLEAR_SCORE;
        self.board.shift_down_onto(row);
        info!("cleared row {}, score {}", row, self.score);
    }

    /// How many rows the active piece can fall before hitting a settled cell or the floor.
    ///
    /// For every mask column with a filled cell, walk down from the lowest filled cell
    /// until the next board cell is occupied or past the floor; the result is the
    /// smallest such run. The bounding box's gap to the floor caps the result.
    pub fn max_down(&self) -> usize {
        let piece = &self.active;
        let height = self.board.height();
        let mut max_down = height.saturating_sub(self.active_y + piece.height());

        for col in 0..piece.width() {
            let Some(bottom) = piece.column_bottom(col) else {
                continue;
            };

            let x = self.active_x + col;
            let mut distance = 0;
            loop {
                let y = self.active_y + bottom + distance + 1;
                if y >= height || self.board.is_occupied(x, y) {
                    break;
                }
                distance += 1;
            }

            max_down = max_down.min(distance);
        }

        max_down
    }

    /// Advance gravity by one step.
    ///
    /// A piece still sitting on the top row without room to fall its own height ends
    /// the game. A piece that cannot fall at all settles and the next piece spawns.
    /// Otherwise the piece moves down one row.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let max_down = self.max_down();

        if self.active_y == 0 && max_down < self.active.height() {
            self.running = false;
            info!("game over, final score {}", self.score);
            return;
        }

        if max_down == 0 {
            self.spawn_next();
            return;
        }

        self.displace(0, 1);
    }

    /// Drop the active piece as far as it can fall. Spawning waits for the next tick.
    pub fn hard_drop(&mut self) {
        if !self.running {
            return;
        }
        let distance = self.max_down();
        self.displace(0, distance as isize);
    }

    /// Move the active piece down one row if it can fall
    pub fn soft_drop(&mut self) {
        if !self.running {
            return;
        }
        if self.max_down() > 0 {
            self.displace(0, 1);
        }
    }

    pub fn move_left(&mut self) {
        self.displace(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.displace(1, 0);
    }

    /// Apply a driver action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Move the active piece by (`dx`, `dy`), positive `dy` toward the floor.
    ///
    /// The footprint is erased first so the checks below see the board without it.
    /// The vertical part applies when the box stays inside the rows. The horizontal part
    /// applies when the box stays inside the columns and the one cell just past the
    /// leading edge, on the piece's top row, is empty. That edge check does not look at
    /// lower rows, so masks with overhangs can slide into settled cells. The piece is
    /// always stamped back, moved or not.
    pub fn displace(&mut self, dx: isize, dy: isize) {
        if !self.running {
            return;
        }

        self.erase_active();

        let piece_w = self.active.width() as isize;
        let piece_h = self.active.height() as isize;
        let board_w = self.board.width() as isize;
        let board_h = self.board.height() as isize;

        let new_y = self.active_y as isize + dy;
        if new_y >= 0 && new_y + piece_h <= board_h {
            self.active_y = new_y as usize;
        }

        let new_x = self.active_x as isize + dx;
        if new_x >= 0 && new_x + piece_w <= board_w && !self.leading_edge_blocked(dx) {
            self.active_x = new_x as usize;
        }

        self.stamp_active();
    }

    /// Occupancy of the cell just beyond the piece in the direction of `dx`, on its top row.
    /// Only called once the move is known to stay on the board.
    fn leading_edge_blocked(&self, dx: isize) -> bool {
        let y = self.active_y;
        if dx > 0 {
            self.board.is_occupied(self.active_x + self.active.width(), y)
        } else if dx < 0 {
            self.board.is_occupied(self.active_x - 1, y)
        } else {
            false
        }
    }

    fn erase_active(&mut self) {
        if !self.stamped {
            return;
        }
        for (col, row) in self.active.filled_cells() {
            self.board
                .set(self.active_x + col, self.active_y + row, EMPTY);
        }
        self.stamped = false;
    }

    /// Write the filled mask cells with the piece color; empty mask cells keep their value
    fn stamp_active(&mut self) {
        let color = self.active.color();
        for (col, row) in self.active.filled_cells() {
            self.board
                .set(self.active_x + col, self.active_y + row, color);
        }
        self.stamped = true;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot {
            piece: self.active.clone(),
            x: self.active_x,
            y: self.active_y,
        });
        out.next = Some(self.next.clone());
        out.score = self.score;
        out.running = self.running;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Shape draw followed by an independent color draw
fn draw_piece(catalog: &PieceCatalog, rng: &mut SimpleRng) -> Piece {
    let mut piece = catalog.random_piece(rng);
    piece.set_color(random_color(rng));
    piece
}
