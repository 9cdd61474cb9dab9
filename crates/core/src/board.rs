//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of color indices: `0` is empty, `1..=7` is a
//! settled (or stamped) cell of that color. Storage is one flat row-major vector.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom, so row 0
//! is the top of the well and gravity pulls toward larger y.
//!
//! Addressing a cell outside the grid is a logic fault and panics.

use crate::types::{COLOR_COUNT, EMPTY};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Create a board from row-major cell values
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        assert_eq!(cells.len(), width * height, "cell count does not match size");
        assert!(
            cells.iter().all(|&c| c <= COLOR_COUNT),
            "cell value above {}",
            COLOR_COUNT
        );
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} board",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Set cell at position (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        assert!(value <= COLOR_COUNT, "cell value {} above {}", value, COLOR_COUNT);
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Check if position is occupied
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != EMPTY
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> &[u8] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Shift every row above `y` down by one, overwriting row `y`.
    ///
    /// Row 0 keeps its contents, so after the shift rows 0 and 1 hold the same cells.
    pub fn shift_down_onto(&mut self, y: usize) {
        let _ = self.index(0, y);
        let width = self.width;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Convert to nested rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.width).map(|r| r.to_vec()).collect()
    }
}
