//! Piece module - a tetromino instance as a bounding-box mask plus color
//!
//! Masks are stored inline (no heap), so cloning a piece is a plain value copy and
//! two live pieces never share a mask buffer.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, COLOR_COUNT, MAX_PIECE_SIDE};

/// Capacity of the inline mask storage
pub const MAX_MASK_CELLS: usize = MAX_PIECE_SIDE * MAX_PIECE_SIDE;

/// One tetromino shape instance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    width: usize,
    height: usize,
    /// Row-major mask, `true` = filled
    cells: ArrayVec<bool, MAX_MASK_CELLS>,
    color: u8,
}

impl Piece {
    /// Build a piece from a row-major `'1'`/`'0'` mask string.
    ///
    /// Any other character, or a string shorter than `width * height`, yields empty
    /// cells. The color starts at 1.
    ///
    /// # Panics
    ///
    /// If either side is zero or larger than [`MAX_PIECE_SIDE`].
    pub fn from_mask(kind: ShapeKind, width: usize, height: usize, mask: &str) -> Self {
        assert!(
            (1..=MAX_PIECE_SIDE).contains(&width) && (1..=MAX_PIECE_SIDE).contains(&height),
            "piece mask {}x{} outside 1..={} per side",
            width,
            height,
            MAX_PIECE_SIDE
        );

        let mut chars = mask.chars();
        let cells = (0..width * height)
            .map(|_| chars.next() == Some('1'))
            .collect();

        Self {
            kind,
            width,
            height,
            cells,
            color: 1,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    /// Copy of this piece painted with `color`
    pub fn with_color(&self, color: u8) -> Self {
        let mut piece = self.clone();
        piece.set_color(color);
        piece
    }

    pub fn set_color(&mut self, color: u8) {
        assert!(
            (1..=COLOR_COUNT).contains(&color),
            "piece color {} outside 1..={}",
            color,
            COLOR_COUNT
        );
        self.color = color;
    }

    /// Whether the mask cell at (`col`, `row`) is filled
    #[inline]
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        assert!(col < self.width && row < self.height);
        self.cells[row * self.width + col]
    }

    /// Lowest (largest row index) filled cell of a mask column
    pub fn column_bottom(&self, col: usize) -> Option<usize> {
        (0..self.height).rev().find(|&row| self.is_filled(col, row))
    }

    /// Filled cells as (col, row) offsets from the top-left of the bounding box
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(i, _)| (i % self.width, i / self.width))
    }

    /// Mask rows as `'1'`/`'0'` strings, top to bottom
    pub fn mask_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&c| if c { '1' } else { '0' }).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mask_row_major() {
        let j = Piece::from_mask(ShapeKind::J, 2, 3, "010111");
        assert_eq!(j.mask_rows(), vec!["01", "01", "11"]);
        assert!(!j.is_filled(0, 0));
        assert!(j.is_filled(1, 0));
        assert!(j.is_filled(0, 2));
        assert_eq!(j.color(), 1);
    }

    #[test]
    fn test_malformed_mask_defaults_to_empty() {
        let p = Piece::from_mask(ShapeKind::O, 2, 2, "1x?1");
        assert_eq!(p.mask_rows(), vec!["10", "01"]);

        let short = Piece::from_mask(ShapeKind::O, 2, 2, "11");
        assert_eq!(short.mask_rows(), vec!["11", "00"]);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Piece::from_mask(ShapeKind::I, 0, 4, "");
    }

    #[test]
    fn test_column_bottom() {
        let z = Piece::from_mask(ShapeKind::Z, 3, 2, "110011");
        assert_eq!(z.column_bottom(0), Some(0));
        assert_eq!(z.column_bottom(1), Some(1));
        assert_eq!(z.column_bottom(2), Some(1));

        let hollow = Piece::from_mask(ShapeKind::O, 2, 2, "1000");
        assert_eq!(hollow.column_bottom(1), None);
    }

    #[test]
    fn test_filled_cells() {
        let t = Piece::from_mask(ShapeKind::T, 3, 2, "010111");
        let cells: Vec<_> = t.filled_cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_with_color_is_independent_copy() {
        let base = Piece::from_mask(ShapeKind::S, 3, 2, "011110");
        let painted = base.with_color(5);
        assert_eq!(painted.color(), 5);
        assert_eq!(base.color(), 1);
        assert_ne!(base, painted);
        assert_eq!(base, painted.with_color(1));
    }

    #[test]
    #[should_panic]
    fn test_color_out_of_range_panics() {
        let mut p = Piece::from_mask(ShapeKind::O, 2, 2, "1111");
        p.set_color(8);
    }
}
