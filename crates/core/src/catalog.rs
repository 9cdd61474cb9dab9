//! Catalog module - the seven canonical tetromino masks
//!
//! Shapes come in one fixed orientation each. Draws hand out clones, so gameplay
//! never touches the canonical instances.

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::{ShapeKind, COLOR_COUNT};

/// Canonical masks as (kind, width, height, row-major mask)
const SHAPES: [(ShapeKind, usize, usize, &str); 7] = [
    (ShapeKind::I, 1, 4, "1111"),
    (ShapeKind::J, 2, 3, "010111"),
    (ShapeKind::L, 2, 3, "101011"),
    (ShapeKind::O, 2, 2, "1111"),
    (ShapeKind::Z, 3, 2, "110011"),
    (ShapeKind::T, 3, 2, "010111"),
    (ShapeKind::S, 3, 2, "011110"),
];

/// Immutable set of the seven canonical pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    shapes: [Piece; 7],
}

impl PieceCatalog {
    pub fn new() -> Self {
        Self {
            shapes: SHAPES.map(|(kind, w, h, mask)| Piece::from_mask(kind, w, h, mask)),
        }
    }

    /// Canonical piece for a shape
    pub fn get(&self, kind: ShapeKind) -> &Piece {
        &self.shapes[kind.index()]
    }

    pub fn shapes(&self) -> &[Piece; 7] {
        &self.shapes
    }

    /// Uniform draw over the seven shapes. Returns a copy with the default color.
    pub fn random_piece(&self, rng: &mut SimpleRng) -> Piece {
        let idx = rng.next_range(self.shapes.len() as u32) as usize;
        self.shapes[idx].clone()
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform color draw over `1..=COLOR_COUNT`, independent of the shape
pub fn random_color(rng: &mut SimpleRng) -> u8 {
    rng.next_range(COLOR_COUNT as u32) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kind_index() {
        let catalog = PieceCatalog::new();
        for kind in ShapeKind::ALL {
            assert_eq!(catalog.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        let catalog = PieceCatalog::new();
        for piece in catalog.shapes() {
            assert_eq!(piece.filled_cells().count(), 4, "{:?}", piece.kind());
        }
    }

    #[test]
    fn test_random_piece_does_not_alias_catalog() {
        let catalog = PieceCatalog::new();
        let mut rng = SimpleRng::new(3);

        let mut drawn = catalog.random_piece(&mut rng);
        drawn.set_color(6);

        assert_eq!(catalog.get(drawn.kind()).color(), 1);
        assert_eq!(catalog, PieceCatalog::new());
    }

    #[test]
    fn test_random_color_range() {
        let mut rng = SimpleRng::new(11);
        for _ in 0..1_000 {
            let c = random_color(&mut rng);
            assert!((1..=COLOR_COUNT).contains(&c));
        }
    }
}
