//! Board tests

use blockfall::core::Board;
use blockfall::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, EMPTY};

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for y in 0..DEFAULT_BOARD_HEIGHT {
        for x in 0..DEFAULT_BOARD_WIDTH {
            assert_eq!(board.get(x, y), EMPTY, "cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(10, 20);

    board.set(5, 10, 6);
    assert_eq!(board.get(5, 10), 6);
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_occupied(4, 10));

    board.set(5, 10, EMPTY);
    assert!(!board.is_occupied(5, 10));
}

#[test]
#[should_panic]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20);
    board.get(10, 0);
}

#[test]
#[should_panic]
fn test_board_rejects_unknown_color() {
    let mut board = Board::new(4, 4);
    board.set(0, 0, 8);
}

#[test]
fn test_board_row_full_detection() {
    let mut board = Board::new(4, 8);
    for x in 0..3 {
        board.set(x, 7, 1);
    }
    assert!(!board.is_row_full(7));

    board.set(3, 7, 2);
    assert!(board.is_row_full(7));
    assert!(!board.is_row_full(6));
}

#[test]
fn test_board_shift_keeps_top_row() {
    let mut board = Board::new(3, 4);
    board.set(0, 0, 1);
    board.set(1, 1, 2);
    board.set(2, 2, 3);
    for x in 0..3 {
        board.set(x, 3, 4);
    }

    board.shift_down_onto(3);

    assert_eq!(
        board.to_rows(),
        vec![vec![1, 0, 0], vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 3]]
    );
}

#[test]
fn test_board_shift_onto_middle_row_leaves_lower_rows() {
    let mut board = Board::new(2, 4);
    board.set(0, 0, 1);
    board.set(0, 1, 2);
    board.set(1, 3, 5);

    board.shift_down_onto(1);

    assert_eq!(board.to_rows(), vec![vec![1, 0], vec![1, 0], vec![0, 0], vec![0, 5]]);
}

#[test]
fn test_board_from_cells_roundtrips_rows() {
    let cells = vec![0, 1, 2, 3, 4, 5];
    let board = Board::from_cells(3, 2, cells.clone());
    assert_eq!(board.cells(), cells.as_slice());
    assert_eq!(board.row(1), &[3, 4, 5]);
    assert_eq!(board.occupied_count(), 5);
}
