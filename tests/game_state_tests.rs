//! Game rule tests: spawn, gravity, collisions, row clears and game over.

use blockfall::core::{Board, GameState, Piece, PieceCatalog, SimpleRng};
use blockfall::types::{GameAction, ShapeKind, EMPTY};

fn piece(kind: ShapeKind, color: u8) -> Piece {
    PieceCatalog::new().get(kind).with_color(color)
}

/// Board with the top `clear_rows` rows empty and the rest filled at random
fn random_board(width: usize, height: usize, clear_rows: usize, rng: &mut SimpleRng) -> Board {
    let mut board = Board::new(width, height);
    for y in clear_rows..height {
        for x in 0..width {
            if rng.next_range(5) < 2 {
                board.set(x, y, rng.next_range(7) as u8 + 1);
            }
        }
    }
    board
}

#[test]
fn spawn_keeps_piece_inside_empty_board() {
    for seed in 1..200 {
        for width in [4usize, 5, 10, 13] {
            let mut game = GameState::new(width, 20, seed);
            for _ in 0..3 {
                game.spawn_next();
                let p = game.active();
                assert!(game.active_x() + p.width() <= width, "seed {} width {}", seed, width);
                assert!(game.active_y() + p.height() <= 20);
                assert_eq!(game.active_y(), 0);
            }
        }
    }
}

#[test]
fn spawn_promotes_next_piece() {
    let mut game = GameState::new(10, 20, 7);
    let next = game.next().clone();
    game.spawn_next();
    assert_eq!(game.active(), &next);
    assert!(!game.is_stamped());
}

#[test]
fn hard_drop_lands_without_overlap() {
    let mut rng = SimpleRng::new(99);
    let catalog = PieceCatalog::new();

    for round in 0..300 {
        let board = random_board(10, 20, 6, &mut rng);
        let original = board.clone();
        let mut game = GameState::with_board(board, round + 1);

        let p = catalog.random_piece(&mut rng).with_color(7);
        let x = rng.next_range((10 - p.width() + 1) as u32) as usize;
        game.place_active(p.clone(), x, 0);
        game.hard_drop();

        assert_eq!(game.max_down(), 0, "round {}", round);
        let y = game.active_y();
        for (col, row) in p.filled_cells() {
            assert_eq!(
                original.get(x + col, y + row),
                EMPTY,
                "round {}: {:?} at ({}, {}) overlaps settled cell",
                round,
                p.kind(),
                x,
                y
            );
            assert_eq!(game.board().get(x + col, y + row), 7);
        }
    }
}

#[test]
fn displace_zero_leaves_stamped_board_unchanged() {
    let mut game = GameState::new(10, 20, 3);
    game.tick();
    game.move_left();
    assert!(game.is_stamped());

    let before = game.board().clone();
    let (x, y) = (game.active_x(), game.active_y());
    game.displace(0, 0);

    assert_eq!(game.board(), &before);
    assert_eq!((game.active_x(), game.active_y()), (x, y));
}

#[test]
fn spawn_scores_ten_per_full_row() {
    let mut rng = SimpleRng::new(5);
    for round in 0..100u32 {
        let mut board = Board::new(6, 12);
        let mut full = 0;
        for y in 4..12 {
            let fill = rng.next_range(2) == 0;
            for x in 0..6 {
                if fill || x != y % 6 {
                    board.set(x, y, 2);
                }
            }
            if fill {
                full += 1;
            }
        }

        let mut game = GameState::with_board(board, round + 1);
        game.spawn_next();
        assert_eq!(game.score(), 10 * full, "round {}", round);
    }
}

#[test]
fn nothing_changes_after_game_over() {
    // Rows 2.. are blocked except column 0, so no piece can fall its own height.
    let mut board = Board::new(10, 20);
    for y in 2..20 {
        for x in 1..10 {
            board.set(x, y, 1);
        }
    }
    let mut game = GameState::with_board(board, 11);
    game.tick();
    assert!(!game.running());

    let board = game.board().clone();
    let (active, next) = (game.active().clone(), game.next().clone());
    let (x, y, score) = (game.active_x(), game.active_y(), game.score());

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
    ] {
        game.apply_action(action);
    }
    game.tick();
    game.spawn_next();
    game.clear_row(19);
    game.displace(-1, 1);

    assert!(!game.running());
    assert_eq!(game.board(), &board);
    assert_eq!(game.active(), &active);
    assert_eq!(game.next(), &next);
    assert_eq!((game.active_x(), game.active_y(), game.score()), (x, y, score));
}

#[test]
fn o_piece_settles_on_the_floor() {
    let mut game = GameState::new(10, 20, 1);
    game.place_active(piece(ShapeKind::O, 3), 4, 0);

    for _ in 0..18 {
        game.tick();
    }

    assert_eq!(game.active_y(), 18);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(game.board().get(x, y), 3);
    }
    assert_eq!(game.board().occupied_count(), 4);

    // One more tick leaves it settled and spawns the next piece.
    let next = game.next().clone();
    game.tick();
    assert_eq!(game.active(), &next);
    assert_eq!(game.board().occupied_count(), 4);
}

#[test]
fn i_piece_completes_bottom_row() {
    let mut board = Board::new(10, 20);
    for x in 1..10 {
        board.set(x, 19, 2);
    }
    board.set(5, 18, 4);
    board.set(9, 0, 1);

    let mut game = GameState::with_board(board, 42);
    game.place_active(piece(ShapeKind::I, 5), 0, 0);
    game.hard_drop();
    assert_eq!(game.active_y(), 16);
    assert!(game.board().is_row_full(19));

    let old_row_18 = game.board().row(18).to_vec();
    let old_row_0 = game.board().row(0).to_vec();

    game.tick();

    assert_eq!(game.score(), 10);
    assert_eq!(game.board().row(19), old_row_18.as_slice());
    assert_eq!(game.board().row(19)[0], 5);
    assert_eq!(game.board().row(19)[5], 4);
    // The top row is not reset, so it is duplicated into row 1.
    assert_eq!(game.board().row(0), old_row_0.as_slice());
    assert_eq!(game.board().row(1), old_row_0.as_slice());
}

#[test]
fn moves_stop_at_walls() {
    let mut game = GameState::new(10, 20, 8);
    game.place_active(piece(ShapeKind::T, 2), 4, 0);

    for _ in 0..10 {
        game.move_left();
    }
    assert_eq!(game.active_x(), 0);

    for _ in 0..10 {
        game.move_right();
    }
    assert_eq!(game.active_x(), 7);
    assert_eq!(game.board().occupied_count(), 4);
}

#[test]
fn soft_drop_moves_one_row() {
    let mut game = GameState::new(10, 20, 8);
    game.place_active(piece(ShapeKind::O, 1), 4, 0);

    game.apply_action(GameAction::SoftDrop);
    assert_eq!(game.active_y(), 1);

    game.hard_drop();
    assert_eq!(game.active_y(), 18);
    game.soft_drop();
    assert_eq!(game.active_y(), 18);
    assert!(game.running());
}

#[test]
fn same_seed_same_game() {
    let mut a = GameState::new(10, 20, 1234);
    let mut b = GameState::new(10, 20, 1234);

    for step in 0..200 {
        let action = match step % 4 {
            0 => GameAction::MoveLeft,
            1 => GameAction::MoveRight,
            2 => GameAction::SoftDrop,
            _ => GameAction::HardDrop,
        };
        a.apply_action(action);
        b.apply_action(action);
        a.tick();
        b.tick();
    }

    assert_eq!(a.seed(), 1234);
    assert_eq!(a.snapshot(), b.snapshot());
}
