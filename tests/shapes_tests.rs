//! Piece catalog and placement checks

use std::collections::HashSet;

use tick_tetris::core::shapes::{extent, rotate_ccw};
use tick_tetris::core::{can_place, cells, rotation_count, Board, PieceCursor};
use tick_tetris::types::{PieceKind, SPAWN_X, SPAWN_Y};

#[test]
fn test_rotation_counts() {
    assert_eq!(rotation_count(PieceKind::O), 1);
    assert_eq!(rotation_count(PieceKind::I), 2);
    assert_eq!(rotation_count(PieceKind::S), 2);
    assert_eq!(rotation_count(PieceKind::Z), 2);
    assert_eq!(rotation_count(PieceKind::J), 4);
    assert_eq!(rotation_count(PieceKind::L), 4);
    assert_eq!(rotation_count(PieceKind::T), 4);
}

#[test]
fn test_every_orientation_is_a_connected_tetromino() {
    for kind in PieceKind::ALL {
        for rot in 0..rotation_count(kind) {
            let shape = cells(kind, rot);
            let set: HashSet<_> = shape.iter().copied().collect();
            assert_eq!(set.len(), 4, "{:?} rot {} has duplicate cells", kind, rot);

            // Each cell touches at least one other orthogonally.
            for &(x, y) in &shape {
                let touches = [(1, 0), (-1, 0), (0, 1), (0, -1)]
                    .iter()
                    .any(|&(dx, dy)| set.contains(&(x + dx, y + dy)));
                assert!(touches, "{:?} rot {} cell ({}, {}) is detached", kind, rot, x, y);
            }
        }
    }
}

#[test]
fn test_ccw_cycles_back_to_start() {
    for kind in PieceKind::ALL {
        let count = rotation_count(kind);
        let mut rot = 0;
        for _ in 0..count {
            rot = rotate_ccw(kind, rot);
        }
        assert_eq!(rot, 0, "{:?}", kind);
        assert_eq!(cells(kind, count), cells(kind, 0));
    }
}

#[test]
fn test_every_piece_fits_at_spawn_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rot in 0..rotation_count(kind) {
            assert!(can_place(&board, kind, rot, SPAWN_X, SPAWN_Y), "{:?} rot {}", kind, rot);
            let (_, min_dy, _, _) = extent(&cells(kind, rot));
            assert!(SPAWN_Y + min_dy >= 0);
        }
    }
}

#[test]
fn test_can_place_respects_walls_and_stack() {
    let mut board = Board::new();
    // Horizontal I spans x-1..=x+2.
    assert!(can_place(&board, PieceKind::I, 0, 1, 5));
    assert!(!can_place(&board, PieceKind::I, 0, 0, 5));
    assert!(can_place(&board, PieceKind::I, 0, 7, 5));
    assert!(!can_place(&board, PieceKind::I, 0, 8, 5));

    // Vertical I spans y-1..=y+2.
    assert!(can_place(&board, PieceKind::I, 1, 0, 17));
    assert!(!can_place(&board, PieceKind::I, 1, 0, 18));

    board.set_cell(4, 10, PieceKind::S);
    assert!(!can_place(&board, PieceKind::O, 0, 4, 9));
    assert!(!can_place(&board, PieceKind::O, 0, 3, 10));
    assert!(can_place(&board, PieceKind::O, 0, 5, 10));
}

#[test]
fn test_cursor_moves_return_new_cursors() {
    let cursor = PieceCursor::new(PieceKind::T, 0, 4, 5);

    let left = cursor.shifted(-1);
    let down = cursor.dropped();
    let turned = cursor.rotated_ccw();

    assert_eq!((left.x, left.y), (3, 5));
    assert_eq!((down.x, down.y), (4, 6));
    assert_eq!(turned.rotation(), 3);
    assert_eq!((cursor.x, cursor.y, cursor.rotation()), (4, 5, 0));
}
