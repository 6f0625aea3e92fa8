//! Board tests - grid storage and line clearing

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);

    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(row, col), Some(None));
            assert!(!board.is_occupied(row, col));
        }
    }
}

#[test]
fn get_out_of_bounds_is_none() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_ROWS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_COLS as i8), None);
}

#[test]
fn set_out_of_bounds_is_rejected() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_ROWS as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_COLS as i8, Some(PieceKind::T)));

    // Nothing landed anywhere.
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn row_full_detection() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    for col in 0..BOARD_COLS as i8 {
        board.set(19, col, Some(PieceKind::I));
    }
    assert!(board.is_row_full(19));

    board.set(19, 3, None);
    assert!(!board.is_row_full(19));

    // Out-of-range row index is never "full".
    assert!(!board.is_row_full(BOARD_ROWS as usize));
}

#[test]
fn clearing_no_full_rows_is_a_no_op() {
    let mut board = Board::new();
    board.set(10, 4, Some(PieceKind::L));
    let before = board.to_rows();

    let cleared = board.clear_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(board.to_rows(), before);
}

#[test]
fn quadruple_clear_leaves_four_empty_top_rows() {
    let mut board = Board::new();
    for row in 16..20 {
        for col in 0..BOARD_COLS as i8 {
            board.set(row, col, Some(PieceKind::I));
        }
    }
    // Markers above the full block, in a known vertical order.
    board.set(14, 0, Some(PieceKind::L));
    board.set(15, 0, Some(PieceKind::J));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);

    // Exactly 4 empty rows at the top.
    for row in 0..4 {
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(row, col), Some(None));
        }
    }
    // Markers compacted to the bottom, original relative order intact.
    assert_eq!(board.get(18, 0), Some(Some(PieceKind::L)));
    assert_eq!(board.get(19, 0), Some(Some(PieceKind::J)));
}

#[test]
fn interleaved_full_rows_compact_correctly() {
    let mut board = Board::new();
    // Full rows at 15, 17, 19; markers at 16 and 18.
    for &row in &[15, 17, 19] {
        for col in 0..BOARD_COLS as i8 {
            board.set(row, col, Some(PieceKind::Z));
        }
    }
    board.set(16, 1, Some(PieceKind::S));
    board.set(18, 2, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[15, 17, 19]);

    assert_eq!(board.get(18, 1), Some(Some(PieceKind::S)));
    assert_eq!(board.get(19, 2), Some(Some(PieceKind::T)));
    // Everything above the two compacted survivor rows is empty.
    for row in 0..18usize {
        assert!(!board.is_row_full(row));
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(row as i8, col), Some(None), "({}, {})", row, col);
        }
    }
}

#[test]
fn clear_resets_every_cell() {
    let mut board = Board::new();
    for col in 0..BOARD_COLS as i8 {
        board.set(19, col, Some(PieceKind::O));
    }
    board.clear();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
