//! Render-facing snapshot of a session
//!
//! The render collaborator consumes a stable copy of the state after
//! every mutation rather than reading the live session. Callers keep one
//! snapshot and refresh it in place with `GameSession::snapshot_into`.

use crate::core::{Shape, Tetromino};
use crate::types::{Cell, LineClear, Phase, PieceKind, Rgb, BOARD_COLS, BOARD_ROWS};

/// The active piece as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
    pub color: Rgb,
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(piece: &Tetromino) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            row: piece.row,
            col: piece.col,
            color: piece.color,
        }
    }
}

impl ActiveSnapshot {
    /// Board coordinates of the piece's filled cells. Rows may be
    /// negative; the renderer clips those.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.cells().map(|(r, c)| (self.row + r, self.col + c))
    }
}

/// Everything the render, score-display, and game-over collaborators need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub phase: Phase,
    pub last_clear: Option<LineClear>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: ActiveSnapshot {
                kind: PieceKind::O,
                shape: Shape::canonical(PieceKind::O),
                row: 0,
                col: 0,
                color: Rgb::default(),
            },
            score: 0,
            phase: Phase::Running,
            last_clear: None,
        }
    }
}
