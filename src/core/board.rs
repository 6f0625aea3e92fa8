//! Board module - the 20x10 grid of locked cells
//!
//! Uses a flat row-major array for cache locality and zero allocation.
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge.
//! The active piece lives outside the board (its row offset may be
//! negative); only locked cells are stored here.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS * BOARD_COLS) as usize;

/// The playfield - 20 rows x 10 columns of locked cells
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (row, col), or None when out of bounds
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Cell at (row, col); None when out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false when out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) is inside the board and holds a locked cell
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        let start = row * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every filled row at once, compacting the remaining rows
    /// downward and leaving fresh empty rows at the top.
    ///
    /// Returns the indices of the removed rows, top to bottom. A single
    /// lock can complete at most 4 rows, so the list is bounded.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let cols = BOARD_COLS as usize;
        let mut write_row = BOARD_ROWS as usize;

        // Two-pointer pass from the bottom: full rows are skipped, every
        // other row slides down to the write cursor.
        for read_row in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * cols;
                    let dst = write_row * cols;
                    self.cells.copy_within(src..src + cols, dst);
                }
            }
        }

        // One fresh empty row at the top per removed row.
        for cell in &mut self.cells[..write_row * cols] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Write a piece kind into a single cell. The caller guarantees the
    /// position is in bounds and empty (lock positions are validated by
    /// the collision predicate before any write).
    pub fn fill(&mut self, row: i8, col: i8, kind: PieceKind) {
        self.set(row, col, Some(kind));
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from a 2D row list (test setup helper)
    pub fn from_rows(rows_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows_2d.len(), BOARD_ROWS as usize);
        assert!(rows_2d.iter().all(|r| r.len() == BOARD_COLS as usize));

        let mut flat = [None; BOARD_SIZE];
        for (row, cols) in rows_2d.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                flat[row * BOARD_COLS as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Copy out as a 2D row list (test inspection helper)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let cols = BOARD_COLS as usize;
        (0..BOARD_ROWS as usize)
            .map(|row| {
                let start = row * cols;
                self.cells[start..start + cols].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
