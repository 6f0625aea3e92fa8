//! Pieces module - canonical shape matrices and rotation
//!
//! Every kind has a square 0/1 bitmap inside an NxN bounding box (N = 2
//! for O, 3 for L/J/S/Z/T, 4 for I). Rotation is a plain clockwise
//! quarter turn of the matrix; a rotation that would collide is rejected
//! by the session, with no kick/offset search.

use crate::types::PieceKind;

/// Largest bounding box among the seven kinds (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// An owned shape matrix.
///
/// `Copy` on purpose: each active piece carries an independent copy of
/// its canonical matrix, so rotating one piece can never alias into the
/// canonical definitions or another piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// The canonical (spawn) matrix for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::O => Self::from_bits(&[
                &[1, 1],
                &[1, 1],
            ]),
            PieceKind::L => Self::from_bits(&[
                &[0, 0, 1],
                &[1, 1, 1],
                &[0, 0, 0],
            ]),
            PieceKind::J => Self::from_bits(&[
                &[0, 1, 1],
                &[0, 1, 0],
                &[0, 1, 0],
            ]),
            PieceKind::S => Self::from_bits(&[
                &[0, 1, 1],
                &[1, 1, 0],
                &[0, 0, 0],
            ]),
            PieceKind::Z => Self::from_bits(&[
                &[1, 1, 0],
                &[0, 1, 1],
                &[0, 0, 0],
            ]),
            PieceKind::T => Self::from_bits(&[
                &[1, 1, 1],
                &[0, 1, 0],
                &[0, 0, 0],
            ]),
            PieceKind::I => Self::from_bits(&[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
        }
    }

    fn from_bits(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        debug_assert!(size <= MAX_SHAPE_SIZE);
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), size);
            for (c, &bit) in row.iter().enumerate() {
                grid[r][c] = bit != 0;
            }
        }
        Self { size, grid }
    }

    /// Bounding box edge length (N)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix cell at (row, col) is filled
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.grid[row][col]
    }

    /// Clockwise quarter turn: new[i][j] = old[N-1-j][i]
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in grid.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.grid[n - 1 - j][i];
            }
        }
        Self { size: n, grid }
    }

    /// Iterate the (row, col) offsets of every filled matrix cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |r| {
            (0..n).filter_map(move |c| self.grid[r][c].then_some((r as i8, c as i8)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_filled_cells() {
        for kind in PieceKind::ALL {
            let shape = Shape::canonical(kind);
            assert_eq!(shape.cells().count(), 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn bounding_box_sizes() {
        assert_eq!(Shape::canonical(PieceKind::O).size(), 2);
        assert_eq!(Shape::canonical(PieceKind::T).size(), 3);
        assert_eq!(Shape::canonical(PieceKind::I).size(), 4);
    }

    #[test]
    fn rotation_is_clockwise() {
        // J canonical: top arm pointing right. new[i][j] = old[2-j][i]
        // sends (0,1),(0,2),(1,1),(2,1) to (1,0),(1,1),(1,2),(2,2).
        let shape = Shape::canonical(PieceKind::J).rotated_cw();
        let got: Vec<(i8, i8)> = shape.cells().collect();
        assert_eq!(got, vec![(1, 0), (1, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn four_rotations_restore_canonical() {
        for kind in PieceKind::ALL {
            let canonical = Shape::canonical(kind);
            let mut shape = canonical;
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, canonical, "kind {:?}", kind);
        }
    }

    #[test]
    fn o_rotation_is_identity() {
        let shape = Shape::canonical(PieceKind::O);
        assert_eq!(shape.rotated_cw(), shape);
    }

    #[test]
    fn i_rotation_fills_one_column() {
        let rotated = Shape::canonical(PieceKind::I).rotated_cw();
        // Horizontal bar on row 1 becomes a vertical bar on column 2.
        let cells: Vec<(i8, i8)> = rotated.cells().collect();
        assert_eq!(cells, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }
}
