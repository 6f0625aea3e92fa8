//! Piece shape tests - canonical matrices and rotation

use blockfall::core::Shape;
use blockfall::types::PieceKind;

fn filled(shape: &Shape) -> Vec<(i8, i8)> {
    shape.cells().collect()
}

#[test]
fn canonical_matrices_match_definitions() {
    assert_eq!(
        filled(&Shape::canonical(PieceKind::O)),
        vec![(0, 0), (0, 1), (1, 0), (1, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::L)),
        vec![(0, 2), (1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::J)),
        vec![(0, 1), (0, 2), (1, 1), (2, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::S)),
        vec![(0, 1), (0, 2), (1, 0), (1, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::Z)),
        vec![(0, 0), (0, 1), (1, 1), (1, 2)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::T)),
        vec![(0, 0), (0, 1), (0, 2), (1, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::I)),
        vec![(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn two_rotations_then_two_more_restore_shape() {
    for kind in PieceKind::ALL {
        let canonical = Shape::canonical(kind);

        let half = canonical.rotated_cw().rotated_cw();
        let full = half.rotated_cw().rotated_cw();

        assert_eq!(full, canonical, "360 degrees must be identity for {:?}", kind);
    }
}

#[test]
fn rotation_preserves_cell_count_and_bounds() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::canonical(kind);
        let n = shape.size() as i8;
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.size() as i8, n);
            assert_eq!(shape.cells().count(), 4);
            for (r, c) in shape.cells() {
                assert!(r >= 0 && r < n && c >= 0 && c < n);
            }
        }
    }
}

#[test]
fn rotation_returns_a_copy() {
    // Rotating one shape never mutates the source it was derived from.
    let canonical = Shape::canonical(PieceKind::L);
    let rotated = canonical.rotated_cw();
    assert_ne!(rotated, canonical);
    assert_eq!(Shape::canonical(PieceKind::L), canonical);
}
