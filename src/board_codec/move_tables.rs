//! Static move-offset tables.
//!
//! Offsets are `(dx, dy)` pairs. Sliders list every distance along each axis
//! up to 8 in both directions; off-board targets are filtered at generation
//! time, path checks happen in `move_generation::legality`.

use crate::board_codec::piece_codes::PieceKind;

pub type Offset = (i8, i8);

const DIAGONAL_AXES: [Offset; 2] = [(1, 1), (-1, 1)];
const ORTHOGONAL_AXES: [Offset; 2] = [(0, 1), (1, 0)];

pub const BISHOP_MOVES: [Offset; 32] = generate_axis_moves(DIAGONAL_AXES);
pub const ROOK_MOVES: [Offset; 32] = generate_axis_moves(ORTHOGONAL_AXES);
pub const QUEEN_MOVES: [Offset; 64] = concat_slides(BISHOP_MOVES, ROOK_MOVES);

pub const KING_MOVES: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_MOVES: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Static table for a piece kind. Pawns are computed per position and have none.
#[inline]
pub const fn offsets_for(kind: PieceKind) -> &'static [Offset] {
    match kind {
        PieceKind::Bishop => &BISHOP_MOVES,
        PieceKind::King => &KING_MOVES,
        PieceKind::Knight => &KNIGHT_MOVES,
        PieceKind::Pawn => &[],
        PieceKind::Queen => &QUEEN_MOVES,
        PieceKind::Rook => &ROOK_MOVES,
    }
}

const fn generate_axis_moves(axes: [Offset; 2]) -> [Offset; 32] {
    let mut table = [(0i8, 0i8); 32];
    let mut axis = 0usize;
    let mut slot = 0usize;

    while axis < 2 {
        let (ax, ay) = axes[axis];
        let mut distance = -8i8;
        while distance <= 8 {
            if distance != 0 {
                table[slot] = (ax * distance, ay * distance);
                slot += 1;
            }
            distance += 1;
        }
        axis += 1;
    }

    table
}

const fn concat_slides(a: [Offset; 32], b: [Offset; 32]) -> [Offset; 64] {
    let mut table = [(0i8, 0i8); 64];
    let mut i = 0usize;
    while i < 32 {
        table[i] = a[i];
        table[32 + i] = b[i];
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_tables_have_expected_shapes() {
        assert!(BISHOP_MOVES.iter().all(|(dx, dy)| dx.abs() == dy.abs() && *dx != 0));
        assert!(ROOK_MOVES.iter().all(|(dx, dy)| (*dx == 0) != (*dy == 0)));
        assert!(BISHOP_MOVES.contains(&(-8, 8)));
        assert!(ROOK_MOVES.contains(&(0, -8)));
    }

    #[test]
    fn queen_is_union_of_bishop_and_rook() {
        for offset in BISHOP_MOVES.iter().chain(ROOK_MOVES.iter()) {
            assert!(QUEEN_MOVES.contains(offset));
        }
        assert_eq!(offsets_for(PieceKind::Queen).len(), 64);
    }

    #[test]
    fn pawn_has_no_static_table() {
        assert!(offsets_for(PieceKind::Pawn).is_empty());
        assert_eq!(offsets_for(PieceKind::Knight).len(), 8);
    }
}
