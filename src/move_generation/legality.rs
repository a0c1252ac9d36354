//! Per-piece legality predicates applied on top of pseudo-legal offsets.

use crate::board_codec::board::Board;
use crate::board_codec::move_tables::Offset;
use crate::board_codec::piece_codes::{is_active, is_empty, unit, PieceKind};

pub type Validation = fn(&Board, i8, i8, Offset) -> bool;

/// The destination does not hold one of the mover's pieces.
#[inline]
pub fn validate_ending(board: &Board, x: i8, y: i8, (dx, dy): Offset) -> bool {
    !is_active(board.get(x + dx, y + dy))
}

/// Every intermediate square on the straight line is empty, and the ending is valid.
pub fn validate_path(board: &Board, x: i8, y: i8, offset: Offset) -> bool {
    let (dx, dy) = offset;
    let limit = dx.abs().max(dy.abs());
    let (step_x, step_y) = (unit(dx), unit(dy));

    (1..limit).all(|i| is_empty(board.get(x + step_x * i, y + step_y * i)))
        && validate_ending(board, x, y, offset)
}

/// Pawn offsets are already filtered against occupancy when generated.
#[inline]
pub fn validate_true(_board: &Board, _x: i8, _y: i8, _offset: Offset) -> bool {
    true
}

pub fn validation_for(kind: PieceKind) -> Validation {
    match kind {
        PieceKind::Bishop | PieceKind::Queen | PieceKind::Rook => validate_path,
        // Castling only checks the landing square, like any king step.
        PieceKind::King | PieceKind::Knight => validate_ending,
        PieceKind::Pawn => validate_true,
    }
}
