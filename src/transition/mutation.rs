//! Board diffs and single-move board construction.
//!
//! Successor boards built here stay in the mover's orientation; the caller
//! decides when to hand the board over with `Board::canonicalize`.

use crate::board_codec::board::{Board, PROMOTION_ROW};
use crate::board_codec::move_tables::Offset;
use crate::board_codec::piece_codes::*;

/// One square that differs between two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub x: i8,
    pub y: i8,
    pub previous: SquareValue,
    pub next: SquareValue,
}

impl Mutation {
    #[inline]
    pub fn vacates_active(&self) -> bool {
        is_active(self.previous) && is_empty(self.next)
    }
}

/// Every square whose value differs, row-major.
pub fn diff(current: &Board, proposed: &Board) -> Vec<Mutation> {
    let mut out = Vec::with_capacity(4);
    for (y, (old_row, new_row)) in current.rows().iter().zip(proposed.rows()).enumerate() {
        for (x, (&previous, &next)) in old_row.iter().zip(new_row).enumerate() {
            if previous != next {
                out.push(Mutation {
                    x: x as i8,
                    y: y as i8,
                    previous,
                    next,
                });
            }
        }
    }
    out
}

#[inline]
pub fn is_promotion(piece: SquareValue, y: i8, offset: Offset) -> bool {
    piece_kind(piece) == Some(PieceKind::Pawn) && y + offset.1 == PROMOTION_ROW
}

/// Boards reached by moving `piece` from `(x, y)` by `offset`.
///
/// The offset must already be legal. A pawn reaching the far rank yields one
/// board per promotion kind; every other move yields exactly one board. The
/// moved piece loses its first-move flag. Castling moves the king alone; the
/// corner rook keeps its square and its flag.
pub fn successor_boards(board: &Board, piece: SquareValue, x: i8, y: i8, offset: Offset) -> Vec<Board> {
    let (tx, ty) = (x + offset.0, y + offset.1);
    let vacated = board.with(x, y, EMPTY);

    if is_promotion(piece, y, offset) {
        return PieceKind::PROMOTIONS
            .iter()
            .map(|kind| vacated.with(tx, ty, kind.active()))
            .collect();
    }

    vec![vacated.with(tx, ty, strip_first_move(piece))]
}
