//! Legal destination offsets for a piece, and for every piece of the mover.
//!
//! Generation never fails: an empty result means the piece (or the player)
//! has nowhere to go.

use crate::board_codec::board::{Board, PlacedPiece};
use crate::board_codec::move_tables::Offset;
use crate::board_codec::piece_codes::{piece_kind, SquareValue};
use crate::move_generation::legality::validation_for;
use crate::move_generation::pseudo_moves::pseudo_legal_offsets;

/// One legal displacement of one active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMove {
    pub piece: PlacedPiece,
    pub offset: Offset,
}

impl PieceMove {
    #[inline]
    pub fn destination(&self) -> (i8, i8) {
        (self.piece.x + self.offset.0, self.piece.y + self.offset.1)
    }

    /// Value currently on the destination square.
    #[inline]
    pub fn target(&self, board: &Board) -> SquareValue {
        let (x, y) = self.destination();
        board.get(x, y)
    }
}

/// Lazy sequence of legal offsets for `piece` standing on `(x, y)`.
pub fn legal_offsets<'a>(
    board: &'a Board,
    piece: SquareValue,
    x: i8,
    y: i8,
) -> impl Iterator<Item = Offset> + 'a {
    let validation = piece_kind(piece).map(validation_for);
    pseudo_legal_offsets(board, piece, x, y)
        .filter(move |&offset| validation.is_some_and(|validate| validate(board, x, y, offset)))
}

/// Whether `offset` is among the legal offsets of `piece` on `(x, y)`.
///
/// Runs the same generator as `legal_offsets`, castling included, so a move
/// accepted here is one the expander would also produce.
#[inline]
pub fn is_legal_offset(board: &Board, piece: SquareValue, x: i8, y: i8, offset: Offset) -> bool {
    legal_offsets(board, piece, x, y).any(|candidate| candidate == offset)
}

/// Every legal move of the player to move, in board order.
pub fn generate_moves(board: &Board) -> Vec<PieceMove> {
    let mut out = Vec::with_capacity(64);
    for piece in board.active_pieces() {
        out.extend(
            legal_offsets(board, piece.value, piece.x, piece.y)
                .map(|offset| PieceMove { piece, offset }),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_codec::piece_codes::*;

    #[test]
    fn opening_has_twenty_moves() {
        let moves = generate_moves(&Board::INITIAL);
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|m| piece_kind(m.piece.value) == Some(PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn lone_rook_sweeps_fourteen_squares() {
        let board = Board::EMPTY.with(3, 4, ROOK | ACTIVE_FLAG);
        assert_eq!(legal_offsets(&board, ROOK | ACTIVE_FLAG, 3, 4).count(), 14);
    }

    #[test]
    fn queen_stops_at_first_capture() {
        let board = Board::EMPTY
            .with(0, 7, QUEEN | ACTIVE_FLAG)
            .with(0, 5, KNIGHT)
            .with(2, 7, PAWN | ACTIVE_FLAG);
        let offsets: Vec<Offset> = legal_offsets(&board, QUEEN | ACTIVE_FLAG, 0, 7).collect();
        assert!(offsets.contains(&(0, -2)));
        assert!(!offsets.contains(&(0, -3)));
        assert!(offsets.contains(&(1, 0)));
        assert!(!offsets.contains(&(2, 0)));
        assert_eq!(offsets.len(), 2 + 1 + 7);
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert_eq!(legal_offsets(&Board::INITIAL, EMPTY, 3, 3).count(), 0);
    }

    #[test]
    fn legal_offset_lookup_matches_generation() {
        let board = Board::INITIAL;
        assert!(is_legal_offset(&board, board.get(6, 7), 6, 7, (-1, -2)));
        assert!(!is_legal_offset(&board, board.get(6, 7), 6, 7, (0, -1)));
    }
}
