//! Pseudo-legal offsets per piece.
//!
//! Sliders, knights and kings read their static table; pawns and castling are
//! computed from the position. Every offset returned here lands on the board.

use crate::board_codec::board::{is_on_board, Board, PAWN_START_ROW};
use crate::board_codec::move_tables::{offsets_for, Offset};
use crate::board_codec::piece_codes::*;

const PAWN_FORWARD: Offset = (0, -1);
const PAWN_DOUBLE_STEP: Offset = (0, -2);
const PAWN_CAPTURES: [Offset; 2] = [(-1, -1), (1, -1)];

/// King displacements for castling toward the rook on file 0 or file 7.
pub const CASTLE_LEFT: Offset = (-2, 0);
pub const CASTLE_LEFT_LONG: Offset = (-3, 0);
pub const CASTLE_RIGHT: Offset = (2, 0);

/// On-board offsets consistent with the piece's movement shape.
pub fn pseudo_legal_offsets(
    board: &Board,
    piece: SquareValue,
    x: i8,
    y: i8,
) -> impl Iterator<Item = Offset> {
    let (table, computed): (&'static [Offset], Vec<Offset>) = match piece_kind(piece) {
        Some(PieceKind::Pawn) => (&[], pawn_offsets(board, piece, x, y)),
        Some(PieceKind::King) => (offsets_for(PieceKind::King), castling_offsets(board, piece, y)),
        Some(kind) => (offsets_for(kind), Vec::new()),
        None => (&[], Vec::new()),
    };

    table
        .iter()
        .copied()
        .chain(computed)
        .filter(move |&offset| is_on_board(x, y, offset))
}

/// Forward step, double step from the start row, and diagonal captures.
/// No en passant.
pub fn pawn_offsets(board: &Board, piece: SquareValue, x: i8, y: i8) -> Vec<Offset> {
    let mut out = Vec::with_capacity(4);
    let empty_at = |offset: Offset| board.get_offset(x, y, offset) == Some(EMPTY);

    if empty_at(PAWN_FORWARD) {
        out.push(PAWN_FORWARD);

        let unmoved = y == PAWN_START_ROW || has_first_move(piece);
        if unmoved && empty_at(PAWN_DOUBLE_STEP) {
            out.push(PAWN_DOUBLE_STEP);
        }
    }

    for capture in PAWN_CAPTURES {
        if board
            .get_offset(x, y, capture)
            .is_some_and(is_inactive)
        {
            out.push(capture);
        }
    }

    out
}

/// Castling offsets for a king that has never moved.
///
/// The file-0 side yields both `CASTLE_LEFT` and `CASTLE_LEFT_LONG`, the
/// file-7 side yields `CASTLE_RIGHT`. A side qualifies when its corner holds
/// one of the mover's rooks still carrying the first-move flag. Squares
/// between king and rook are not inspected and the rook stays put; the
/// destination is checked like any other king step.
pub fn castling_offsets(board: &Board, piece: SquareValue, y: i8) -> Vec<Offset> {
    let mut out = Vec::new();
    if !has_first_move(piece) {
        return out;
    }

    let unmoved_rook = |rook_x: i8| {
        let rook = board.get(rook_x, y);
        is_active(rook) && has_first_move(rook) && piece_kind(rook) == Some(PieceKind::Rook)
    };

    if unmoved_rook(0) {
        out.extend([CASTLE_LEFT, CASTLE_LEFT_LONG]);
    }
    if unmoved_rook(7) {
        out.push(CASTLE_RIGHT);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::legal_offsets;

    #[test]
    fn opening_pawn_has_single_and_double_step() {
        let board = Board::INITIAL;
        let offsets: Vec<Offset> = pseudo_legal_offsets(&board, PAWN | ACTIVE_FLAG, 0, 6).collect();
        assert_eq!(offsets, vec![(0, -1), (0, -2)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::INITIAL.with(3, 5, KNIGHT);
        let offsets = pawn_offsets(&board, PAWN | ACTIVE_FLAG, 3, 6);
        assert!(offsets.is_empty());
    }

    #[test]
    fn pawn_captures_only_opponent_pieces() {
        let board = Board::EMPTY
            .with(3, 4, PAWN | ACTIVE_FLAG)
            .with(2, 3, ROOK)
            .with(4, 3, ROOK | ACTIVE_FLAG)
            .with(3, 3, QUEEN);
        let offsets = pawn_offsets(&board, PAWN | ACTIVE_FLAG, 3, 4);
        assert_eq!(offsets, vec![(-1, -1)]);
    }

    #[test]
    fn corner_knight_stays_on_board() {
        let board = Board::INITIAL;
        let offsets: Vec<Offset> = pseudo_legal_offsets(&board, KNIGHT | ACTIVE_FLAG, 1, 7).collect();
        assert_eq!(offsets.len(), 3);
        assert!(offsets.contains(&(-1, -2)));
    }

    #[test]
    fn blocked_double_step_keeps_the_single_step() {
        let board = Board::INITIAL.with(3, 4, KNIGHT);
        let offsets = pawn_offsets(&board, PAWN | ACTIVE_FLAG, 3, 6);
        assert_eq!(offsets, vec![(0, -1)]);
    }

    #[test]
    fn moved_pawn_off_the_start_row_steps_once() {
        let board = Board::EMPTY.with(3, 5, PAWN | ACTIVE_FLAG);
        assert_eq!(pawn_offsets(&board, PAWN | ACTIVE_FLAG, 3, 5), vec![(0, -1)]);

        let flagged = PAWN | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let board = Board::EMPTY.with(3, 5, flagged);
        assert_eq!(pawn_offsets(&board, flagged, 3, 5), vec![(0, -1), (0, -2)]);
    }

    #[test]
    fn castling_needs_unmoved_king_and_corner_rook() {
        let king = KING | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let rook = ROOK | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let board = Board::EMPTY.with(4, 7, king).with(0, 7, rook).with(7, 7, rook);
        assert_eq!(
            castling_offsets(&board, king, 7),
            vec![CASTLE_LEFT, CASTLE_LEFT_LONG, CASTLE_RIGHT]
        );

        let moved_rook = board.with(0, 7, ROOK | ACTIVE_FLAG);
        assert_eq!(castling_offsets(&moved_rook, king, 7), vec![CASTLE_RIGHT]);

        let enemy_rook = board.with(7, 7, ROOK | FIRST_MOVE_FLAG);
        assert_eq!(
            castling_offsets(&enemy_rook, king, 7),
            vec![CASTLE_LEFT, CASTLE_LEFT_LONG]
        );

        assert!(castling_offsets(&board, KING | ACTIVE_FLAG, 7).is_empty());
    }

    #[test]
    fn castling_ignores_pieces_in_between() {
        let king = KING | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let rook = ROOK | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let board = Board::EMPTY
            .with(4, 7, king)
            .with(7, 7, rook)
            .with(5, 7, BISHOP | ACTIVE_FLAG);
        assert_eq!(castling_offsets(&board, king, 7), vec![CASTLE_RIGHT]);
    }

    #[test]
    fn opening_king_cannot_castle() {
        let king = Board::INITIAL.get(4, 7);
        // Both corners qualify, but every landing square holds a friendly piece.
        assert_eq!(castling_offsets(&Board::INITIAL, king, 7).len(), 3);
        assert!(legal_offsets(&Board::INITIAL, king, 4, 7).next().is_none());
    }
}
