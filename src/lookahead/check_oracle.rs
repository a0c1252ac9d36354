//! "Can the king be taken next ply" detector.
//!
//! This is not check-evasion. A position where the mover can land on the
//! opponent king restricts generation to those captures, and a root move that
//! hands the opponent such a capture is pruned.

use crate::board_codec::board::Board;
use crate::board_codec::piece_codes::{strip_first_move, KING};
use crate::move_generation::move_generator::{generate_moves, legal_offsets, PieceMove};

/// The move lands on the opponent king.
#[inline]
pub fn is_king_capture(board: &Board, mv: &PieceMove) -> bool {
    strip_first_move(mv.target(board)) == KING
}

/// Some piece of the player to move can capture the opponent king.
pub fn king_capture_available(board: &Board) -> bool {
    board.active_pieces().any(|piece| {
        legal_offsets(board, piece.value, piece.x, piece.y).any(|(dx, dy)| {
            strip_first_move(board.get(piece.x + dx, piece.y + dy)) == KING
        })
    })
}

/// Moves of the player to move, restricted to king captures when one exists.
pub fn forced_moves(board: &Board) -> Vec<PieceMove> {
    let moves = generate_moves(board);
    if moves.iter().any(|mv| is_king_capture(board, mv)) {
        moves.into_iter().filter(|mv| is_king_capture(board, mv)).collect()
    } else {
        moves
    }
}

/// `proposal` is still in the mover's orientation. True when the opponent
/// keeps their king and can reply by capturing the mover's.
pub fn leaves_king_exposed(proposal: &Board) -> bool {
    proposal.contains(KING) && king_capture_available(&proposal.canonicalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_codec::piece_codes::*;

    #[test]
    fn opening_has_no_king_capture() {
        assert!(!king_capture_available(&Board::INITIAL));
        assert_eq!(forced_moves(&Board::INITIAL).len(), 20);
    }

    #[test]
    fn exposed_king_forces_the_capture() {
        let board = Board::EMPTY
            .with(4, 7, KING | ACTIVE_FLAG)
            .with(0, 4, ROOK | ACTIVE_FLAG)
            .with(4, 4, KING)
            .with(7, 0, PAWN);
        assert!(king_capture_available(&board));
        let moves = forced_moves(&board);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].destination(), (4, 4));
    }

    #[test]
    fn blocked_line_is_not_a_capture() {
        let board = Board::EMPTY
            .with(0, 4, ROOK | ACTIVE_FLAG)
            .with(2, 4, PAWN)
            .with(4, 4, KING);
        assert!(!king_capture_available(&board));
    }

    #[test]
    fn stepping_into_a_rook_file_is_exposed() {
        let board = Board::EMPTY
            .with(4, 7, KING | ACTIVE_FLAG)
            .with(3, 0, ROOK)
            .with(7, 0, KING);
        let into_file = board.with(4, 7, EMPTY).with(3, 7, KING | ACTIVE_FLAG);
        let sideways = board.with(4, 7, EMPTY).with(5, 7, KING | ACTIVE_FLAG);
        assert!(leaves_king_exposed(&into_file));
        assert!(!leaves_king_exposed(&sideways));
    }

    #[test]
    fn captured_opponent_king_is_never_exposed() {
        let proposal = Board::EMPTY.with(4, 7, KING | ACTIVE_FLAG).with(4, 0, QUEEN);
        assert!(!leaves_king_exposed(&proposal));
    }
}
