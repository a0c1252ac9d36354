//! Game position: a canonical board plus the move counters.
//!
//! `Position::apply` is the only operation in the crate that refuses input.
//! It accepts a proposed board iff that board is one of the root successors
//! the lookahead expander would generate, and hands the result to the
//! opponent in canonical form.

use serde::{Deserialize, Serialize};

use crate::board_codec::board::{Board, PROMOTION_ROW};
use crate::board_codec::piece_codes::*;
use crate::chess_errors::{ChessResult, InvalidMoveReason};
use crate::lookahead::check_oracle::{king_capture_available, leaves_king_exposed};
use crate::move_generation::move_generator::is_legal_offset;
use crate::transition::mutation::{diff, successor_boards, Mutation};

/// Plies without a pawn move after which a position is stale.
pub const STALE_PLY_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    board: Board,
    move_count: u32,
    moves_since_pawn: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// The standard opening with fresh counters.
    pub fn initial() -> Self {
        Self::new(Board::INITIAL)
    }

    /// Fresh counters on an arbitrary canonical board.
    pub fn new(board: Board) -> Self {
        Self::with_counters(board, 1, 0)
    }

    /// Restore a position mid-game.
    ///
    /// `move_count` starts at 1 for the first ply; `moves_since_pawn` counts
    /// plies since the last pawn move and drives staleness.
    pub fn with_counters(board: Board, move_count: u32, moves_since_pawn: u32) -> Self {
        Self {
            board,
            move_count,
            moves_since_pawn,
        }
    }

    /// The board, canonical for the player to move.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Plies since a pawn last moved.
    #[inline]
    pub fn moves_since_pawn(&self) -> u32 {
        self.moves_since_pawn
    }

    #[inline]
    pub fn has_kings(&self) -> bool {
        self.board.has_kings()
    }

    #[inline]
    pub fn contains(&self, code: SquareValue) -> bool {
        self.board.contains(code)
    }

    /// Both kings are on the board and a pawn moved recently.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.has_kings() && self.moves_since_pawn < STALE_PLY_LIMIT
    }

    /// Validate `proposed` (in the mover's orientation) and return the next
    /// position, canonicalized for the opponent.
    pub fn apply(&self, proposed: &Board) -> ChessResult<Position> {
        if !self.is_active() {
            return Err(InvalidMoveReason::GameOver.into());
        }

        let changes = diff(&self.board, proposed);
        let pawn_moved = match changes.len() {
            2 => self.validate_simple_move(&changes, proposed)?,
            n => return Err(InvalidMoveReason::WrongDiffSize(n).into()),
        };

        if king_capture_available(&self.board) && proposed.contains(KING) {
            return Err(InvalidMoveReason::KingCaptureRequired.into());
        }
        if leaves_king_exposed(proposed) {
            return Err(InvalidMoveReason::KingLeftExposed.into());
        }

        let moves_since_pawn = if pawn_moved {
            0
        } else {
            self.moves_since_pawn + 1
        };
        Ok(Position::with_counters(
            proposed.canonicalize(),
            self.move_count + 1,
            moves_since_pawn,
        ))
    }

    /// Checks a two-square proposal against the generated successors of the
    /// vacated piece. Castling takes this path too, since only the king moves.
    ///
    /// Returns whether the moved piece was a pawn.
    fn validate_simple_move(&self, changes: &[Mutation], proposed: &Board) -> ChessResult<bool> {
        assert_eq!(changes.len(), 2, "simple move must touch exactly two squares");

        let (source, destination) = match changes.iter().position(Mutation::vacates_active) {
            Some(0) => (changes[0], changes[1]),
            Some(_) => (changes[1], changes[0]),
            None if changes.iter().any(|m| is_inactive(m.previous) && is_empty(m.next)) => {
                return Err(InvalidMoveReason::SourceNotActive.into());
            }
            None => return Err(InvalidMoveReason::NoVacatedSource.into()),
        };

        if is_active(destination.previous) {
            return Err(InvalidMoveReason::DestinationOccupiedByMover.into());
        }

        let offset = (destination.x - source.x, destination.y - source.y);
        if !is_legal_offset(&self.board, source.previous, source.x, source.y, offset) {
            return Err(InvalidMoveReason::IllegalOffset.into());
        }

        let reachable = successor_boards(&self.board, source.previous, source.x, source.y, offset);
        if !reachable.contains(proposed) {
            let pawn = piece_kind(source.previous) == Some(PieceKind::Pawn);
            let reason = if pawn && destination.y == PROMOTION_ROW {
                InvalidMoveReason::UnauthorizedPromotion
            } else {
                InvalidMoveReason::PieceChanged
            };
            return Err(reason.into());
        }

        Ok(piece_kind(source.previous) == Some(PieceKind::Pawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessError;

    fn reason(result: ChessResult<Position>) -> InvalidMoveReason {
        match result {
            Err(ChessError::InvalidMove(reason)) => reason,
            other => panic!("expected an invalid move, got {other:?}"),
        }
    }

    #[test]
    fn pawn_push_hands_the_board_to_the_opponent() {
        let position = Position::initial();
        let proposed = Board::INITIAL.with(4, 6, EMPTY).with(4, 4, PAWN | ACTIVE_FLAG);
        let next = position.apply(&proposed).expect("double step is legal");

        assert_eq!(next.move_count(), 2);
        assert_eq!(next.moves_since_pawn(), 0);
        assert_eq!(next.board(), &proposed.canonicalize());
        assert_eq!(next.board().get(3, 3), PAWN);
        assert!(next.is_active());
    }

    #[test]
    fn knight_move_advances_the_pawn_counter() {
        let position = Position::with_counters(Board::INITIAL, 7, 3);
        let proposed = Board::INITIAL.with(6, 7, EMPTY).with(5, 5, KNIGHT | ACTIVE_FLAG);
        let next = position.apply(&proposed).expect("knight jump is legal");
        assert_eq!(next.move_count(), 8);
        assert_eq!(next.moves_since_pawn(), 4);
    }

    #[test]
    fn refuses_malformed_diffs() {
        let position = Position::initial();
        assert_eq!(
            reason(position.apply(&Board::INITIAL)),
            InvalidMoveReason::WrongDiffSize(0)
        );

        let teleport = Board::INITIAL.with(0, 6, EMPTY);
        assert_eq!(
            reason(position.apply(&teleport)),
            InvalidMoveReason::WrongDiffSize(1)
        );

        let moves_opponent = Board::INITIAL.with(0, 1, EMPTY).with(0, 2, PAWN);
        assert_eq!(
            reason(position.apply(&moves_opponent)),
            InvalidMoveReason::SourceNotActive
        );

        let two_drops = Board::INITIAL.with(0, 4, PAWN).with(1, 4, PAWN);
        assert_eq!(
            reason(position.apply(&two_drops)),
            InvalidMoveReason::NoVacatedSource
        );
    }

    #[test]
    fn refuses_illegal_shapes_and_changes() {
        let position = Position::initial();

        let triple_step = Board::INITIAL.with(0, 6, EMPTY).with(0, 3, PAWN | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&triple_step)),
            InvalidMoveReason::IllegalOffset
        );

        let morph = Board::INITIAL.with(0, 6, EMPTY).with(0, 5, QUEEN | ACTIVE_FLAG);
        assert_eq!(reason(position.apply(&morph)), InvalidMoveReason::PieceChanged);

        let onto_own = Board::INITIAL.with(1, 7, EMPTY).with(3, 6, KNIGHT | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&onto_own)),
            InvalidMoveReason::DestinationOccupiedByMover
        );
    }

    #[test]
    fn promotion_must_be_one_of_four_kinds() {
        let board = Board::EMPTY
            .with(0, 1, PAWN | ACTIVE_FLAG)
            .with(7, 7, KING | ACTIVE_FLAG)
            .with(7, 3, KING);
        let position = Position::new(board);

        let to_knight = board.with(0, 1, EMPTY).with(0, 0, KNIGHT | ACTIVE_FLAG);
        assert!(position.apply(&to_knight).is_ok());

        let stays_pawn = board.with(0, 1, EMPTY).with(0, 0, PAWN | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&stays_pawn)),
            InvalidMoveReason::UnauthorizedPromotion
        );

        let to_king = board.with(0, 1, EMPTY).with(0, 0, KING | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&to_king)),
            InvalidMoveReason::UnauthorizedPromotion
        );
    }

    #[test]
    fn king_capture_is_mandatory_when_available() {
        let board = Board::EMPTY
            .with(4, 7, KING | ACTIVE_FLAG)
            .with(4, 5, ROOK | ACTIVE_FLAG)
            .with(4, 1, KING)
            .with(0, 6, PAWN | ACTIVE_FLAG);
        let position = Position::new(board);

        let pawn_push = board.with(0, 6, EMPTY).with(0, 5, PAWN | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&pawn_push)),
            InvalidMoveReason::KingCaptureRequired
        );

        let capture = board.with(4, 5, EMPTY).with(4, 1, ROOK | ACTIVE_FLAG);
        let next = position.apply(&capture).expect("capturing the king is legal");
        assert!(!next.has_kings());
        assert!(!next.is_active());
        assert_eq!(
            reason(next.apply(next.board())),
            InvalidMoveReason::GameOver
        );
    }

    #[test]
    fn moving_into_capture_is_refused() {
        let board = Board::EMPTY
            .with(4, 7, KING | ACTIVE_FLAG)
            .with(3, 0, ROOK)
            .with(7, 0, KING);
        let position = Position::new(board);
        let into_file = board.with(4, 7, EMPTY).with(3, 7, KING | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&into_file)),
            InvalidMoveReason::KingLeftExposed
        );
    }

    #[test]
    fn castling_is_a_king_only_move() {
        let king = KING | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let rook = ROOK | ACTIVE_FLAG | FIRST_MOVE_FLAG;
        let board = Board::EMPTY
            .with(4, 7, king)
            .with(0, 7, rook)
            .with(7, 7, rook)
            .with(4, 0, KING | FIRST_MOVE_FLAG);
        let position = Position::new(board);

        let short = board.with(4, 7, EMPTY).with(6, 7, KING | ACTIVE_FLAG);
        let next = position.apply(&short).expect("castling is legal");
        assert_eq!(next.moves_since_pawn(), 1);
        assert_eq!(next.board(), &short.canonicalize());

        let long = board.with(4, 7, EMPTY).with(1, 7, KING | ACTIVE_FLAG);
        assert!(position.apply(&long).is_ok());

        let with_rook = short.with(7, 7, EMPTY).with(5, 7, ROOK | ACTIVE_FLAG);
        assert_eq!(
            reason(position.apply(&with_rook)),
            InvalidMoveReason::WrongDiffSize(4)
        );

        let moved_king = Position::new(board.with(4, 7, KING | ACTIVE_FLAG));
        assert_eq!(
            reason(moved_king.apply(&short)),
            InvalidMoveReason::IllegalOffset
        );
    }

    #[test]
    fn stale_position_refuses_moves() {
        let position = Position::with_counters(Board::INITIAL, 120, STALE_PLY_LIMIT);
        assert!(!position.is_active());
        let proposed = Board::INITIAL.with(0, 6, EMPTY).with(0, 5, PAWN | ACTIVE_FLAG);
        assert_eq!(reason(position.apply(&proposed)), InvalidMoveReason::GameOver);
    }
}
