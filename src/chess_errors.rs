//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by the public operations.
//! Two families matter to callers:
//! - `InvalidMove` is a rejected proposal. It is recoverable: re-prompt the
//!   player or drop the request.
//! - `Format` is a malformed board on the wire. It is fatal to the request
//!   that carried it but never touches in-memory state, since boards are
//!   immutable values.
//!
//! Move generation and lookahead never fail; an empty result means "no moves".

use thiserror::Error;

/// Why a proposed transition was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The proposal differs from the current board in this many squares.
    #[error("{0} squares changed")]
    WrongDiffSize(usize),
    /// Neither changed square was vacated.
    #[error("no square was vacated")]
    NoVacatedSource,
    /// The vacated square did not hold a piece of the player to move.
    #[error("moved piece does not belong to the player to move")]
    SourceNotActive,
    /// The destination already held a piece of the player to move.
    #[error("destination holds one of the mover's own pieces")]
    DestinationOccupiedByMover,
    /// The piece arriving at the destination is not the piece that left.
    #[error("piece type changed in transit")]
    PieceChanged,
    /// A pawn reached the back rank without becoming bishop, knight, queen or rook.
    #[error("invalid pawn promotion")]
    UnauthorizedPromotion,
    /// The displacement is not a legal offset for the moving piece.
    #[error("piece cannot move that way")]
    IllegalOffset,
    /// The opponent king was capturable and the proposal did not take it.
    #[error("opponent king is capturable and must be taken")]
    KingCaptureRequired,
    /// After the move the opponent could capture the mover's king.
    #[error("move leaves own king capturable")]
    KingLeftExposed,
    /// A king is missing or the position went stale.
    #[error("game is already over")]
    GameOver,
}

/// Malformed board serialization.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("board must have 8 ranks, got {0}")]
    RowCount(usize),

    #[error("rank {rank} must decode to 8 bytes, got {len}")]
    RowLength { rank: usize, len: usize },

    #[error("rank {rank} is not valid hex: {source}")]
    Hex {
        rank: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("square value {value:#04x} at rank {rank} file {file} is not a piece code")]
    BadSquareValue { rank: usize, file: usize, value: u8 },

    #[error("board JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unified error type for the engine.
#[derive(Error, Debug)]
pub enum ChessError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveReason),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// Terminal position: the side to move has no legal successor.
    #[error("no legal moves from this position")]
    NoLegalMoves,

    #[error("lookahead depth {requested} exceeds the limit of {limit}")]
    DepthLimitExceeded { requested: u8, limit: u8 },

    #[error("unknown agent `{0}`")]
    UnknownAgent(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_move_message_names_the_reason() {
        let err = ChessError::from(InvalidMoveReason::WrongDiffSize(3));
        assert_eq!(err.to_string(), "invalid move: 3 squares changed");
        assert_eq!(
            InvalidMoveReason::KingLeftExposed.to_string(),
            "move leaves own king capturable"
        );
    }

    #[test]
    fn format_errors_convert_into_chess_error() {
        let err: ChessError = FormatError::RowCount(7).into();
        assert!(matches!(err, ChessError::Format(FormatError::RowCount(7))));
    }
}
