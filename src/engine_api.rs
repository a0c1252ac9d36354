//! The three operations outer layers call: expand, apply, choose a move.
//!
//! Boards crossing this boundary are canonical for the player to move.
//! `expand` and `choose_move` return proposals in that same orientation, and
//! `apply` takes one of them and returns the board canonical for the
//! opponent.

use log::{debug, warn};
use rand::Rng;

use crate::agents::agent_config::DEFAULT_MAX_LOOKAHEAD;
use crate::agents::agent_trait::AgentOutput;
use crate::agents::weight_agent::select_move;
use crate::board_codec::board::Board;
use crate::chess_errors::{ChessError, ChessResult};
use crate::evaluation::board_scoring::{BoardScorer, WeightedScorer};
use crate::evaluation::strategy::Reduction;
use crate::evaluation::weights::WeightConfig;
use crate::lookahead::expander::{self, Line, HARD_MAX_LOOKAHEAD};
use crate::selection::worker_pool::WorkerPool;
use crate::transition::position::Position;

/// Limits applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct EngineLimits {
    pub max_lookahead: u8,
    pub workers: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_lookahead: DEFAULT_MAX_LOOKAHEAD,
            workers: crate::selection::worker_pool::DEFAULT_WORKERS,
        }
    }
}

impl EngineLimits {
    fn check_depth(&self, requested: u8) -> ChessResult<()> {
        let limit = self.max_lookahead.min(HARD_MAX_LOOKAHEAD);
        if requested > limit {
            warn!("refusing lookahead of {requested} plies, limit is {limit}");
            return Err(ChessError::DepthLimitExceeded { requested, limit });
        }
        Ok(())
    }
}

/// Every line of `depth` boards reachable from `board`.
pub fn expand(board: &Board, depth: u8) -> ChessResult<Vec<Line>> {
    expand_with(board, depth, &EngineLimits::default())
}

/// `expand` under caller-supplied limits.
///
/// Fails with `DepthLimitExceeded` when `depth` is above
/// `limits.max_lookahead`; otherwise the expansion itself cannot fail.
pub fn expand_with(board: &Board, depth: u8, limits: &EngineLimits) -> ChessResult<Vec<Line>> {
    limits.check_depth(depth)?;
    let lines = expander::expand(board, depth);
    debug!("expand depth {depth}: {} lines", lines.len());
    Ok(lines)
}

/// Validate `proposed` against `board` and return the next canonical board.
pub fn apply(board: &Board, proposed: &Board) -> ChessResult<Board> {
    let next = Position::new(*board).apply(proposed)?;
    Ok(*next.board())
}

/// Chosen proposal for `board` under `weights`, reduced with the default
/// strategy.
pub fn choose_move(board: &Board, weights: &WeightConfig, depth: u8) -> ChessResult<Board> {
    let scorer = WeightedScorer::new(weights.clone(), Reduction::default());
    let output = choose_move_with(
        board,
        &scorer,
        depth,
        &EngineLimits::default(),
        &mut rand::rng(),
    )?;
    Ok(output.chosen)
}

/// Full selection pipeline with an explicit scorer, limits and rng.
///
/// A depth of 0 is raised to 1 with a warning. Candidates are scored on
/// `limits.workers` threads and the pick is drawn from `rng`, so a seeded rng
/// reproduces the same choice. Fails with `NoLegalMoves` on a terminal
/// position and `DepthLimitExceeded` above the limit.
pub fn choose_move_with<R: Rng + ?Sized>(
    board: &Board,
    scorer: &dyn BoardScorer,
    depth: u8,
    limits: &EngineLimits,
    rng: &mut R,
) -> ChessResult<AgentOutput> {
    let depth = if depth == 0 {
        warn!("lookahead 0 requested, using 1");
        1
    } else {
        depth
    };
    limits.check_depth(depth)?;
    select_move(board, scorer, depth, &WorkerPool::new(limits.workers), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_codec::piece_codes::*;
    use crate::chess_errors::InvalidMoveReason;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn apply_round_trips_through_expand() {
        let lines = expand(&Board::INITIAL, 1).expect("depth 1 is allowed");
        for line in &lines {
            let next = apply(&Board::INITIAL, &line[0]).expect("expanded moves apply");
            assert_eq!(next.canonicalize(), line[0]);
        }
    }

    #[test]
    fn apply_reports_invalid_moves() {
        let err = apply(&Board::INITIAL, &Board::INITIAL).expect_err("no-op move");
        assert!(matches!(
            err,
            ChessError::InvalidMove(InvalidMoveReason::WrongDiffSize(0))
        ));
    }

    #[test]
    fn deep_requests_are_refused() {
        assert!(matches!(
            expand(&Board::INITIAL, 5),
            Err(ChessError::DepthLimitExceeded {
                requested: 5,
                limit: 4
            })
        ));

        let generous = EngineLimits {
            max_lookahead: 12,
            ..EngineLimits::default()
        };
        assert!(matches!(
            expand_with(&Board::INITIAL, 7, &generous),
            Err(ChessError::DepthLimitExceeded {
                requested: 7,
                limit: HARD_MAX_LOOKAHEAD
            })
        ));
    }

    #[test]
    fn chosen_move_is_applicable() {
        let chosen = choose_move(&Board::INITIAL, &WeightConfig::balance(), 1).expect("moves exist");
        assert!(apply(&Board::INITIAL, &chosen).is_ok());
    }

    #[test]
    fn choose_move_on_a_terminal_board_fails() {
        let trapped = Board::EMPTY
            .with(7, 7, KING | ACTIVE_FLAG)
            .with(5, 6, QUEEN)
            .with(0, 0, KING);
        assert!(matches!(
            choose_move(&trapped, &WeightConfig::positive(), 2),
            Err(ChessError::NoLegalMoves)
        ));
    }

    #[test]
    fn depth_zero_is_treated_as_one() {
        let scorer = WeightedScorer::new(WeightConfig::balance(), Reduction::Max);
        let output = choose_move_with(
            &Board::INITIAL,
            &scorer,
            0,
            &EngineLimits::default(),
            &mut StdRng::seed_from_u64(8),
        )
        .expect("moves exist");
        assert_eq!(output.candidates, 20);
    }
}
