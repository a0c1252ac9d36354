//! Agent abstraction.
//!
//! An agent turns a position into one chosen root move. Different scoring
//! setups are selected at runtime behind this single trait.

use crate::board_codec::board::Board;
use crate::chess_errors::ChessResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutput {
    /// Chosen proposal, in the mover's orientation. Feed it to `apply`.
    pub chosen: Board,
    pub score: i64,
    /// Root successors considered.
    pub candidates: usize,
    /// Candidates tied for the best score.
    pub leaders: usize,
    pub info_lines: Vec<String>,
}

pub trait Agent: Send {
    fn name(&self) -> &str;

    fn lookahead(&self) -> u8;

    fn new_game(&mut self) {}

    /// Fails with `ChessError::NoLegalMoves` on a terminal position.
    fn choose_move(&mut self, board: &Board) -> ChessResult<AgentOutput>;
}
