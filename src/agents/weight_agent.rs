//! Scoring agent: expand, score every root successor concurrently, keep the
//! leading set, pick uniformly.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::agent_trait::{Agent, AgentOutput};
use crate::board_codec::board::Board;
use crate::chess_errors::{ChessError, ChessResult};
use crate::evaluation::board_scoring::{score_candidate, BoardScorer};
use crate::lookahead::expander::successors;
use crate::selection::worker_pool::WorkerPool;

/// The full selection pipeline for one position.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    scorer: &dyn BoardScorer,
    depth: u8,
    pool: &WorkerPool,
    rng: &mut R,
) -> ChessResult<AgentOutput> {
    let candidates = successors(board);
    if candidates.is_empty() {
        return Err(ChessError::NoLegalMoves);
    }

    let leading = pool.score_all(&candidates, |candidate| {
        score_candidate(scorer, candidate, depth)
    });
    let leaders = leading.len();
    let chosen = leading.choose(rng).ok_or(ChessError::NoLegalMoves)?;

    debug!(
        "chose move with score {} among {} leaders of {} candidates (depth {depth})",
        chosen.score,
        leaders,
        candidates.len()
    );

    Ok(AgentOutput {
        chosen: chosen.board,
        score: chosen.score,
        candidates: candidates.len(),
        leaders,
        info_lines: vec![format!(
            "info depth {depth} score {} candidates {} leaders {leaders}",
            chosen.score,
            candidates.len()
        )],
    })
}

pub struct WeightAgent {
    name: String,
    scorer: Box<dyn BoardScorer>,
    lookahead: u8,
    pool: WorkerPool,
    rng: StdRng,
}

impl WeightAgent {
    pub fn new(name: impl Into<String>, scorer: Box<dyn BoardScorer>, lookahead: u8) -> Self {
        Self {
            name: name.into(),
            scorer,
            lookahead: lookahead.max(1),
            pool: WorkerPool::default(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.pool = WorkerPool::new(workers);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn scorer(&self) -> &dyn BoardScorer {
        self.scorer.as_ref()
    }
}

impl Agent for WeightAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookahead(&self) -> u8 {
        self.lookahead
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<AgentOutput> {
        select_move(board, self.scorer.as_ref(), self.lookahead, &self.pool, &mut self.rng)
    }
}
