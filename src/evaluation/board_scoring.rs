//! Pluggable leaf scoring.
//!
//! A scorer values leaf boards; a candidate root move is scored by expanding
//! its continuations, scoring every leaf, and reducing those scores with the
//! scorer's strategy.

use crate::board_codec::board::Board;
use crate::evaluation::strategy::{root_score, Reduction};
use crate::evaluation::weights::WeightConfig;
use crate::lookahead::expander::{continuation_lines, Line};

pub trait BoardScorer: Send + Sync {
    /// Value of a leaf shown from the root player's side.
    fn score_leaf(&self, leaf: &Board) -> i64;

    fn reduction(&self) -> Reduction {
        Reduction::First
    }

    /// Reduced root score of a set of lines, last board of each line as leaf.
    fn score_lines(&self, lines: &[Line]) -> i64 {
        let values: Vec<i64> = lines
            .iter()
            .filter_map(|line| line.last())
            .map(|leaf| self.score_leaf(leaf))
            .collect();
        self.reduction().reduce(&values).map(root_score).unwrap_or(0)
    }
}

/// Scores every leaf the same. Selection degrades to a uniform random pick.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseScorer;

impl BoardScorer for BaseScorer {
    fn score_leaf(&self, _leaf: &Board) -> i64 {
        0
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    weights: WeightConfig,
    reduction: Reduction,
}

impl WeightedScorer {
    /// Sum `weights` over every square of a leaf, then combine leaves with
    /// `reduction`.
    pub fn new(weights: WeightConfig, reduction: Reduction) -> Self {
        Self { weights, reduction }
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }
}

impl BoardScorer for WeightedScorer {
    fn score_leaf(&self, leaf: &Board) -> i64 {
        let mut sum = 0i64;
        for (y, row) in leaf.rows().iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                sum += self.weights.square_weight(value, x, y);
            }
        }
        sum
    }

    fn reduction(&self) -> Reduction {
        self.reduction
    }
}

/// Root score of one candidate move looking `depth` plies ahead, the
/// candidate itself being the first ply.
pub fn score_candidate(scorer: &dyn BoardScorer, proposal: &Board, depth: u8) -> i64 {
    scorer.score_lines(&continuation_lines(proposal, depth))
}
