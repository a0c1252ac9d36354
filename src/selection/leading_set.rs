//! Running maximum over scored candidates.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board_codec::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredBoard {
    pub score: i64,
    pub board: Board,
}

/// Candidates tied for the best score seen so far.
///
/// Each candidate carries the index it was submitted with. Scores arrive in
/// whatever order the workers finish, so leaders are sorted by index before a
/// pick is made; with a seeded rng the choice is then reproducible.
#[derive(Debug, Clone, Default)]
pub struct LeadingSet {
    best: Option<i64>,
    leaders: Vec<(usize, Board)>,
}

impl LeadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly better replaces the set, equal joins it, worse is dropped.
    pub fn offer(&mut self, index: usize, scored: ScoredBoard) {
        match self.best {
            Some(best) if scored.score < best => {}
            Some(best) if scored.score == best => self.leaders.push((index, scored.board)),
            _ => {
                self.best = Some(scored.score);
                self.leaders.clear();
                self.leaders.push((index, scored.board));
            }
        }
    }

    #[inline]
    /// Score shared by every leader, `None` before the first offer.
    pub fn best_score(&self) -> Option<i64> {
        self.best
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.leaders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty()
    }

    /// Leaders in submission order.
    pub fn leaders(&self) -> Vec<Board> {
        let mut sorted = self.leaders.clone();
        sorted.sort_unstable_by_key(|&(index, _)| index);
        sorted.into_iter().map(|(_, board)| board).collect()
    }

    /// Uniform pick among the leaders. `None` when nothing was offered.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ScoredBoard> {
        let score = self.best?;
        let board = *self.leaders().choose(rng)?;
        Some(ScoredBoard { score, board })
    }
}
