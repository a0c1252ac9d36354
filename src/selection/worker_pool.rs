//! Fixed-size fan-out/fan-in scoring pool.
//!
//! Candidates go onto one bounded job queue; each worker pulls a candidate,
//! scores it, and pushes the result onto a shared result queue. Workers stop
//! when the job queue is closed and empty. The reducer drains the result
//! queue until every worker has dropped its sender.

use std::thread;

use crossbeam_channel::{bounded, unbounded};
use log::trace;
use rand::Rng;

use crate::board_codec::board::Board;
use crate::selection::leading_set::{LeadingSet, ScoredBoard};

pub const DEFAULT_WORKERS: usize = 4;

/// Fixed-size scoring pool. Threads live only for one `score_all` call.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl WorkerPool {
    /// A pool of `workers` threads; zero is raised to one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Score every candidate and return the leading set.
    ///
    /// `candidates` are handed out through a bounded job queue, each tagged
    /// with its index; `score` runs on the worker threads and must be
    /// `Sync`. Results are drained on the calling thread until every worker
    /// has hung up, so each candidate is offered exactly once regardless of
    /// finishing order. An empty slice returns an empty set without spawning.
    pub fn score_all<F>(&self, candidates: &[Board], score: F) -> LeadingSet
    where
        F: Fn(&Board) -> i64 + Sync,
    {
        let mut leading = LeadingSet::new();
        if candidates.is_empty() {
            return leading;
        }

        let (job_tx, job_rx) = bounded::<(usize, Board)>(self.workers * 2);
        let (result_tx, result_rx) = unbounded::<(usize, ScoredBoard)>();
        let score = &score;

        thread::scope(|scope| {
            for worker in 0..self.workers.min(candidates.len()) {
                let jobs = job_rx.clone();
                let results = result_tx.clone();
                scope.spawn(move || {
                    trace!("scoring worker {worker} started");
                    let mut scored = 0usize;
                    for (index, board) in jobs.iter() {
                        let result = ScoredBoard {
                            score: score(&board),
                            board,
                        };
                        if results.send((index, result)).is_err() {
                            break;
                        }
                        scored += 1;
                    }
                    trace!("scoring worker {worker} finished after {scored} candidates");
                });
            }
            drop(job_rx);
            drop(result_tx);

            for (index, &board) in candidates.iter().enumerate() {
                if job_tx.send((index, board)).is_err() {
                    break;
                }
            }
            drop(job_tx);

            for (index, scored) in result_rx.iter() {
                leading.offer(index, scored);
            }
        });

        leading
    }

    /// Score every candidate and pick one of the best uniformly.
    ///
    /// The pick is drawn from `rng` over leaders sorted by submission index,
    /// so a seeded rng gives the same board for any worker count. `None` when
    /// `candidates` is empty.
    pub fn select<F, R>(&self, candidates: &[Board], score: F, rng: &mut R) -> Option<ScoredBoard>
    where
        F: Fn(&Board) -> i64 + Sync,
        R: Rng + ?Sized,
    {
        self.score_all(candidates, score).choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_codec::piece_codes::*;
    use crate::lookahead::expander::successors;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn every_candidate_is_scored_once() {
        let candidates = successors(&Board::INITIAL);
        let calls = AtomicUsize::new(0);
        let leading = WorkerPool::new(4).score_all(&candidates, |_| {
            calls.fetch_add(1, Ordering::Relaxed);
            7
        });
        assert_eq!(calls.load(Ordering::Relaxed), candidates.len());
        assert_eq!(leading.len(), candidates.len());
        assert_eq!(leading.leaders(), candidates);
    }

    #[test]
    fn single_best_candidate_wins() {
        let candidates = successors(&Board::INITIAL);
        let target = candidates[11];
        let pick = WorkerPool::new(3)
            .select(
                &candidates,
                |b| if *b == target { 1 } else { 0 },
                &mut StdRng::seed_from_u64(5),
            )
            .expect("candidates are not empty");
        assert_eq!(pick.board, target);
        assert_eq!(pick.score, 1);
    }

    #[test]
    fn worker_count_does_not_change_the_seeded_pick() {
        let candidates = successors(&Board::INITIAL);
        let by_pawns = |b: &Board| {
            b.rows()[4].iter().filter(|&&v| v == PAWN | ACTIVE_FLAG).count() as i64
        };
        let one = WorkerPool::new(1).select(&candidates, by_pawns, &mut StdRng::seed_from_u64(3));
        let many = WorkerPool::new(8).select(&candidates, by_pawns, &mut StdRng::seed_from_u64(3));
        assert_eq!(one, many);
        assert_eq!(one.map(|s| s.score), Some(1));
    }

    #[test]
    fn no_candidates_no_choice() {
        let pick = WorkerPool::default().select(&[], |_| 0, &mut StdRng::seed_from_u64(0));
        assert!(pick.is_none());
        assert_eq!(WorkerPool::new(0).workers(), 1);
    }
}
