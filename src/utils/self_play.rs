//! Head-to-head agent games without any outer layer.
//!
//! Two agents alternate on one `Position`, each proposal going through
//! `Position::apply` exactly as an outer caller's would.

use std::time::Instant;

use log::{debug, info};

use crate::agents::agent_trait::Agent;
use crate::chess_errors::{ChessError, ChessResult};
use crate::transition::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The winner captured the opposing king.
    KingCaptured { winner: Seat },
    /// The side to move had no legal move.
    NoMoves { stuck: Seat },
    /// Too many plies without a pawn move.
    Stale,
    MaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub max_plies: u32,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub final_position: Position,
    pub plies: u32,
    pub first_total_time_ns: u128,
    pub second_total_time_ns: u128,
}

impl GameRecord {
    pub fn report(&self) -> String {
        let outcome = match self.outcome {
            GameOutcome::KingCaptured { winner } => format!("king captured by {winner:?}"),
            GameOutcome::NoMoves { stuck } => format!("{stuck:?} has no moves"),
            GameOutcome::Stale => "stale".to_owned(),
            GameOutcome::MaxPlies => "ply limit".to_owned(),
        };
        format!(
            "outcome={outcome} plies={} first_ms={:.3} second_ms={:.3}",
            self.plies,
            self.first_total_time_ns as f64 / 1e6,
            self.second_total_time_ns as f64 / 1e6
        )
    }
}

/// Play one game from `start`, `first` moving first.
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    start: Position,
    config: SelfPlayConfig,
) -> ChessResult<GameRecord> {
    first.new_game();
    second.new_game();

    let mut position = start;
    let mut to_move = Seat::First;
    let mut plies = 0u32;
    let mut times = [0u128; 2];

    let outcome = loop {
        if !position.has_kings() {
            break GameOutcome::KingCaptured {
                winner: to_move.other(),
            };
        }
        if !position.is_active() {
            break GameOutcome::Stale;
        }
        if plies >= config.max_plies {
            break GameOutcome::MaxPlies;
        }

        let agent: &mut dyn Agent = match to_move {
            Seat::First => &mut *first,
            Seat::Second => &mut *second,
        };
        let started = Instant::now();
        let output = match agent.choose_move(position.board()) {
            Ok(output) => output,
            Err(ChessError::NoLegalMoves) => break GameOutcome::NoMoves { stuck: to_move },
            Err(e) => return Err(e),
        };
        let slot = match to_move {
            Seat::First => 0,
            Seat::Second => 1,
        };
        times[slot] = times[slot].saturating_add(started.elapsed().as_nanos());

        debug!(
            "ply {} {:?} ({}) score {}",
            plies + 1,
            to_move,
            agent.name(),
            output.score
        );
        position = position.apply(&output.chosen)?;
        plies += 1;
        to_move = to_move.other();
    };

    info!("game over after {plies} plies: {outcome:?}");
    Ok(GameRecord {
        outcome,
        final_position: position,
        plies,
        first_total_time_ns: times[0],
        second_total_time_ns: times[1],
    })
}
