//! Named agents.

use crate::agents::agent_trait::Agent;
use crate::agents::weight_agent::WeightAgent;
use crate::chess_errors::{ChessError, ChessResult};
use crate::evaluation::board_scoring::{BaseScorer, BoardScorer, WeightedScorer};
use crate::evaluation::strategy::Reduction;
use crate::evaluation::weights::WeightConfig;

pub const AGENT_NAMES: [&str; 8] = [
    "base-agent",
    "balance-agent",
    "positive-agent",
    "min-balance-agent",
    "max-balance-agent",
    "min-positive-agent",
    "max-positive-agent",
    "harmonic-positive-agent",
];

/// Weight preset and reduction behind a registry name. `None` weights means
/// the flat base scorer.
pub fn agent_recipe(name: &str) -> Option<(Option<&'static str>, Reduction)> {
    let recipe = match name {
        "base-agent" => (None, Reduction::First),
        "balance-agent" => (Some("balance"), Reduction::First),
        "positive-agent" => (Some("positive"), Reduction::First),
        "min-balance-agent" => (Some("balance"), Reduction::Min),
        "max-balance-agent" => (Some("balance"), Reduction::Max),
        "min-positive-agent" => (Some("positive"), Reduction::Min),
        "max-positive-agent" => (Some("positive"), Reduction::Max),
        "harmonic-positive-agent" => (Some("positive"), Reduction::HarmonicMean),
        _ => return None,
    };
    Some(recipe)
}

/// Scorer for a registry name, with optional overrides for the weights and
/// the reduction.
pub fn build_scorer(
    name: &str,
    weights: Option<WeightConfig>,
    reduction: Option<Reduction>,
) -> ChessResult<Box<dyn BoardScorer>> {
    let (preset, default_reduction) =
        agent_recipe(name).ok_or_else(|| ChessError::UnknownAgent(name.to_owned()))?;
    let reduction = reduction.unwrap_or(default_reduction);

    let weights = match (weights, preset) {
        (Some(weights), _) => weights,
        (None, Some(preset)) => WeightConfig::preset(preset)
            .ok_or_else(|| ChessError::Config(format!("missing weight preset `{preset}`")))?,
        (None, None) => return Ok(Box::new(BaseScorer)),
    };
    Ok(Box::new(WeightedScorer::new(weights, reduction)))
}

pub fn create_agent(name: &str, lookahead: u8) -> ChessResult<Box<dyn Agent>> {
    let scorer = build_scorer(name, None, None)?;
    Ok(Box::new(WeightAgent::new(name, scorer, lookahead)))
}
