//! Agent configuration, loaded from TOML or JSON.
//!
//! ```toml
//! agent = "max-positive-agent"
//! lookahead = 2
//! workers = 4
//! strategy = "harmonic-mean"
//! ```

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::agents::agent_trait::Agent;
use crate::agents::registry::build_scorer;
use crate::agents::weight_agent::WeightAgent;
use crate::chess_errors::{ChessError, ChessResult};
use crate::evaluation::strategy::Reduction;
use crate::evaluation::weights::WeightConfig;
use crate::lookahead::expander::HARD_MAX_LOOKAHEAD;
use crate::selection::worker_pool::DEFAULT_WORKERS;

pub const DEFAULT_MAX_LOOKAHEAD: u8 = 4;

/// Agent settings as read from TOML or JSON. Missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    pub agent: String,
    pub lookahead: u8,
    pub workers: usize,
    pub max_lookahead: u8,
    pub strategy: Option<Reduction>,
    pub weights: Option<WeightConfig>,
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent: "balance-agent".to_owned(),
            lookahead: 1,
            workers: DEFAULT_WORKERS,
            max_lookahead: DEFAULT_MAX_LOOKAHEAD,
            strategy: None,
            weights: None,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Parse and validate. Unknown keys are a `Config` error.
    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ChessError::Config(format!("agent config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ChessError::Config(format!("agent config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `.json` as JSON and anything else as TOML.
    pub fn from_file(path: &Path) -> ChessResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChessError::Config(format!("{}: {e}", path.display())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    /// `max_lookahead` must not exceed the hard ceiling, `lookahead` must not
    /// exceed `max_lookahead`, and at least one worker is required.
    pub fn validate(&self) -> ChessResult<()> {
        if self.max_lookahead > HARD_MAX_LOOKAHEAD {
            return Err(ChessError::Config(format!(
                "max_lookahead {} is above the hard ceiling {HARD_MAX_LOOKAHEAD}",
                self.max_lookahead
            )));
        }
        if self.lookahead > self.max_lookahead {
            return Err(ChessError::DepthLimitExceeded {
                requested: self.lookahead,
                limit: self.max_lookahead,
            });
        }
        if self.workers == 0 {
            return Err(ChessError::Config("workers must be at least 1".to_owned()));
        }
        Ok(())
    }

    /// Lookahead actually used: at least one ply.
    pub fn effective_lookahead(&self) -> u8 {
        if self.lookahead == 0 {
            warn!("lookahead 0 requested for {}, using 1", self.agent);
        }
        self.lookahead.max(1)
    }

    /// Validate, then build the registry agent named by `agent` with any
    /// weight or strategy overrides applied.
    pub fn build(&self) -> ChessResult<Box<dyn Agent>> {
        self.validate()?;
        let scorer = build_scorer(&self.agent, self.weights.clone(), self.strategy)?;
        let mut agent = WeightAgent::new(self.agent.clone(), scorer, self.effective_lookahead())
            .with_workers(self.workers);
        if let Some(seed) = self.seed {
            agent = agent.with_seed(seed);
        }
        Ok(Box::new(agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_codec::board::Board;

    #[test]
    fn toml_fills_in_defaults() {
        let config = AgentConfig::from_toml_str(
            r#"
                agent = "max-positive-agent"
                lookahead = 2
                strategy = "harmonic-mean"
            "#,
        )
        .expect("config parses");
        assert_eq!(config.agent, "max-positive-agent");
        assert_eq!(config.lookahead, 2);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.max_lookahead, DEFAULT_MAX_LOOKAHEAD);
        assert_eq!(config.strategy, Some(Reduction::HarmonicMean));
        assert!(config.weights.is_none());
    }

    #[test]
    fn depth_above_the_limit_is_refused() {
        let err = AgentConfig::from_toml_str("lookahead = 5").expect_err("over the limit");
        assert!(matches!(
            err,
            ChessError::DepthLimitExceeded {
                requested: 5,
                limit: 4
            }
        ));

        let err = AgentConfig::from_toml_str("max_lookahead = 9").expect_err("over the ceiling");
        assert!(matches!(err, ChessError::Config(_)));
    }

    #[test]
    fn unknown_keys_are_config_errors() {
        let err = AgentConfig::from_json_str(r#"{"agent": "base-agent", "depth": 2}"#)
            .expect_err("unknown field");
        assert!(matches!(err, ChessError::Config(_)));
    }

    #[test]
    fn built_agent_plays_from_the_opening() {
        let config = AgentConfig {
            agent: "min-balance-agent".to_owned(),
            workers: 2,
            seed: Some(4),
            ..AgentConfig::default()
        };
        let mut agent = config.build().expect("agent builds");
        assert_eq!(agent.name(), "min-balance-agent");
        let output = agent.choose_move(&Board::INITIAL).expect("opening has moves");
        assert_eq!(output.candidates, 20);
    }

    #[test]
    fn unknown_agent_fails_to_build() {
        let config = AgentConfig {
            agent: "oracle".to_owned(),
            ..AgentConfig::default()
        };
        assert!(matches!(config.build(), Err(ChessError::UnknownAgent(_))));
    }
}
