//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! max_depth = 10
//! move_time_ms = 500
//! tie_break = "leftmost"
//! tt_size_mb = 16
//!
//! [eval]
//! three_run = 10
//! two_run = 1
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::{EvalWeights, MAX_HEURISTIC};
use crate::time_control::SearchLimits;
use crate::types::{TieBreak, WIN_SCORE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest iterative-deepening iteration
    pub max_depth: u8,
    /// Wall-clock budget per move in milliseconds
    pub move_time_ms: Option<u64>,
    /// Node budget per move
    pub max_nodes: Option<u64>,
    pub tie_break: TieBreak,
    /// Transposition table size per root-mover perspective
    pub tt_size_mb: usize,
    pub use_transposition_table: bool,
    pub eval: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            move_time_ms: None,
            max_nodes: None,
            tie_break: TieBreak::Leftmost,
            tt_size_mb: 8,
            use_transposition_table: true,
            eval: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tt_size_mb == 0 {
            return Err(ConfigError::Invalid {
                field: "tt_size_mb",
                reason: "must be at least 1".into(),
            });
        }
        if self.max_nodes == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_nodes",
                reason: "must be at least 1 when set".into(),
            });
        }
        match self.eval.heuristic_bound() {
            None => {
                return Err(ConfigError::Invalid {
                    field: "eval",
                    reason: "weights must not be negative".into(),
                });
            }
            Some(bound) if bound > i64::from(MAX_HEURISTIC) => {
                return Err(ConfigError::Invalid {
                    field: "eval",
                    reason: format!(
                        "weights allow heuristic scores up to {bound}, \
                         which must stay below the win score {WIN_SCORE}"
                    ),
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Fresh limits for one decision.
    pub fn search_limits(&self) -> SearchLimits {
        let limits = match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.max_depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.max_depth),
        };
        match self.max_nodes {
            Some(n) => limits.with_max_nodes(n),
            None => limits,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
