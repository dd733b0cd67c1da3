// src/config.rs

//! Declarative description of an allocation run, loadable from JSON.

use crate::agents::agent_type::AgentKind;
use crate::bandits::{ExplorationSchedule, validate_fractions};
use crate::error::{AllocatorError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_CAPITAL: f64 = 1_000_000.0;

/// One competing strategy and the share of the pool it starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSlot {
    pub strategy: AgentKind,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the single generator every draw of the run comes from.
    #[serde(default)]
    pub seed: u64,
    /// Size of the pool split among the agents.
    #[serde(default = "default_initial_capital")]
    pub initial_capital: f64,
    pub schedule: ExplorationSchedule,
    pub agents: Vec<AgentSlot>,
    /// Rounds to play; every available tick when absent.
    #[serde(default)]
    pub n_iter: Option<usize>,
}

fn default_initial_capital() -> f64 {
    DEFAULT_INITIAL_CAPITAL
}

impl SimulationConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            return Err(AllocatorError::NoAgents);
        }
        if !(self.initial_capital.is_finite() && self.initial_capital > 0.0) {
            return Err(AllocatorError::InvalidParameter(format!(
                "initial capital must be positive, got {}",
                self.initial_capital
            )));
        }
        self.schedule.validate()?;
        validate_fractions(&self.fractions())
    }

    pub fn fractions(&self) -> Vec<f64> {
        self.agents.iter().map(|slot| slot.fraction).collect()
    }
}
