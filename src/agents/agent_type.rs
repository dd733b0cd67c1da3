// src/agents/agent_type.rs

use super::agent_trait::Agent;
use super::exp_avg_agent::ExpAvgAgent;
use super::market_maker_agent::MarketMakerAgent;
use super::random_agent::RandomAgent;
use super::streak_agent::StreakAgent;
use crate::error::{AllocatorError, Result};
use crate::estimators::EstimatorMode;
use serde::{Deserialize, Serialize};

/// Declarative description of a strategy and its parameters.
/// Missing parameters fall back to the defaults in `agents::config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentKind {
    Random {
        #[serde(default = "defaults::random_p_buy")]
        p_buy: f64,
        #[serde(default = "defaults::random_p_sell")]
        p_sell: f64,
        #[serde(default = "defaults::random_volume")]
        volume: f64,
    },
    ExpAvg {
        #[serde(default = "defaults::exp_avg_alpha")]
        alpha: f64,
        #[serde(default = "defaults::exp_avg_volume")]
        volume: f64,
    },
    Streak {
        #[serde(default = "defaults::streak_length")]
        streak: u32,
        #[serde(default = "defaults::streak_volume")]
        volume: f64,
    },
    MarketMaker {
        #[serde(default = "defaults::mm_dbid")]
        dbid: f64,
        #[serde(default = "defaults::mm_dask")]
        dask: f64,
        #[serde(default = "defaults::mm_tick_size")]
        tick_size: f64,
        #[serde(default = "defaults::mm_volume")]
        volume: f64,
        #[serde(default = "defaults::mm_patience")]
        patience: u32,
    },
    DynamicMarketMaker {
        #[serde(default = "defaults::mm_sigma_multiplier")]
        c: f64,
        #[serde(default)]
        estimator: EstimatorMode,
        #[serde(default = "defaults::mm_volume")]
        volume: f64,
        #[serde(default = "defaults::mm_patience")]
        patience: u32,
    },
}

impl AgentKind {
    /// Builds the strategy with `capital` as its starting books.
    /// Zero capital is accepted; it describes an agent starved of allocation.
    pub fn build(&self, capital: f64) -> Result<Box<dyn Agent>> {
        if !capital.is_finite() || capital < 0.0 {
            return Err(AllocatorError::InvalidParameter(format!(
                "capital must be finite and non-negative, got {capital}"
            )));
        }
        let agent: Box<dyn Agent> = match *self {
            AgentKind::Random {
                p_buy,
                p_sell,
                volume,
            } => Box::new(RandomAgent::with_params(capital, p_buy, p_sell, volume)?),
            AgentKind::ExpAvg { alpha, volume } => {
                Box::new(ExpAvgAgent::with_params(capital, alpha, volume)?)
            }
            AgentKind::Streak { streak, volume } => {
                Box::new(StreakAgent::with_params(capital, streak, volume)?)
            }
            AgentKind::MarketMaker {
                dbid,
                dask,
                tick_size,
                volume,
                patience,
            } => Box::new(MarketMakerAgent::with_static_quotes(
                capital, dbid, dask, tick_size, volume, patience,
            )?),
            AgentKind::DynamicMarketMaker {
                c,
                estimator,
                volume,
                patience,
            } => Box::new(MarketMakerAgent::with_dynamic_quotes(
                capital, c, estimator, volume, patience,
            )?),
        };
        Ok(agent)
    }
}

mod defaults {
    use crate::agents::config::*;

    pub fn random_p_buy() -> f64 {
        RANDOM_P_BUY
    }
    pub fn random_p_sell() -> f64 {
        RANDOM_P_SELL
    }
    pub fn random_volume() -> f64 {
        RANDOM_VOLUME
    }
    pub fn exp_avg_alpha() -> f64 {
        EXP_AVG_ALPHA
    }
    pub fn exp_avg_volume() -> f64 {
        EXP_AVG_VOLUME
    }
    pub fn streak_length() -> u32 {
        STREAK_LENGTH
    }
    pub fn streak_volume() -> f64 {
        STREAK_VOLUME
    }
    pub fn mm_dbid() -> f64 {
        MM_DBID
    }
    pub fn mm_dask() -> f64 {
        MM_DASK
    }
    pub fn mm_tick_size() -> f64 {
        MM_TICK_SIZE
    }
    pub fn mm_volume() -> f64 {
        MM_VOLUME
    }
    pub fn mm_patience() -> u32 {
        MM_PATIENCE
    }
    pub fn mm_sigma_multiplier() -> f64 {
        MM_SIGMA_MULTIPLIER
    }
}
