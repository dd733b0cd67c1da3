// src/agents/mod.rs

pub mod agent_trait;
pub mod agent_type;
pub mod books;
pub mod config;
pub mod exp_avg_agent;
pub mod market_maker_agent;
pub mod random_agent;
pub mod streak_agent;

use crate::error::{AllocatorError, Result};

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AllocatorError::InvalidParameter(format!(
            "{name} must lie in [0, 1], got {value}"
        )));
    }
    Ok(())
}
