// src/simulation.rs

use crate::agents::agent_trait::Agent;
use crate::bandits::{AllocationTable, PnlIncrease, agent_multi_armed_bandit};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::types::MarketTick;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Owns the competing agents and the random stream of one configured run,
/// and plays them through the multi-armed allocator.
pub struct AllocationRun {
    config: SimulationConfig,
    agents: Vec<Box<dyn Agent>>,
    rng: StdRng,
}

impl AllocationRun {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let agents = Self::build_agents(&config)?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            agents,
            rng,
        })
    }

    // Each agent starts with its share of the pool.
    fn build_agents(config: &SimulationConfig) -> Result<Vec<Box<dyn Agent>>> {
        config
            .agents
            .iter()
            .map(|slot| slot.strategy.build(config.initial_capital * slot.fraction))
            .collect()
    }

    /// Plays the configured number of rounds over `ticks` with the default
    /// PnL-increase reward.
    pub fn run(&mut self, ticks: &[MarketTick]) -> Result<AllocationTable> {
        info!(
            "starting allocation run: seed {}, {} agents, pool {}",
            self.config.seed,
            self.agents.len(),
            self.config.initial_capital
        );
        agent_multi_armed_bandit(
            ticks,
            &mut self.agents,
            &self.config.fractions(),
            &self.config.schedule,
            self.config.n_iter,
            &PnlIncrease,
            &mut self.rng,
        )
    }

    /// Rebuilds the agents and reseeds the generator.
    pub fn reset(&mut self) -> Result<()> {
        self.agents = Self::build_agents(&self.config)?;
        self.rng = StdRng::seed_from_u64(self.config.seed);
        Ok(())
    }

    pub fn agents(&self) -> &[Box<dyn Agent>] {
        &self.agents
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
