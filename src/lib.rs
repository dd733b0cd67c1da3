// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod bandits;
pub mod config;
pub mod error;
pub mod estimators;
pub mod simulation;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::agent_trait::Agent;
pub use agents::agent_type::AgentKind;
pub use agents::books::AgentBooks;
pub use agents::exp_avg_agent::ExpAvgAgent;
pub use agents::market_maker_agent::{MarketMakerAgent, QuoteModel};
pub use agents::random_agent::RandomAgent;
pub use agents::streak_agent::StreakAgent;

// --- From `bandits` ---
pub use bandits::{
    AllocationTable, DEFAULT_MULTI_ROUNDS, DEFAULT_SYNTHETIC_ROUNDS, ExplorationSchedule,
    PnlIncrease, RewardPredicate, TwoArmedTrajectory,
    agent_multi_armed_bandit, agent_two_armed_bandit, simple_multi_armed_bandit,
    simple_two_armed_bandit,
};

// --- From `estimators` ---
pub use estimators::{EstimatorMode, VolatilityEstimator};

// --- Running configured simulations ---
pub use config::{AgentSlot, SimulationConfig};
pub use error::{AllocatorError, Result};
pub use simulation::AllocationRun;

// --- Quote sources ---
pub use simulators::{GbmQuoteSimulator, Marketable};
pub use types::MarketTick;
