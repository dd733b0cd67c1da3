// src/agents/config.rs

//! A centralized place for the default strategy parameters.

// --- RandomAgent ---
// 15% buy, 15% sell, 70% wait.
pub const RANDOM_P_BUY: f64 = 0.15;
pub const RANDOM_P_SELL: f64 = 0.15;
pub const RANDOM_VOLUME: f64 = 0.1;

// --- ExpAvgAgent ---
pub const EXP_AVG_ALPHA: f64 = 0.8;
pub const EXP_AVG_VOLUME: f64 = 0.1;

// --- StreakAgent ---
pub const STREAK_LENGTH: u32 = 3;
pub const STREAK_VOLUME: f64 = 0.1;

// --- MarketMakerAgent ---
// Quotes rest one tick outside the touch and are pulled after 5 unfilled ticks.
pub const MM_DBID: f64 = 1.0;
pub const MM_DASK: f64 = 1.0;
pub const MM_TICK_SIZE: f64 = 0.01;
pub const MM_VOLUME: f64 = 1.0;
pub const MM_PATIENCE: u32 = 5;
// Dynamic quotes sit this many standard deviations away from the touch.
pub const MM_SIGMA_MULTIPLIER: f64 = 1.0;
