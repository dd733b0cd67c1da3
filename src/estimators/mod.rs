// src/estimators/mod.rs

pub mod volatility;

pub use volatility::{EstimatorMode, SideStats, VolatilityEstimator};
