// src/simulators/mod.rs

pub mod gbm;
pub mod market_trait;

pub use gbm::GbmQuoteSimulator;
pub use market_trait::Marketable;
