// src/types/mod.rs

pub mod tick;

pub use tick::MarketTick;
