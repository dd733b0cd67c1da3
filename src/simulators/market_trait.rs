// src/simulators/market_trait.rs

use crate::types::MarketTick;

/// A trait for any object that can produce a stream of quotes.
/// This allows for a pluggable quote source behind the allocators.
pub trait Marketable {
    /// Advances the simulation by one time step and returns the new quote.
    fn step(&mut self) -> MarketTick;

    /// Returns the current quote without advancing the simulation.
    fn current_tick(&self) -> MarketTick;

    /// Resets the simulation to its initial state.
    fn reset(&mut self);

    /// Collects the next `n` quotes.
    fn ticks(&mut self, n: usize) -> Vec<MarketTick> {
        (0..n).map(|_| self.step()).collect()
    }
}
