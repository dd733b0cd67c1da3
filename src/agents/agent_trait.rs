// src/agents/agent_trait.rs

use super::books::AgentBooks;
use rand::RngCore;

/// The core trait that all strategies implement.
///
/// A strategy owns an [`AgentBooks`] and mutates it in [`Agent::act`]; the allocator
/// only ever touches the books through `calc_pnl` and `rescale_capital`.
pub trait Agent {
    // === Core Decision-Making ===
    /// Consumes one quote and trades against the agent's own books.
    /// Strategies that need randomness draw it from `rng`, so draw order stays
    /// part of the simulation's reproducible stream.
    fn act(&mut self, bid: f64, ask: f64, rng: &mut dyn RngCore);

    // === Books ===
    fn books(&self) -> &AgentBooks;
    fn books_mut(&mut self) -> &mut AgentBooks;

    /// Short label used in logs.
    fn name(&self) -> &'static str;

    // === Capital accounting used by the allocator ===
    fn calc_pnl(&mut self, bid: f64) -> f64 {
        self.books_mut().calc_pnl(bid)
    }

    fn rescale_capital(&mut self, frac: f64) {
        self.books_mut().rescale_capital(frac)
    }
}

/// Uniform draw in `[0, 1)`.
#[inline]
pub(crate) fn uniform(rng: &mut dyn RngCore) -> f64 {
    use rand::Rng;
    rng.gen_range(0.0..1.0)
}
