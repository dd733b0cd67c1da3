// src/bandits/reward.rs

use crate::agents::books::AgentBooks;

/// Decides whether an evaluated agent passed its trial.
/// Called once per evaluated agent per round, right after `calc_pnl`.
pub trait RewardPredicate {
    fn passed(&self, books: &AgentBooks) -> bool;
}

/// Passes when the freshly computed PnL is strictly above the previous one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PnlIncrease;

impl RewardPredicate for PnlIncrease {
    fn passed(&self, books: &AgentBooks) -> bool {
        books.current_pnl > books.previous_pnl
    }
}

impl<F> RewardPredicate for F
where
    F: Fn(&AgentBooks) -> bool,
{
    fn passed(&self, books: &AgentBooks) -> bool {
        self(books)
    }
}
