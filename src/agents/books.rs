// src/agents/books.rs

use serde::Serialize;

/// The capital accounting every strategy carries around.
///
/// `capital` is the reference the PnL is measured against. It only ever changes
/// through [`AgentBooks::rescale_capital`], which hands the agent a proportional
/// slice of its whole position rather than a cash transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentBooks {
    pub capital: f64,
    pub cash: f64,
    pub asset: f64,
    pub current_pnl: f64,
    pub previous_pnl: f64,
}

impl AgentBooks {
    /// Fresh books: everything in cash, no inventory.
    /// `current_pnl` starts at the capital itself, so the first evaluation compares
    /// a real PnL against that seed value.
    pub fn new(capital: f64) -> Self {
        Self {
            capital,
            cash: capital,
            asset: 0.0,
            current_pnl: capital,
            previous_pnl: 0.0,
        }
    }

    /// Marks the position to `bid`, shifting the last PnL into `previous_pnl`.
    pub fn calc_pnl(&mut self, bid: f64) -> f64 {
        self.previous_pnl = self.current_pnl;
        self.current_pnl = self.equity(bid) - self.capital;
        self.current_pnl
    }

    /// Multiplies every monetary field by `frac`. Calls compound.
    pub fn rescale_capital(&mut self, frac: f64) {
        debug_assert!(frac >= 0.0, "rescale fraction must be non-negative, got {frac}");
        self.current_pnl *= frac;
        self.previous_pnl *= frac;
        self.capital *= frac;
        self.cash *= frac;
        self.asset *= frac;
    }

    /// Marked-to-bid value of the whole position.
    pub fn equity(&self, bid: f64) -> f64 {
        self.cash + self.asset * bid
    }

    // --- Trade primitives shared by the strategies ---

    /// Spends `amount` of cash on the asset at `price`. Nothing happens for a zero amount.
    pub(crate) fn buy_with_cash(&mut self, amount: f64, price: f64) {
        if amount <= 0.0 {
            return;
        }
        self.cash -= amount;
        self.asset += amount / price;
    }

    /// Credits `price * credited_units` and wipes the inventory.
    /// The strategies size the credit on a partial quantity but always close the whole
    /// position; that asymmetry is kept as-is.
    pub(crate) fn liquidate(&mut self, credited_units: f64, price: f64) {
        self.cash += price * credited_units;
        self.asset = 0.0;
    }
}
