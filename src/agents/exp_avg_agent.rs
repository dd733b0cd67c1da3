// src/agents/exp_avg_agent.rs

use super::agent_trait::Agent;
use super::books::AgentBooks;
use super::check_unit_interval;
use super::config::{EXP_AVG_ALPHA, EXP_AVG_VOLUME};
use crate::error::Result;
use rand::RngCore;

/// Mean reversion against exponential moving averages of both sides of the quote.
/// Buys when the ask dips below its average, dumps inventory when the bid rises
/// above its average. Buying wins when both fire.
pub struct ExpAvgAgent {
    books: AgentBooks,
    alpha: f64,
    volume: f64,
    ma_bid: f64,
    ma_ask: f64,
}

impl ExpAvgAgent {
    pub fn new(capital: f64) -> Self {
        Self {
            books: AgentBooks::new(capital),
            alpha: EXP_AVG_ALPHA,
            volume: EXP_AVG_VOLUME,
            ma_bid: 0.0,
            ma_ask: 0.0,
        }
    }

    pub fn with_params(capital: f64, alpha: f64, volume: f64) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        check_unit_interval("volume", volume)?;
        Ok(Self {
            alpha,
            volume,
            ..Self::new(capital)
        })
    }

    pub fn moving_averages(&self) -> (f64, f64) {
        (self.ma_bid, self.ma_ask)
    }
}

impl Agent for ExpAvgAgent {
    fn act(&mut self, bid: f64, ask: f64, _rng: &mut dyn RngCore) {
        self.ma_bid = self.alpha * self.ma_bid + (1.0 - self.alpha) * bid;
        self.ma_ask = self.alpha * self.ma_ask + (1.0 - self.alpha) * ask;

        if ask < self.ma_ask {
            let c = self.volume * self.books.cash;
            self.books.buy_with_cash(c, ask);
        } else if bid > self.ma_bid {
            let c = self.volume * self.books.asset;
            self.books.liquidate(c, bid);
        }
    }

    fn books(&self) -> &AgentBooks {
        &self.books
    }

    fn books_mut(&mut self) -> &mut AgentBooks {
        &mut self.books
    }

    fn name(&self) -> &'static str {
        "exp_avg"
    }
}
