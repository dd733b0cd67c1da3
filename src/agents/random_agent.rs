// src/agents/random_agent.rs

use super::agent_trait::{Agent, uniform};
use super::books::AgentBooks;
use super::config::{RANDOM_P_BUY, RANDOM_P_SELL, RANDOM_VOLUME};
use super::check_unit_interval;
use crate::error::{AllocatorError, Result};
use rand::RngCore;

/// Flips a coin every tick: buy a slice of cash, dump the inventory, or wait.
pub struct RandomAgent {
    books: AgentBooks,
    p_buy: f64,
    p_sell: f64,
    volume: f64,
}

impl RandomAgent {
    pub fn new(capital: f64) -> Self {
        Self {
            books: AgentBooks::new(capital),
            p_buy: RANDOM_P_BUY,
            p_sell: RANDOM_P_SELL,
            volume: RANDOM_VOLUME,
        }
    }

    pub fn with_params(capital: f64, p_buy: f64, p_sell: f64, volume: f64) -> Result<Self> {
        check_unit_interval("p_buy", p_buy)?;
        check_unit_interval("p_sell", p_sell)?;
        if p_buy + p_sell > 1.0 {
            return Err(AllocatorError::InvalidParameter(format!(
                "p_buy + p_sell must not exceed 1, got {}",
                p_buy + p_sell
            )));
        }
        check_unit_interval("volume", volume)?;
        Ok(Self {
            books: AgentBooks::new(capital),
            p_buy,
            p_sell,
            volume,
        })
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, bid: f64, ask: f64, rng: &mut dyn RngCore) {
        let r = uniform(rng);
        if r < self.p_buy {
            let c = self.volume * self.books.cash;
            self.books.buy_with_cash(c, ask);
        } else if r < self.p_buy + self.p_sell {
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
        "random"
    }
}
