// src/agents/streak_agent.rs

use super::agent_trait::Agent;
use super::books::AgentBooks;
use super::check_unit_interval;
use super::config::{STREAK_LENGTH, STREAK_VOLUME};
use crate::error::{AllocatorError, Result};
use rand::RngCore;

/// Momentum on runs of quotes.
///
/// A run of non-increasing asks triggers a buy sized on the reference capital; a run
/// of non-decreasing bids triggers a full liquidation. Both can fire on the same tick.
pub struct StreakAgent {
    books: AgentBooks,
    action_streak: u32,
    volume: f64,
    last_bid: f64,
    last_ask: f64,
    b_streak: u32,
    a_streak: u32,
}

impl StreakAgent {
    pub fn new(capital: f64) -> Self {
        Self {
            books: AgentBooks::new(capital),
            action_streak: STREAK_LENGTH,
            volume: STREAK_VOLUME,
            last_bid: 0.0,
            last_ask: 0.0,
            b_streak: 0,
            a_streak: 0,
        }
    }

    pub fn with_params(capital: f64, streak: u32, volume: f64) -> Result<Self> {
        if streak == 0 {
            return Err(AllocatorError::InvalidParameter(
                "streak length must be at least 1".to_string(),
            ));
        }
        check_unit_interval("volume", volume)?;
        Ok(Self {
            action_streak: streak,
            volume,
            ..Self::new(capital)
        })
    }

    /// Current (bid, ask) run lengths.
    pub fn streaks(&self) -> (u32, u32) {
        (self.b_streak, self.a_streak)
    }
}

impl Agent for StreakAgent {
    fn act(&mut self, bid: f64, ask: f64, _rng: &mut dyn RngCore) {
        if bid >= self.last_bid {
            self.b_streak += 1;
        } else {
            self.b_streak = 0;
        }
        if ask <= self.last_ask {
            self.a_streak += 1;
        } else {
            self.a_streak = 0;
        }
        self.last_bid = bid;
        self.last_ask = ask;

        if self.a_streak >= self.action_streak {
            let c = self.books.cash.min(self.volume * self.books.capital);
            self.books.buy_with_cash(c, ask);
            self.a_streak = 0;
        }
        if self.b_streak >= self.action_streak {
            let c = (self.volume * self.books.capital / bid).min(self.books.asset);
            self.books.liquidate(c, bid);
            self.b_streak = 0;
        }
    }

    fn books(&self) -> &AgentBooks {
        &self.books
    }

    fn books_mut(&mut self) -> &mut AgentBooks {
        &mut self.books
    }

    fn name(&self) -> &'static str {
        "streak"
    }
}
