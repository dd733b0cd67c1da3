// src/types/tick.rs

use serde::{Deserialize, Serialize};

/// One quote from the market: the best ask and the best bid.
/// Field names on the wire follow the quote files the simulations were built on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketTick {
    #[serde(rename = "AskPrice")]
    pub ask: f64,
    #[serde(rename = "BidPrice")]
    pub bid: f64,
}

impl MarketTick {
    #[inline]
    pub fn new(ask: f64, bid: f64) -> Self {
        Self { ask, bid }
    }

    pub fn mid(&self) -> f64 {
        (self.ask + self.bid) / 2.0
    }

    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}
