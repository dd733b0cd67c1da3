// src/agents/market_maker_agent.rs

use super::agent_trait::Agent;
use super::books::AgentBooks;
use super::config::{MM_DASK, MM_DBID, MM_PATIENCE, MM_TICK_SIZE, MM_VOLUME};
use crate::error::{AllocatorError, Result};
use crate::estimators::{EstimatorMode, VolatilityEstimator};
use rand::RngCore;

/// Where the resting quotes are placed relative to the touch.
#[derive(Debug, Clone)]
pub enum QuoteModel {
    /// A fixed number of ticks outside the touch.
    Static { dbid: f64, dask: f64, tick_size: f64 },
    /// `c` standard deviations of the recent quote changes outside the touch.
    Dynamic {
        c: f64,
        estimator: VolatilityEstimator,
    },
}

/// Posts one resting bid and one resting ask, waits for the market to come to them,
/// and pulls any quote that sits unfilled for `patience` ticks.
///
/// Each tick first works the quotes already resting, then re-quotes any empty side
/// off the current touch. A quote never trades on the tick it was posted.
pub struct MarketMakerAgent {
    books: AgentBooks,
    quotes: QuoteModel,
    volume: f64,
    patience: u32,
    bid_order: Option<f64>,
    ask_order: Option<f64>,
    bid_wait: u32,
    ask_wait: u32,
    bid_fills: u64,
    ask_fills: u64,
}

impl MarketMakerAgent {
    pub fn new(capital: f64) -> Self {
        Self::from_parts(
            capital,
            QuoteModel::Static {
                dbid: MM_DBID,
                dask: MM_DASK,
                tick_size: MM_TICK_SIZE,
            },
            MM_VOLUME,
            MM_PATIENCE,
        )
    }

    pub fn with_static_quotes(
        capital: f64,
        dbid: f64,
        dask: f64,
        tick_size: f64,
        volume: f64,
        patience: u32,
    ) -> Result<Self> {
        for (name, v) in [("dbid", dbid), ("dask", dask), ("tick_size", tick_size)] {
            if !v.is_finite() || v < 0.0 {
                return Err(AllocatorError::InvalidParameter(format!(
                    "{name} must be finite and non-negative, got {v}"
                )));
            }
        }
        check_sizing(volume, patience)?;
        Ok(Self::from_parts(
            capital,
            QuoteModel::Static {
                dbid,
                dask,
                tick_size,
            },
            volume,
            patience,
        ))
    }

    pub fn with_dynamic_quotes(
        capital: f64,
        c: f64,
        mode: EstimatorMode,
        volume: f64,
        patience: u32,
    ) -> Result<Self> {
        if !c.is_finite() || c < 0.0 {
            return Err(AllocatorError::InvalidParameter(format!(
                "sigma multiplier must be finite and non-negative, got {c}"
            )));
        }
        check_sizing(volume, patience)?;
        Ok(Self::from_parts(
            capital,
            QuoteModel::Dynamic {
                c,
                estimator: VolatilityEstimator::new(mode),
            },
            volume,
            patience,
        ))
    }

    fn from_parts(capital: f64, quotes: QuoteModel, volume: f64, patience: u32) -> Self {
        Self {
            books: AgentBooks::new(capital),
            quotes,
            volume,
            patience,
            bid_order: None,
            ask_order: None,
            bid_wait: 0,
            ask_wait: 0,
            bid_fills: 0,
            ask_fills: 0,
        }
    }

    /// Prices at which fresh quotes would be posted against this touch.
    fn quote_prices(&self, bid: f64, ask: f64) -> (f64, f64) {
        match &self.quotes {
            QuoteModel::Static {
                dbid,
                dask,
                tick_size,
            } => (bid - dbid * tick_size, ask + dask * tick_size),
            QuoteModel::Dynamic { c, estimator } => (
                bid - c * estimator.sigma_bid(),
                ask + c * estimator.sigma_ask(),
            ),
        }
    }

    pub fn bid_order(&self) -> Option<f64> {
        self.bid_order
    }

    pub fn ask_order(&self) -> Option<f64> {
        self.ask_order
    }

    /// Ticks each resting quote has waited, (bid, ask).
    pub fn waits(&self) -> (u32, u32) {
        (self.bid_wait, self.ask_wait)
    }

    /// Number of filled quotes, (bid, ask).
    pub fn fills(&self) -> (u64, u64) {
        (self.bid_fills, self.ask_fills)
    }

    pub fn estimator(&self) -> Option<&VolatilityEstimator> {
        match &self.quotes {
            QuoteModel::Dynamic { estimator, .. } => Some(estimator),
            QuoteModel::Static { .. } => None,
        }
    }

    fn work_bid(&mut self, bid: f64) {
        let Some(price) = self.bid_order else {
            return;
        };
        if bid <= price {
            let qty = if price > 0.0 {
                self.volume.min(self.books.cash / price)
            } else {
                0.0
            };
            self.books.buy_with_cash(qty * price, price);
            self.bid_order = None;
            self.bid_wait = 0;
            self.bid_fills += 1;
        } else {
            self.bid_wait += 1;
            if self.bid_wait >= self.patience {
                self.bid_order = None;
                self.bid_wait = 0;
            }
        }
    }

    fn work_ask(&mut self, ask: f64) {
        let Some(price) = self.ask_order else {
            return;
        };
        if ask >= price {
            let qty = self.volume.min(self.books.asset);
            self.books.liquidate(qty, price);
            self.ask_order = None;
            self.ask_wait = 0;
            self.ask_fills += 1;
        } else {
            self.ask_wait += 1;
            if self.ask_wait >= self.patience {
                self.ask_order = None;
                self.ask_wait = 0;
            }
        }
    }
}

fn check_sizing(volume: f64, patience: u32) -> Result<()> {
    if !volume.is_finite() || volume < 0.0 {
        return Err(AllocatorError::InvalidParameter(format!(
            "quote volume must be finite and non-negative, got {volume}"
        )));
    }
    if patience == 0 {
        return Err(AllocatorError::InvalidParameter(
            "patience must be at least one tick".to_string(),
        ));
    }
    Ok(())
}

impl Agent for MarketMakerAgent {
    fn act(&mut self, bid: f64, ask: f64, _rng: &mut dyn RngCore) {
        if let QuoteModel::Dynamic { estimator, .. } = &mut self.quotes {
            estimator.update(bid, ask);
        }

        // Only quotes from earlier ticks can trade against this one.
        self.work_bid(bid);
        self.work_ask(ask);

        let (bid_px, ask_px) = self.quote_prices(bid, ask);
        if self.bid_order.is_none() {
            self.bid_order = Some(bid_px);
            self.bid_wait = 0;
        }
        if self.ask_order.is_none() {
            self.ask_order = Some(ask_px);
            self.ask_wait = 0;
        }
    }

    fn books(&self) -> &AgentBooks {
        &self.books
    }

    fn books_mut(&mut self) -> &mut AgentBooks {
        &mut self.books
    }

    fn name(&self) -> &'static str {
        match self.quotes {
            QuoteModel::Static { .. } => "market_maker",
            QuoteModel::Dynamic { .. } => "dynamic_market_maker",
        }
    }
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn static_mm(patience: u32) -> MarketMakerAgent {
        MarketMakerAgent::with_static_quotes(1_000.0, 1.0, 1.0, 0.5, 1.0, patience).unwrap()
    }

    #[test]
    fn posts_quotes_outside_the_touch() {
        let mut mm = static_mm(5);
        let mut rng = StdRng::seed_from_u64(0);

        mm.act(100.0, 101.0, &mut rng);

        assert_eq!(mm.bid_order(), Some(99.5));
        assert_eq!(mm.ask_order(), Some(101.5));
        assert_eq!(mm.waits(), (0, 0));
        assert_eq!(mm.fills(), (0, 0));
    }

    #[test]
    fn crossing_the_resting_bid_fills_exactly_once() {
        // Arrange
        let mut mm = static_mm(5);
        let mut rng = StdRng::seed_from_u64(0);
        mm.act(100.0, 101.0, &mut rng);

        // Act: the market bid trades through 99.5.
        mm.act(99.4, 100.4, &mut rng);

        // Assert: the filled quote is gone and a fresh one rests off the new touch.
        assert_eq!(mm.fills(), (1, 0));
        assert_eq!(mm.waits().0, 0, "patience counter resets on a fill");
        let requoted = mm.bid_order().unwrap();
        assert!((requoted - (99.4 - 0.5)).abs() < 1e-12);
        assert!((mm.books().asset - 1.0).abs() < 1e-12);
        assert!((mm.books().cash - (1_000.0 - 99.5)).abs() < 1e-9);

        // The market moves back up and never crosses again.
        for _ in 0..3 {
            mm.act(100.0, 101.0, &mut rng);
        }
        assert_eq!(mm.fills().0, 1);
        assert_eq!(mm.bid_order(), Some(requoted));
        assert_eq!(mm.waits().0, 3);
    }

    #[test]
    fn unfilled_quotes_are_pulled_after_patience_runs_out() {
        // Arrange: posted on the first tick, then waits two ticks.
        let mut mm = static_mm(3);
        let mut rng = StdRng::seed_from_u64(0);
        mm.act(100.0, 101.0, &mut rng);
        mm.act(100.0, 101.0, &mut rng);
        mm.act(100.0, 101.0, &mut rng);
        assert_eq!(mm.waits(), (2, 2));

        // Act: third unfilled tick hits the patience limit.
        mm.act(100.2, 100.8, &mut rng);

        // Assert: old quotes were cancelled unfilled and replaced off the new touch.
        assert_eq!(mm.fills(), (0, 0));
        assert_eq!(mm.waits(), (0, 0));
        assert!((mm.bid_order().unwrap() - 99.7).abs() < 1e-12);
        assert!((mm.ask_order().unwrap() - 101.3).abs() < 1e-12);
        assert_eq!(mm.books().cash, 1_000.0);
    }

    #[test]
    fn ask_fill_liquidates_the_inventory() {
        // Arrange
        let mut mm = static_mm(5);
        mm.books_mut().buy_with_cash(300.0, 100.0); // 3 units
        let mut rng = StdRng::seed_from_u64(0);
        mm.act(100.0, 101.0, &mut rng);

        // Act: ask lifts through 101.5.
        mm.act(101.0, 102.0, &mut rng);

        // Assert: credit sized on one unit, whole inventory gone.
        assert_eq!(mm.fills(), (0, 1));
        assert_eq!(mm.books().asset, 0.0);
        assert!((mm.books().cash - (700.0 + 101.5)).abs() < 1e-9);
        assert_eq!(mm.ask_order(), Some(102.5));
    }

    #[test]
    fn bid_fill_is_capped_by_cash() {
        let mut mm =
            MarketMakerAgent::with_static_quotes(50.0, 1.0, 1.0, 0.5, 1.0, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        mm.act(100.0, 101.0, &mut rng);

        mm.act(99.0, 100.0, &mut rng);

        assert!(mm.books().cash.abs() < 1e-9);
        assert!((mm.books().asset - 50.0 / 99.5).abs() < 1e-12);
    }

    #[test]
    fn quotes_never_fill_on_the_tick_they_are_posted() {
        // Zero offsets put both quotes exactly on the touch.
        let mut dynamic =
            MarketMakerAgent::with_dynamic_quotes(1_000.0, 1.0, EstimatorMode::Faithful, 1.0, 5)
                .unwrap();
        let mut flat_static =
            MarketMakerAgent::with_static_quotes(1_000.0, 0.0, 0.0, 0.5, 1.0, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        dynamic.act(100.0, 101.0, &mut rng);
        flat_static.act(100.0, 101.0, &mut rng);

        for mm in [&dynamic, &flat_static] {
            assert_eq!(mm.fills(), (0, 0));
            assert_eq!(mm.bid_order(), Some(100.0));
            assert_eq!(mm.ask_order(), Some(101.0));
            assert_eq!(mm.books().cash, 1_000.0);
        }
    }

    #[test]
    fn flat_market_with_offset_quotes_never_trades() {
        let mut mm = static_mm(4);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..10 {
            mm.act(100.0, 101.0, &mut rng);
        }

        assert_eq!(mm.fills(), (0, 0));
        assert_eq!(mm.books().cash, 1_000.0);
        assert_eq!(mm.books().asset, 0.0);
    }

    #[test]
    fn dynamic_quotes_widen_with_volatility() {
        // Arrange: the touch wanders inside the first quotes, so nothing fills and the
        // quotes are replaced once patience runs out.
        let mut mm =
            MarketMakerAgent::with_dynamic_quotes(1_000.0, 2.0, EstimatorMode::Faithful, 1.0, 2)
                .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let quotes = [(100.0, 101.0), (100.5, 100.8), (100.2, 100.9)];

        // Act
        for (bid, ask) in quotes {
            mm.act(bid, ask, &mut rng);
        }

        // Assert: bid deltas 0.5, -0.3 and ask deltas -0.2, 0.1.
        assert_eq!(mm.fills(), (0, 0));
        let est = mm.estimator().unwrap();
        assert_eq!(est.count(), 2);
        assert!((est.sigma_bid() - 0.4).abs() < 1e-9);
        assert!((est.sigma_ask() - 0.15).abs() < 1e-9);
        assert!((mm.bid_order().unwrap() - (100.2 - 2.0 * est.sigma_bid())).abs() < 1e-12);
        assert!((mm.ask_order().unwrap() - (100.9 + 2.0 * est.sigma_ask())).abs() < 1e-12);
        assert_eq!(mm.books().cash, 1_000.0);
    }

    #[test]
    fn rejects_zero_patience() {
        assert!(MarketMakerAgent::with_static_quotes(1_000.0, 1.0, 1.0, 0.5, 1.0, 0).is_err());
        assert!(
            MarketMakerAgent::with_dynamic_quotes(1_000.0, 1.0, EstimatorMode::Welford, 1.0, 0)
                .is_err()
        );
    }
}
