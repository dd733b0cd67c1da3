// src/simulators/gbm.rs

use super::market_trait::Marketable;
use crate::error::{AllocatorError, Result};
use crate::types::MarketTick;
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand_distr::Normal;

const TRADING_DAYS: f64 = 252.0;

/// Quotes around a mid price that follows daily geometric Brownian motion,
/// with a constant spread.
pub struct GbmQuoteSimulator {
    initial_mid: f64,
    drift: f64,
    volatility: f64,
    spread: f64,
    seed: u64,
    mid: f64,
    rng: StdRng,
    normal_dist: Normal<f64>,
}

impl GbmQuoteSimulator {
    /// `drift` and `volatility` are annualised; one step is one trading day.
    pub fn new(initial_mid: f64, drift: f64, volatility: f64, spread: f64, seed: u64) -> Result<Self> {
        if !(initial_mid.is_finite() && initial_mid > 0.0) {
            return Err(AllocatorError::InvalidParameter(format!(
                "initial mid must be positive, got {initial_mid}"
            )));
        }
        if !(spread.is_finite() && spread >= 0.0) {
            return Err(AllocatorError::InvalidParameter(format!(
                "spread must be non-negative, got {spread}"
            )));
        }
        if !(volatility.is_finite() && volatility >= 0.0) || !drift.is_finite() {
            return Err(AllocatorError::InvalidParameter(format!(
                "drift {drift} / volatility {volatility} out of range"
            )));
        }
        let normal_dist = Normal::new(0.0, 1.0)
            .map_err(|e| AllocatorError::InvalidParameter(e.to_string()))?;
        Ok(Self {
            initial_mid,
            drift,
            volatility,
            spread,
            seed,
            mid: initial_mid,
            rng: StdRng::seed_from_u64(seed),
            normal_dist,
        })
    }

    fn quote(&self) -> MarketTick {
        let half = self.spread / 2.0;
        MarketTick::new(self.mid + half, self.mid - half)
    }
}

impl Marketable for GbmQuoteSimulator {
    fn step(&mut self) -> MarketTick {
        let daily_drift = self.drift / TRADING_DAYS;
        let daily_volatility = self.volatility / TRADING_DAYS.sqrt();
        let random_shock = self.normal_dist.sample(&mut self.rng);
        // Ito-corrected log step, dt = 1 day
        self.mid *= ((daily_drift - 0.5 * daily_volatility.powi(2))
            + daily_volatility * random_shock)
            .exp();
        self.quote()
    }

    fn current_tick(&self) -> MarketTick {
        self.quote()
    }

    fn reset(&mut self) {
        self.mid = self.initial_mid;
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
