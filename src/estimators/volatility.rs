// src/estimators/volatility.rs

use serde::{Deserialize, Serialize};

/// How the running dispersion is accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorMode {
    /// The single-pass recurrence the market makers were calibrated with. The
    /// previous step's sigma is fed back in where a variance would normally go.
    #[default]
    Faithful,
    /// Textbook Welford: keeps a sum of squared deviations and reports the
    /// population standard deviation.
    Welford,
}

/// Running statistics for one side of the quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SideStats {
    pub mean: f64,
    pub sigma: f64,
    // Welford's sum of squared deviations; unused in faithful mode.
    m2: f64,
}

impl SideStats {
    fn update(&mut self, x: f64, cpt: f64, mode: EstimatorMode) {
        let old_mean = self.mean;
        self.mean = self.mean * (cpt - 1.0) / cpt + x / cpt;
        match mode {
            EstimatorMode::Faithful => {
                // `sigma` is treated as an untyped accumulator here.
                let acc = self.sigma;
                let var = acc + old_mean * old_mean - self.mean * self.mean
                    + (x * x - acc - old_mean * old_mean) / cpt;
                // round-off can push an exact zero slightly negative
                self.sigma = var.max(0.0).sqrt();
            }
            EstimatorMode::Welford => {
                self.m2 += (x - old_mean) * (x - self.mean);
                self.sigma = (self.m2.max(0.0) / cpt).sqrt();
            }
        }
    }
}

/// Incremental mean and standard deviation of one-step quote changes, per side.
#[derive(Debug, Clone, Default)]
pub struct VolatilityEstimator {
    mode: EstimatorMode,
    cpt: u64,
    last: Option<(f64, f64)>, // (bid, ask)
    bid: SideStats,
    ask: SideStats,
}

impl VolatilityEstimator {
    pub fn new(mode: EstimatorMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Feeds one quote. The first quote only seeds the previous prices.
    pub fn update(&mut self, bid: f64, ask: f64) {
        let Some((old_bid, old_ask)) = self.last.replace((bid, ask)) else {
            return;
        };
        self.cpt += 1;
        let cpt = self.cpt as f64;
        self.ask.update(ask - old_ask, cpt, self.mode);
        self.bid.update(bid - old_bid, cpt, self.mode);
    }

    /// Number of deltas observed so far.
    pub fn count(&self) -> u64 {
        self.cpt
    }

    pub fn mode(&self) -> EstimatorMode {
        self.mode
    }

    pub fn bid_stats(&self) -> SideStats {
        self.bid
    }

    pub fn ask_stats(&self) -> SideStats {
        self.ask
    }

    pub fn sigma_bid(&self) -> f64 {
        self.bid.sigma
    }

    pub fn sigma_ask(&self) -> f64 {
        self.ask.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::statistics::Statistics;

    fn feed(est: &mut VolatilityEstimator, quotes: &[(f64, f64)]) {
        for &(bid, ask) in quotes {
            est.update(bid, ask);
        }
    }

    #[test]
    fn first_quote_only_seeds_prices() {
        let mut est = VolatilityEstimator::new(EstimatorMode::Faithful);
        est.update(100.0, 101.0);
        assert_eq!(est.count(), 0);
        assert_eq!(est.bid_stats(), SideStats::default());
        assert_eq!(est.ask_stats(), SideStats::default());
    }

    #[test]
    fn single_delta_has_zero_dispersion() {
        let mut est = VolatilityEstimator::new(EstimatorMode::Faithful);
        feed(&mut est, &[(100.0, 101.0), (102.0, 104.0)]);
        assert_eq!(est.count(), 1);
        assert!((est.bid_stats().mean - 2.0).abs() < 1e-12);
        assert!((est.ask_stats().mean - 3.0).abs() < 1e-12);
        assert_eq!(est.sigma_bid(), 0.0);
        assert_eq!(est.sigma_ask(), 0.0);
    }

    #[test]
    fn faithful_mode_reproduces_the_recurrence() {
        // Arrange: bid deltas 1, 5, 0.
        let mut est = VolatilityEstimator::new(EstimatorMode::Faithful);
        feed(&mut est, &[(100.0, 101.0), (101.0, 102.0), (106.0, 107.0), (106.0, 107.0)]);

        // Reference: run the recurrence by hand.
        let (mut mean, mut sigma) = (0.0_f64, 0.0_f64);
        for (i, x) in [1.0_f64, 5.0, 0.0].into_iter().enumerate() {
            let cpt = (i + 1) as f64;
            let old = mean;
            mean = mean * (cpt - 1.0) / cpt + x / cpt;
            let var = sigma + old * old - mean * mean + (x * x - sigma - old * old) / cpt;
            sigma = var.max(0.0).sqrt();
        }

        // Assert
        assert_eq!(est.count(), 3);
        assert!((est.bid_stats().mean - mean).abs() < 1e-12);
        assert!((est.sigma_bid() - sigma).abs() < 1e-12);
        // same deltas on the ask side
        assert!((est.sigma_ask() - sigma).abs() < 1e-12);
    }

    #[test]
    fn faithful_mode_differs_from_a_true_standard_deviation() {
        let mut est = VolatilityEstimator::new(EstimatorMode::Faithful);
        feed(&mut est, &[(100.0, 101.0), (101.0, 102.0), (106.0, 107.0), (106.0, 107.0)]);
        let truth = [1.0_f64, 5.0, 0.0].population_std_dev();
        assert!((est.sigma_bid() - truth).abs() > 1e-3);
    }

    #[test]
    fn welford_mode_matches_population_std_dev() {
        // Arrange
        let bids = [100.0, 100.5, 99.75, 101.0, 101.25, 100.0, 102.5, 101.5];
        let mut est = VolatilityEstimator::new(EstimatorMode::Welford);

        // Act
        for &b in &bids {
            est.update(b, b + 0.5);
        }

        // Assert
        let deltas: Vec<f64> = bids.windows(2).map(|w| w[1] - w[0]).collect();
        let expected_mean = deltas.iter().mean();
        let expected_sigma = deltas.iter().population_std_dev();
        assert!((est.bid_stats().mean - expected_mean).abs() < 1e-12);
        assert!((est.sigma_bid() - expected_sigma).abs() < 1e-12);
    }

    #[test]
    fn constant_quotes_never_produce_nan() {
        for mode in [EstimatorMode::Faithful, EstimatorMode::Welford] {
            let mut est = VolatilityEstimator::new(mode);
            for _ in 0..1_000 {
                est.update(100.1, 100.3);
            }
            assert!(est.sigma_bid().is_finite());
            assert_eq!(est.sigma_ask(), 0.0);
        }
    }
}
