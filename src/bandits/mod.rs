// src/bandits/mod.rs

//! Capital allocation bandits.
//!
//! Every engine here shares one round structure: pick an arm with probability equal
//! to its current fraction, run a trial, and on success move `gamma_n` of the
//! remaining mass toward the winner. Failures are never punished. The agent-driven
//! engines then rescale each agent's books to its new fraction.

pub mod multi_armed;
pub mod reward;
pub mod schedule;
pub mod trajectory;
pub mod two_armed;

pub use multi_armed::{DEFAULT_MULTI_ROUNDS, agent_multi_armed_bandit, simple_multi_armed_bandit};
pub use reward::{PnlIncrease, RewardPredicate};
pub use schedule::ExplorationSchedule;
pub use trajectory::{AllocationTable, TwoArmedTrajectory};
pub use two_armed::{DEFAULT_SYNTHETIC_ROUNDS, agent_two_armed_bandit, simple_two_armed_bandit};

use crate::error::{AllocatorError, Result};

/// Tolerance on `sum(fracs) == 1`.
pub const SUM_TOLERANCE: f64 = 1e-9;

pub(crate) fn validate_fraction(index: usize, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(AllocatorError::InvalidFraction { index, value });
    }
    Ok(())
}

pub(crate) fn validate_fractions(fracs: &[f64]) -> Result<()> {
    if fracs.is_empty() {
        return Err(AllocatorError::NoAgents);
    }
    for (i, &f) in fracs.iter().enumerate() {
        validate_fraction(i, f)?;
    }
    let sum: f64 = fracs.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(AllocatorError::FractionsDoNotSumToOne(sum));
    }
    Ok(())
}

pub(crate) fn validate_probabilities(ps: &[f64]) -> Result<()> {
    for (index, &value) in ps.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(AllocatorError::InvalidProbability { index, value });
        }
    }
    Ok(())
}

pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(AllocatorError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Rounds to run against `available` ticks; all of them when unspecified.
pub(crate) fn resolve_rounds(n_iter: Option<usize>, available: usize) -> Result<usize> {
    match n_iter {
        None => Ok(available),
        Some(requested) if requested > available => Err(AllocatorError::NotEnoughTicks {
            requested,
            available,
        }),
        Some(requested) => Ok(requested),
    }
}

/// Ratio that moves an agent's books from `old` to `new`.
/// A fully starved agent has nothing to scale, so its books are left alone.
#[inline]
pub(crate) fn rescale_ratio(new: f64, old: f64) -> f64 {
    if old == 0.0 { 1.0 } else { new / old }
}

/// Inverse-CDF pick: the first arm whose cumulative fraction reaches `u`.
pub(crate) fn select_arm(fracs: &[f64], u: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, f) in fracs.iter().enumerate() {
        cumulative += f;
        if u <= cumulative {
            return i;
        }
    }
    // round-off left the total just under the draw
    fracs
        .iter()
        .rposition(|&f| f > 0.0)
        .unwrap_or(fracs.len() - 1)
}

/// Fractions after `winner` passes a trial with step `gamma`.
pub(crate) fn reward_arm(fracs: &[f64], winner: usize, gamma: f64) -> Vec<f64> {
    fracs
        .iter()
        .enumerate()
        .map(|(k, &f)| {
            if k == winner {
                f + gamma * (1.0 - f)
            } else {
                f - f * gamma
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_arm_walks_the_cdf() {
        let fracs = [0.2, 0.3, 0.5];
        assert_eq!(select_arm(&fracs, 0.0), 0);
        assert_eq!(select_arm(&fracs, 0.2), 0);
        assert_eq!(select_arm(&fracs, 0.2000001), 1);
        assert_eq!(select_arm(&fracs, 0.45), 1);
        assert_eq!(select_arm(&fracs, 0.99), 2);
    }

    #[test]
    fn select_arm_skips_starved_arms_on_round_off() {
        let fracs = [0.5, 0.4999999999, 0.0];
        assert_eq!(select_arm(&fracs, 0.99999999999), 1);
    }

    #[test]
    fn reward_arm_conserves_mass() {
        let fracs = [0.1, 0.2, 0.3, 0.4];
        let next = reward_arm(&fracs, 2, 0.35);
        assert!((next.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((next[2] - (0.3 + 0.35 * 0.7)).abs() < 1e-12);
        assert!((next[0] - 0.1 * 0.65).abs() < 1e-12);
    }

    #[test]
    fn starved_agents_get_a_no_op_ratio() {
        assert_eq!(rescale_ratio(0.0, 0.0), 1.0);
        assert_eq!(rescale_ratio(0.3, 0.6), 0.5);
    }

    #[test]
    fn fraction_validation() {
        assert!(validate_fractions(&[0.5, 0.5]).is_ok());
        assert!(validate_fractions(&[]).is_err());
        assert!(validate_fractions(&[0.5, 0.6]).is_err());
        assert!(validate_fractions(&[1.5, -0.5]).is_err());
        assert!(validate_fractions(&[f64::NAN, 1.0]).is_err());
        assert!(validate_probabilities(&[0.0, 1.0]).is_ok());
        assert!(validate_probabilities(&[1.01]).is_err());
    }

    #[test]
    fn rounds_default_to_the_tick_count() {
        assert_eq!(resolve_rounds(None, 42).unwrap(), 42);
        assert_eq!(resolve_rounds(Some(10), 42).unwrap(), 10);
        assert!(resolve_rounds(Some(43), 42).is_err());
    }
}
