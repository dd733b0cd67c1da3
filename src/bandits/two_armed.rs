// src/bandits/two_armed.rs

use super::reward::RewardPredicate;
use super::schedule::ExplorationSchedule;
use super::trajectory::TwoArmedTrajectory;
use super::{rescale_ratio, resolve_rounds, validate_fraction, validate_probabilities};
use crate::agents::agent_trait::Agent;
use crate::error::Result;
use crate::types::MarketTick;
use log::{debug, info, warn};
use rand::Rng;

/// Rounds played by the synthetic experiment when no count is given.
pub const DEFAULT_SYNTHETIC_ROUNDS: usize = 1000;

/// Two arms with known success probabilities `pa` and `pb`.
///
/// Each round draws once to pick an arm (A with probability `x`) and once for the
/// trial. Returns `n_iter + 1` states including `x0`.
pub fn simple_two_armed_bandit<R: Rng>(
    x0: f64,
    schedule: &ExplorationSchedule,
    pa: f64,
    pb: f64,
    n_iter: usize,
    rng: &mut R,
) -> Result<TwoArmedTrajectory> {
    validate_fraction(0, x0)?;
    validate_probabilities(&[pa, pb])?;
    schedule.validate()?;

    let mut x = x0;
    let mut trajectory = TwoArmedTrajectory::with_capacity(x0, n_iter);
    for n in 0..n_iter {
        let gamma = schedule.gamma(n);
        if rng.gen_range(0.0..1.0) < x {
            if rng.gen_range(0.0..1.0) < pa {
                x = grow_a(x, gamma);
            }
        } else if rng.gen_range(0.0..1.0) < pb {
            x = grow_b(x, gamma);
        }
        trajectory.push(x);
    }
    Ok(trajectory)
}

/// Two live strategies competing for capital on a stream of quotes.
///
/// Both agents trade every tick; then one of them is picked and tested with
/// `predicate` on its fresh PnL. On a pass the fractions move and both agents' books
/// are rescaled to the new split. `n_iter` defaults to the number of ticks.
#[allow(clippy::too_many_arguments)]
pub fn agent_two_armed_bandit<R, P>(
    ticks: &[MarketTick],
    agent_a: &mut dyn Agent,
    agent_b: &mut dyn Agent,
    x0: f64,
    schedule: &ExplorationSchedule,
    n_iter: Option<usize>,
    predicate: &P,
    rng: &mut R,
) -> Result<TwoArmedTrajectory>
where
    R: Rng,
    P: RewardPredicate + ?Sized,
{
    validate_fraction(0, x0)?;
    schedule.validate()?;
    let rounds = resolve_rounds(n_iter, ticks.len())?;
    info!(
        "two-armed allocation: {} vs {}, x0 = {x0}, {rounds} rounds",
        agent_a.name(),
        agent_b.name()
    );

    let mut x = x0;
    let mut trajectory = TwoArmedTrajectory::with_capacity(x0, rounds);
    for (n, tick) in ticks.iter().take(rounds).enumerate() {
        agent_a.act(tick.bid, tick.ask, rng);
        agent_b.act(tick.bid, tick.ask, rng);

        let gamma = schedule.gamma(n);
        let next = if rng.gen_range(0.0..1.0) < x {
            agent_a.calc_pnl(tick.bid);
            predicate.passed(agent_a.books()).then(|| grow_a(x, gamma))
        } else {
            agent_b.calc_pnl(tick.bid);
            predicate.passed(agent_b.books()).then(|| grow_b(x, gamma))
        };

        if let Some(nx) = next {
            debug!("round {n}: x {x:.6} -> {nx:.6} (gamma {gamma:.6})");
            if nx == 0.0 && x > 0.0 {
                warn!("round {n}: {} starved of capital", agent_a.name());
            } else if nx == 1.0 && x < 1.0 {
                warn!("round {n}: {} starved of capital", agent_b.name());
            }
            agent_a.rescale_capital(rescale_ratio(nx, x));
            agent_b.rescale_capital(rescale_ratio(1.0 - nx, 1.0 - x));
            x = nx;
        }
        trajectory.push(x);
    }

    info!("two-armed allocation finished: A holds {x:.6}");
    Ok(trajectory)
}

#[inline]
fn grow_a(x: f64, gamma: f64) -> f64 {
    (x + gamma * (1.0 - x)).clamp(0.0, 1.0)
}

#[inline]
fn grow_b(x: f64, gamma: f64) -> f64 {
    (x - gamma * x).clamp(0.0, 1.0)
}
