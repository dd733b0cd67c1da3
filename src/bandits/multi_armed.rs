// src/bandits/multi_armed.rs

use super::reward::RewardPredicate;
use super::schedule::ExplorationSchedule;
use super::trajectory::AllocationTable;
use super::{
    SUM_TOLERANCE, check_len, reward_arm, rescale_ratio, resolve_rounds, select_arm,
    validate_fractions, validate_probabilities,
};
use crate::agents::agent_trait::Agent;
use crate::error::Result;
use crate::types::MarketTick;
use log::{debug, info, warn};
use rand::Rng;

/// Rounds played by the synthetic experiment when no count is given.
pub const DEFAULT_MULTI_ROUNDS: usize = 973;

/// N arms with known success probabilities `ps`.
///
/// Each round draws once to pick an arm through the cumulative fractions and once for
/// the trial. Returns an `(n_iter + 1) x N` table whose first row is `x0`.
pub fn simple_multi_armed_bandit<R: Rng>(
    x0: &[f64],
    schedule: &ExplorationSchedule,
    ps: &[f64],
    n_iter: usize,
    rng: &mut R,
) -> Result<AllocationTable> {
    validate_fractions(x0)?;
    check_len(x0.len(), ps.len())?;
    validate_probabilities(ps)?;
    schedule.validate()?;

    let mut fracs = x0.to_vec();
    let mut table = AllocationTable::with_capacity(x0, n_iter);
    for n in 0..n_iter {
        let gamma = schedule.gamma(n);
        let i = select_arm(&fracs, rng.gen_range(0.0..1.0));
        if rng.gen_range(0.0..1.0) < ps[i] {
            fracs = reward_arm(&fracs, i, gamma);
        }
        table.push_row(&fracs);
    }
    Ok(table)
}

/// N live strategies competing for capital on a stream of quotes.
///
/// Every agent trades every tick, one agent is sampled and tested, and on a pass all
/// agents (the winner included) are rescaled by `new[k] / old[k]`. Agents already at
/// a zero fraction are left untouched, and a warning is logged when a share first
/// reaches zero. `n_iter` defaults to the number of ticks.
pub fn agent_multi_armed_bandit<R, P>(
    ticks: &[MarketTick],
    agents: &mut [Box<dyn Agent>],
    x0: &[f64],
    schedule: &ExplorationSchedule,
    n_iter: Option<usize>,
    predicate: &P,
    rng: &mut R,
) -> Result<AllocationTable>
where
    R: Rng,
    P: RewardPredicate + ?Sized,
{
    validate_fractions(x0)?;
    check_len(x0.len(), agents.len())?;
    schedule.validate()?;
    let rounds = resolve_rounds(n_iter, ticks.len())?;
    info!(
        "multi-armed allocation: {} agents, {rounds} rounds, C = {}, alpha = {}",
        agents.len(),
        schedule.c(),
        schedule.alpha()
    );
    for (i, &f) in x0.iter().enumerate() {
        if f == 0.0 {
            warn!("agent {i} ({}) starts with no capital share", agents[i].name());
        }
    }

    let mut fracs = x0.to_vec();
    let mut table = AllocationTable::with_capacity(x0, rounds);
    for (n, tick) in ticks.iter().take(rounds).enumerate() {
        for agent in agents.iter_mut() {
            agent.act(tick.bid, tick.ask, rng);
        }

        let gamma = schedule.gamma(n);
        let i = select_arm(&fracs, rng.gen_range(0.0..1.0));
        agents[i].calc_pnl(tick.bid);
        if predicate.passed(agents[i].books()) {
            let next = reward_arm(&fracs, i, gamma);
            for (k, agent) in agents.iter_mut().enumerate() {
                agent.rescale_capital(rescale_ratio(next[k], fracs[k]));
            }
            debug!(
                "round {n}: {} ({i}) passed, share {:.6} -> {:.6}",
                agents[i].name(),
                fracs[i],
                next[i]
            );
            for (k, agent) in agents.iter().enumerate() {
                if next[k] == 0.0 && fracs[k] > 0.0 {
                    warn!("round {n}: agent {k} ({}) starved of capital", agent.name());
                }
            }
            fracs = next;

            let drift = (fracs.iter().sum::<f64>() - 1.0).abs();
            if drift > SUM_TOLERANCE {
                warn!("round {n}: fractions drifted {drift:e} away from 1");
            }
        }
        table.push_row(&fracs);
    }

    info!("multi-armed allocation finished: {:?}", fracs);
    Ok(table)
}
