// src/bandits/trajectory.rs

use serde::Serialize;

/// Fractions held by arm A and arm B after every round, initial value included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoArmedTrajectory {
    pub frac_a: Vec<f64>,
    pub frac_b: Vec<f64>,
}

impl TwoArmedTrajectory {
    pub(crate) fn with_capacity(x0: f64, rounds: usize) -> Self {
        let mut frac_a = Vec::with_capacity(rounds + 1);
        let mut frac_b = Vec::with_capacity(rounds + 1);
        frac_a.push(x0);
        frac_b.push(1.0 - x0);
        Self { frac_a, frac_b }
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.frac_a.push(x);
        self.frac_b.push(1.0 - x);
    }

    /// Number of recorded states (rounds + 1).
    pub fn len(&self) -> usize {
        self.frac_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frac_a.is_empty()
    }

    /// (A, B) after the last round.
    pub fn final_fractions(&self) -> (f64, f64) {
        let last = self.len() - 1;
        (self.frac_a[last], self.frac_b[last])
    }
}

/// `(rounds + 1) x agents` table of allocation fractions, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationTable {
    n_agents: usize,
    data: Vec<f64>,
}

impl AllocationTable {
    pub(crate) fn with_capacity(initial: &[f64], rounds: usize) -> Self {
        let mut data = Vec::with_capacity(initial.len() * (rounds + 1));
        data.extend_from_slice(initial);
        Self {
            n_agents: initial.len(),
            data,
        }
    }

    pub(crate) fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.n_agents);
        self.data.extend_from_slice(row);
    }

    pub fn n_agents(&self) -> usize {
        self.n_agents
    }

    /// Number of recorded rows (rounds + 1).
    pub fn n_rounds(&self) -> usize {
        self.data.len() / self.n_agents
    }

    pub fn row(&self, n: usize) -> &[f64] {
        &self.data[n * self.n_agents..(n + 1) * self.n_agents]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_agents)
    }

    /// Trajectory of one agent's fraction.
    pub fn column(&self, agent: usize) -> Vec<f64> {
        self.rows().map(|row| row[agent]).collect()
    }

    pub fn final_fractions(&self) -> &[f64] {
        self.row(self.n_rounds() - 1)
    }
}
