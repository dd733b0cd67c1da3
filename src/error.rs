// src/error.rs

use thiserror::Error;

/// Everything that can go wrong while setting up an allocation run.
/// Once a run has been validated the round loop itself cannot fail.
#[derive(Error, Debug)]
pub enum AllocatorError {
    #[error("fraction {index} is {value}, expected a finite value in [0, 1]")]
    InvalidFraction { index: usize, value: f64 },

    #[error("fractions sum to {0}, expected 1")]
    FractionsDoNotSumToOne(f64),

    #[error("probability {index} is {value}, expected a value in [0, 1]")]
    InvalidProbability { index: usize, value: f64 },

    #[error("exploration schedule needs C > 0 and alpha > 0 (got C = {c}, alpha = {alpha})")]
    InvalidSchedule { c: f64, alpha: f64 },

    #[error("length mismatch: expected {expected} entries, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("{requested} rounds requested but only {available} ticks are available")]
    NotEnoughTicks { requested: usize, available: usize },

    #[error("at least one agent is required")]
    NoAgents,

    #[error("invalid strategy parameter: {0}")]
    InvalidParameter(String),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AllocatorError>;
