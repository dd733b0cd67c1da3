// src/bandits/schedule.rs

use crate::error::{AllocatorError, Result};
use serde::{Deserialize, Serialize};

/// Decaying step size of the allocator: `gamma_n = (C / (C + n + 1))^alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSchedule {
    c: f64,
    alpha: f64,
}

impl ExplorationSchedule {
    pub fn new(c: f64, alpha: f64) -> Result<Self> {
        let schedule = Self { c, alpha };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Checks a schedule that may have been deserialized without going through `new`.
    pub fn validate(&self) -> Result<()> {
        let ok = self.c.is_finite() && self.alpha.is_finite() && self.c > 0.0 && self.alpha > 0.0;
        if !ok {
            return Err(AllocatorError::InvalidSchedule {
                c: self.c,
                alpha: self.alpha,
            });
        }
        Ok(())
    }

    /// Step size for round `n` (0-indexed).
    #[inline]
    pub fn gamma(&self, n: usize) -> f64 {
        (self.c / (self.c + n as f64 + 1.0)).powf(self.alpha)
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
