//! Premium and benefit growth rates

use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, Result};

/// Flat share of monthly income charged as premium
pub const DEFAULT_PREMIUM_RATE: f64 = 0.05;

/// Annual compound growth applied to base coverage
pub const DEFAULT_GROWTH_RATE: f64 = 0.05;

/// Rates applied by the predictor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateAssumptions {
    /// Premium as a fraction of monthly income (not tier-dependent)
    pub premium_rate: f64,

    /// Annual compound growth rate for projected benefits
    pub growth_rate: f64,
}

impl RateAssumptions {
    pub fn new(premium_rate: f64, growth_rate: f64) -> Result<Self> {
        let rates = Self { premium_rate, growth_rate };
        rates.validate()?;
        Ok(rates)
    }

    /// Premium must be a non-negative fraction; growth must keep (1 + rate) positive
    pub fn validate(&self) -> Result<()> {
        if !self.premium_rate.is_finite() || self.premium_rate < 0.0 {
            return Err(CoverageError::InvalidRate { name: "premium_rate", value: self.premium_rate });
        }
        if !self.growth_rate.is_finite() || self.growth_rate <= -1.0 {
            return Err(CoverageError::InvalidRate { name: "growth_rate", value: self.growth_rate });
        }
        Ok(())
    }

    /// Apply a named rate from an assumptions file
    pub fn set_named(&mut self, name: &str, value: f64) -> Result<()> {
        match name.trim() {
            "premium_rate" => self.premium_rate = value,
            "growth_rate" => self.growth_rate = value,
            other => return Err(CoverageError::UnknownRate(other.to_string())),
        }
        self.validate()
    }
}

impl Default for RateAssumptions {
    fn default() -> Self {
        Self {
            premium_rate: DEFAULT_PREMIUM_RATE,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}
