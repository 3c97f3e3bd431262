//! Pricing assumptions: income tiers, base coverage, and premium/growth rates

mod tiers;
mod coverage;
mod rates;
pub mod loader;

pub use tiers::{IncomeTier, TierSchedule, categorize_income};
pub use coverage::{CoverageAmounts, CoverageTable};
pub use rates::{RateAssumptions, DEFAULT_GROWTH_RATE, DEFAULT_PREMIUM_RATE};
pub use loader::LoadedAssumptions;

use std::path::Path;

use crate::error::Result;

/// Container for all prediction assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub tiers: TierSchedule,
    pub coverage: CoverageTable,
    pub rates: RateAssumptions,
}

impl Assumptions {
    /// Create assumptions with the standard package constants
    pub fn default_pricing() -> Self {
        Self {
            tiers: TierSchedule::default_thresholds(),
            coverage: CoverageTable::standard(),
            rates: RateAssumptions::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            tiers: loaded.tiers,
            coverage: loaded.coverage,
            rates: loaded.rates,
        })
    }

    /// Replace the growth rate, keeping everything else
    pub fn with_growth_rate(mut self, growth_rate: f64) -> Result<Self> {
        self.rates = RateAssumptions::new(self.rates.premium_rate, growth_rate)?;
        Ok(self)
    }

    /// Replace the premium rate, keeping everything else
    pub fn with_premium_rate(mut self, premium_rate: f64) -> Result<Self> {
        self.rates = RateAssumptions::new(premium_rate, self.rates.growth_rate)?;
        Ok(self)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}
