//! CSV-based assumption loader
//!
//! Loads the tier schedule, coverage table and rates from CSV files in data/assumptions/

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use super::coverage::{CoverageAmounts, CoverageTable};
use super::rates::RateAssumptions;
use super::tiers::{IncomeTier, TierSchedule};
use crate::error::Result;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const COVERAGE_TIERS_FILE: &str = "coverage_tiers.csv";
pub const RATES_FILE: &str = "rates.csv";

#[derive(Debug, Deserialize)]
struct CoverageTierRow {
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "UpperBound")]
    upper_bound: Option<f64>,
    #[serde(rename = "AccidentBase")]
    accident_base: f64,
    #[serde(rename = "HealthBase")]
    health_base: f64,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// Raw assumption tables as read from disk
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    pub tiers: TierSchedule,
    pub coverage: CoverageTable,
    pub rates: RateAssumptions,
}

impl LoadedAssumptions {
    /// Load every assumption file from a directory
    ///
    /// `rates.csv` is optional; defaults apply when it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        let (tiers, coverage) = load_coverage_tiers(File::open(path.join(COVERAGE_TIERS_FILE))?)?;

        let rates_path = path.join(RATES_FILE);
        let rates = if rates_path.exists() {
            load_rates(File::open(rates_path)?)?
        } else {
            log::info!("{} not found in {}, using default rates", RATES_FILE, path.display());
            RateAssumptions::default()
        };

        log::info!("loaded assumptions from {}", path.display());
        Ok(Self { tiers, coverage, rates })
    }
}

/// Load the tier schedule and coverage table from `Tier,UpperBound,AccidentBase,HealthBase` rows
///
/// Tiers absent from the file keep their standard threshold but get no coverage entry.
pub fn load_coverage_tiers<R: Read>(reader: R) -> Result<(TierSchedule, CoverageTable)> {
    let mut reader = Reader::from_reader(reader);
    let defaults = TierSchedule::default_thresholds();

    let mut bounds: [Option<f64>; 4] = [None; 4];
    let mut coverage = CoverageTable::empty();

    for result in reader.deserialize() {
        let row: CoverageTierRow = result?;
        let tier: IncomeTier = row.tier.parse()?;

        if coverage.contains(tier) {
            log::warn!("duplicate row for tier {}, later row replaces earlier one", tier.as_str());
        }

        match (row.upper_bound, bounds.get_mut(tier.index())) {
            (Some(bound), Some(slot)) => *slot = Some(bound),
            (Some(bound), None) => {
                log::warn!("ignoring upper bound {} on catch-all tier {}", bound, tier.as_str());
            }
            (None, _) => {}
        }
        coverage.set(tier, CoverageAmounts::new(row.accident_base, row.health_base));
    }

    let mut resolved = [0.0; 4];
    for (i, tier) in IncomeTier::ALL.into_iter().take(4).enumerate() {
        resolved[i] = match bounds[i] {
            Some(bound) => bound,
            None => {
                let fallback = defaults.upper_bound(tier).unwrap_or_default();
                log::warn!("no upper bound for tier {}, using {}", tier.as_str(), fallback);
                fallback
            }
        };
    }

    let missing = coverage.missing_tiers();
    if !missing.is_empty() {
        log::warn!("coverage table has no entry for {:?}; those tiers quote zero coverage", missing);
    }

    Ok((TierSchedule::from_bounds(resolved)?, coverage))
}

/// Load named rates from `Name,Rate` rows on top of the defaults
pub fn load_rates<R: Read>(reader: R) -> Result<RateAssumptions> {
    let mut reader = Reader::from_reader(reader);
    let mut rates = RateAssumptions::default();

    for result in reader.deserialize() {
        let row: RateRow = result?;
        rates.set_named(&row.name, row.rate)?;
    }

    Ok(rates)
}
