//! Base accident and health coverage by income tier

use serde::{Deserialize, Serialize};

use super::tiers::IncomeTier;

/// Year-0 coverage amounts for one tier
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageAmounts {
    pub accident: f64,
    pub health: f64,
}

impl CoverageAmounts {
    pub const fn new(accident: f64, health: f64) -> Self {
        Self { accident, health }
    }

    /// Returned for a tier the table has no entry for
    pub const ZERO: CoverageAmounts = CoverageAmounts::new(0.0, 0.0);
}

/// Standard package coverage, indexed by tier order
const STANDARD_COVERAGE: [CoverageAmounts; 5] = [
    CoverageAmounts::new(100_000.0, 50_000.0),
    CoverageAmounts::new(200_000.0, 75_000.0),
    CoverageAmounts::new(300_000.0, 100_000.0),
    CoverageAmounts::new(400_000.0, 150_000.0),
    CoverageAmounts::new(500_000.0, 200_000.0),
];

/// Mapping from income tier to base coverage
///
/// Entries loaded from CSV may be incomplete; a missing tier resolves to
/// [`CoverageAmounts::ZERO`] instead of failing the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageTable {
    entries: [Option<CoverageAmounts>; 5],
}

impl CoverageTable {
    /// Standard package table
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_COVERAGE.map(Some),
        }
    }

    /// Table with no entries; populate with [`CoverageTable::set`]
    pub fn empty() -> Self {
        Self { entries: [None; 5] }
    }

    pub fn set(&mut self, tier: IncomeTier, amounts: CoverageAmounts) {
        self.entries[tier.index()] = Some(amounts);
    }

    pub fn contains(&self, tier: IncomeTier) -> bool {
        self.entries[tier.index()].is_some()
    }

    /// Tiers with no entry
    pub fn missing_tiers(&self) -> Vec<IncomeTier> {
        IncomeTier::ALL
            .into_iter()
            .filter(|tier| self.entries[tier.index()].is_none())
            .collect()
    }

    /// Base coverage for a tier
    pub fn get(&self, tier: IncomeTier) -> CoverageAmounts {
        match self.entries[tier.index()] {
            Some(amounts) => amounts,
            None => {
                log::warn!("no coverage entry for tier {}, using zero coverage", tier.as_str());
                CoverageAmounts::ZERO
            }
        }
    }

    /// Base coverage for a tier label (short name or descriptive label)
    ///
    /// An unrecognized label yields zero coverage. Under a correctly wired
    /// classifier this is unreachable.
    pub fn lookup(&self, label: &str) -> CoverageAmounts {
        match IncomeTier::from_label(label) {
            Some(tier) => self.get(tier),
            None => {
                log::warn!("unrecognized tier label {:?}, using zero coverage", label);
                CoverageAmounts::ZERO
            }
        }
    }
}

impl Default for CoverageTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CoverageTable::standard();
        assert_eq!(table.get(IncomeTier::Low), CoverageAmounts::new(100_000.0, 50_000.0));
        assert_eq!(table.get(IncomeTier::MiddleLow), CoverageAmounts::new(200_000.0, 75_000.0));
        assert_eq!(table.get(IncomeTier::Middle), CoverageAmounts::new(300_000.0, 100_000.0));
        assert_eq!(table.get(IncomeTier::UpperMiddle), CoverageAmounts::new(400_000.0, 150_000.0));
        assert_eq!(table.get(IncomeTier::High), CoverageAmounts::new(500_000.0, 200_000.0));
        assert!(table.missing_tiers().is_empty());
    }

    #[test]
    fn test_lookup_by_label() {
        let table = CoverageTable::standard();
        let high = table.lookup("High Income (50K - 10 Lakh/year)");
        assert_eq!(high.accident, 500_000.0);
        assert_eq!(table.lookup("Middle").health, 100_000.0);
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_zero() {
        let table = CoverageTable::standard();
        assert_eq!(table.lookup("Ultra High Income"), CoverageAmounts::ZERO);
    }

    #[test]
    fn test_missing_entry_falls_back_to_zero() {
        let mut table = CoverageTable::empty();
        table.set(IncomeTier::Low, CoverageAmounts::new(1.0, 2.0));
        assert_eq!(table.get(IncomeTier::Low), CoverageAmounts::new(1.0, 2.0));
        assert_eq!(table.get(IncomeTier::High), CoverageAmounts::ZERO);
        assert_eq!(table.missing_tiers().len(), 4);
    }
}
