//! Income tiers and the ascending threshold schedule used to classify monthly income

use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, Result};

/// Income bracket used to select base coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeTier {
    Low,
    MiddleLow,
    Middle,
    UpperMiddle,
    High,
}

impl IncomeTier {
    /// All tiers in ascending threshold order
    pub const ALL: [IncomeTier; 5] = [
        IncomeTier::Low,
        IncomeTier::MiddleLow,
        IncomeTier::Middle,
        IncomeTier::UpperMiddle,
        IncomeTier::High,
    ];

    /// Descriptive category label shown to the applicant
    pub fn label(&self) -> &'static str {
        match self {
            IncomeTier::Low => "Low Income (15K/month - 3 Lakh/year)",
            IncomeTier::MiddleLow => "Middle-Low Income (25K - 5 Lakh/year)",
            IncomeTier::Middle => "Middle Income (30K - 7 Lakh/year)",
            IncomeTier::UpperMiddle => "Upper-Middle Income (40K - 9 Lakh/year)",
            IncomeTier::High => "High Income (50K - 10 Lakh/year)",
        }
    }

    /// Short name used in CSV assumption files
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeTier::Low => "Low",
            IncomeTier::MiddleLow => "MiddleLow",
            IncomeTier::Middle => "Middle",
            IncomeTier::UpperMiddle => "UpperMiddle",
            IncomeTier::High => "High",
        }
    }

    /// Resolve a tier from either its short name or its descriptive label
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == label || tier.label() == label)
    }

    /// Position in the ascending schedule
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for IncomeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for IncomeTier {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| CoverageError::UnknownTier(s.to_string()))
    }
}

/// Inclusive upper bounds for each tier except the catch-all top tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSchedule {
    /// Upper bounds for Low, MiddleLow, Middle, UpperMiddle (ascending)
    upper_bounds: [f64; 4],
}

impl TierSchedule {
    /// Monthly income thresholds of the standard package
    pub fn default_thresholds() -> Self {
        Self {
            upper_bounds: [15_000.0, 25_000.0, 30_000.0, 40_000.0],
        }
    }

    /// Build a schedule from explicit bounds; bounds must be finite and strictly ascending
    pub fn from_bounds(upper_bounds: [f64; 4]) -> Result<Self> {
        for (i, &bound) in upper_bounds.iter().enumerate() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(CoverageError::InvalidRate { name: "tier upper bound", value: bound });
            }
            if i > 0 && bound <= upper_bounds[i - 1] {
                return Err(CoverageError::InvalidRate { name: "tier upper bound (not ascending)", value: bound });
            }
        }
        Ok(Self { upper_bounds })
    }

    /// Upper bound for a tier, None for the catch-all
    pub fn upper_bound(&self, tier: IncomeTier) -> Option<f64> {
        self.upper_bounds.get(tier.index()).copied()
    }

    /// Classify a monthly income, first matching band wins
    pub fn classify(&self, income: f64) -> IncomeTier {
        IncomeTier::ALL
            .into_iter()
            .zip(self.upper_bounds)
            .find(|&(_, bound)| income <= bound)
            .map(|(tier, _)| tier)
            .unwrap_or(IncomeTier::High)
    }
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self::default_thresholds()
    }
}

/// Classify income against the standard thresholds
pub fn categorize_income(income: f64) -> IncomeTier {
    TierSchedule::default_thresholds().classify(income)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_band_and_boundary() {
        assert_eq!(categorize_income(0.0), IncomeTier::Low);
        assert_eq!(categorize_income(10_000.0), IncomeTier::Low);
        assert_eq!(categorize_income(15_000.0), IncomeTier::Low);
        assert_eq!(categorize_income(15_000.01), IncomeTier::MiddleLow);
    }

    #[test]
    fn test_upper_boundaries_stay_in_lower_band() {
        assert_eq!(categorize_income(25_000.0), IncomeTier::MiddleLow);
        assert_eq!(categorize_income(25_000.01), IncomeTier::Middle);
        assert_eq!(categorize_income(30_000.0), IncomeTier::Middle);
        assert_eq!(categorize_income(30_000.01), IncomeTier::UpperMiddle);
        assert_eq!(categorize_income(40_000.0), IncomeTier::UpperMiddle);
        assert_eq!(categorize_income(40_000.01), IncomeTier::High);
        assert_eq!(categorize_income(5_000_000.0), IncomeTier::High);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let schedule = TierSchedule::default();
        let mut previous = IncomeTier::Low;
        for step in 0..=1000 {
            let tier = schedule.classify(step as f64 * 100.0);
            assert!(tier >= previous);
            previous = tier;
        }
        assert_eq!(previous, IncomeTier::High);
    }

    #[test]
    fn test_labels_round_trip() {
        for tier in IncomeTier::ALL {
            assert_eq!(IncomeTier::from_label(tier.label()), Some(tier));
            assert_eq!(tier.as_str().parse::<IncomeTier>().unwrap(), tier);
        }
        assert!(IncomeTier::from_label("Platinum").is_none());
        assert!(categorize_income(50_000.0).label().starts_with("High Income"));
    }

    #[test]
    fn test_schedule_rejects_unordered_bounds() {
        assert!(TierSchedule::from_bounds([10.0, 20.0, 30.0, 40.0]).is_ok());
        assert!(TierSchedule::from_bounds([10.0, 5.0, 30.0, 40.0]).is_err());
        assert!(TierSchedule::from_bounds([10.0, 20.0, f64::NAN, 40.0]).is_err());
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = TierSchedule::from_bounds([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(schedule.classify(2.5), IncomeTier::Middle);
        assert_eq!(schedule.upper_bound(IncomeTier::Middle), Some(3.0));
        assert_eq!(schedule.upper_bound(IncomeTier::High), None);
    }
}
