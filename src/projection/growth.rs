//! Compound growth of base coverage and year-by-year growth series

use serde::{Deserialize, Serialize};

use crate::assumptions::DEFAULT_GROWTH_RATE;

/// Legend label for the accident series
pub const ACCIDENT_SERIES_LABEL: &str = "Accident Coverage";

/// Legend label for the health series
pub const HEALTH_SERIES_LABEL: &str = "Health Coverage";

/// Future value of a base amount after `years` of compound growth
///
/// Evaluated as a single `powf` so rounding does not depend on the horizon and every
/// `u32` horizon is exact. `years == 0` returns `base` unchanged.
pub fn project_benefit(base: f64, years: u32, growth_rate: f64) -> f64 {
    base * (1.0 + growth_rate).powf(f64::from(years))
}

/// Future value at the standard 5% growth rate
pub fn calculate_future_benefits(base: f64, years: u32) -> f64 {
    project_benefit(base, years, DEFAULT_GROWTH_RATE)
}

/// Projected value at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub value: f64,
}

/// Projected values for one benefit type, years 1..=horizon in ascending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    /// Legend label for the chart
    pub label: String,

    pub base: f64,

    pub points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    /// Project `base` for every year from 1 through `horizon`
    pub fn project(label: impl Into<String>, base: f64, horizon: u32, growth_rate: f64) -> Self {
        let points = (1..=horizon)
            .map(|year| GrowthPoint {
                year,
                value: project_benefit(base, year, growth_rate),
            })
            .collect();

        Self {
            label: label.into(),
            base,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value at the final year, or the base for an empty series
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(self.base)
    }

    /// (x = year, y = amount) pairs for a line plot
    pub fn xy(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().map(|p| (p.year, p.value))
    }
}

/// Accident and health series over the same horizon
pub fn growth_series(
    accident_base: f64,
    health_base: f64,
    horizon: u32,
    growth_rate: f64,
) -> (GrowthSeries, GrowthSeries) {
    (
        GrowthSeries::project(ACCIDENT_SERIES_LABEL, accident_base, horizon, growth_rate),
        GrowthSeries::project(HEALTH_SERIES_LABEL, health_base, horizon, growth_rate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_zero_years_is_identity() {
        for base in [0.0, 1.0, 50_000.0, 500_000.0] {
            assert_eq!(calculate_future_benefits(base, 0), base);
        }
    }

    #[test]
    fn test_ten_year_projection() {
        let value = calculate_future_benefits(100_000.0, 10);
        assert_abs_diff_eq!(value, 162_889.46, epsilon = 0.005);
        assert_relative_eq!(value, 100_000.0 * 1.05_f64.powf(10.0), max_relative = 1e-12);
    }

    #[test]
    fn test_single_evaluation_matches_closed_form_for_all_horizons() {
        for years in 0..=50 {
            let expected = 200_000.0 * (1.0 + 0.05_f64).powf(years as f64);
            assert_eq!(calculate_future_benefits(200_000.0, years), expected);
        }
    }

    #[test]
    fn test_ten_year_high_tier_matches_pow() {
        let value = calculate_future_benefits(500_000.0, 10);
        assert_eq!(value, 500_000.0 * (1.0 + 0.05_f64).powf(10.0));
        assert_eq!(value.to_bits(), 814_447.313_388_721_f64.to_bits());
    }

    #[test]
    fn test_large_horizons_never_shrink() {
        for years in [i32::MAX as u32, i32::MAX as u32 + 1, 3_000_000_000, u32::MAX] {
            let value = project_benefit(100.0, years, 0.05);
            assert!(value >= 100.0, "years={} gave {}", years, value);
            assert!(value.is_infinite());
        }
        assert_eq!(project_benefit(100.0, u32::MAX, 0.0), 100.0);
    }

    #[test]
    fn test_series_is_ascending_and_strictly_increasing() {
        let series = GrowthSeries::project(ACCIDENT_SERIES_LABEL, 300_000.0, 50, 0.05);
        assert_eq!(series.len(), 50);
        assert_eq!(series.points.first().unwrap().year, 1);
        assert_eq!(series.points.last().unwrap().year, 50);
        for pair in series.points.windows(2) {
            assert_eq!(pair[1].year, pair[0].year + 1);
            assert!(pair[1].value > pair[0].value);
        }
    }

    #[test]
    fn test_series_entries_match_projector() {
        let (accident, health) = growth_series(500_000.0, 200_000.0, 10, 0.05);
        assert_eq!(accident.label, "Accident Coverage");
        assert_eq!(health.label, "Health Coverage");
        for (year, value) in health.xy() {
            assert_eq!(value, calculate_future_benefits(200_000.0, year));
        }
        assert_eq!(accident.final_value(), calculate_future_benefits(500_000.0, 10));
    }

    #[test]
    fn test_empty_horizon() {
        let series = GrowthSeries::project(HEALTH_SERIES_LABEL, 50_000.0, 0, 0.05);
        assert!(series.is_empty());
        assert_eq!(series.final_value(), 50_000.0);
    }
}
