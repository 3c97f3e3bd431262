//! Coverage predictor: classify income, look up base coverage, project to the horizon

use crate::assumptions::Assumptions;
use super::growth::{growth_series, project_benefit};
use super::premium::premium_at_rate;
use super::result::{PredictionResult, PredictionWithSeries};

/// Runs the prediction pipeline against a fixed set of assumptions
#[derive(Debug, Clone)]
pub struct CoveragePredictor {
    assumptions: Assumptions,
}

impl CoveragePredictor {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Predictor over the standard package constants
    pub fn standard() -> Self {
        Self::new(Assumptions::default_pricing())
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Predict tier, premium and projected coverage for a monthly income and horizon
    ///
    /// Total for income >= 0; range checks belong to the caller.
    pub fn predict(&self, income: f64, years: u32) -> PredictionResult {
        let rates = &self.assumptions.rates;

        let tier = self.assumptions.tiers.classify(income);
        let monthly_premium = premium_at_rate(income, rates.premium_rate);
        let base = self.assumptions.coverage.lookup(tier.label());

        let projected_accident = project_benefit(base.accident, years, rates.growth_rate);
        let projected_health = project_benefit(base.health, years, rates.growth_rate);

        log::debug!(
            "income={} years={} tier={} premium={:.2} accident={:.2}->{:.2} health={:.2}->{:.2}",
            income, years, tier.as_str(), monthly_premium,
            base.accident, projected_accident, base.health, projected_health,
        );

        PredictionResult {
            tier,
            tier_label: tier.label().to_string(),
            monthly_income: income,
            monthly_premium,
            years,
            accident_base: base.accident,
            health_base: base.health,
            projected_accident,
            projected_health,
        }
    }

    /// Predict and build the year-by-year growth series for both benefit types
    pub fn predict_with_series(&self, income: f64, years: u32) -> PredictionWithSeries {
        let prediction = self.predict(income, years);
        let (accident_series, health_series) = growth_series(
            prediction.accident_base,
            prediction.health_base,
            years,
            self.assumptions.rates.growth_rate,
        );

        PredictionWithSeries {
            prediction,
            accident_series,
            health_series,
        }
    }
}

impl Default for CoveragePredictor {
    fn default() -> Self {
        Self::standard()
    }
}

/// Predict with the standard package constants
pub fn predict_insurance_coverage(income: f64, years: u32) -> PredictionResult {
    CoveragePredictor::standard().predict(income, years)
}
