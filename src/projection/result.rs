//! Prediction output structures

use serde::{Deserialize, Serialize};

use crate::assumptions::IncomeTier;
use super::growth::GrowthSeries;

/// Outcome of a single coverage prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub tier: IncomeTier,

    /// Descriptive tier label shown to the applicant
    pub tier_label: String,

    pub monthly_income: f64,

    pub monthly_premium: f64,

    /// Projection horizon in years
    pub years: u32,

    // Year-0 coverage
    pub accident_base: f64,
    pub health_base: f64,

    // Coverage at the horizon
    pub projected_accident: f64,
    pub projected_health: f64,
}

impl PredictionResult {
    /// Combined projected coverage at the horizon
    pub fn projected_total(&self) -> f64 {
        self.projected_accident + self.projected_health
    }

    /// Annualised premium
    pub fn annual_premium(&self) -> f64 {
        self.monthly_premium * 12.0
    }
}

/// Prediction together with the year-by-year series for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionWithSeries {
    pub prediction: PredictionResult,
    pub accident_series: GrowthSeries,
    pub health_series: GrowthSeries,
}
