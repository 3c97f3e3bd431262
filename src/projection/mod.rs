//! Premium calculation, benefit growth projection and the coverage predictor

mod premium;
mod growth;
mod engine;
mod result;

pub use premium::{calculate_monthly_premium, premium_at_rate};
pub use growth::{
    calculate_future_benefits, growth_series, project_benefit, GrowthPoint, GrowthSeries,
    ACCIDENT_SERIES_LABEL, HEALTH_SERIES_LABEL,
};
pub use engine::{CoveragePredictor, predict_insurance_coverage};
pub use result::{PredictionResult, PredictionWithSeries};
