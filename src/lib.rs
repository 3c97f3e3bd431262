//! ONELIFE - insurance package and coverage prediction
//!
//! This library provides:
//! - Monthly income classification into five income tiers
//! - Flat-rate monthly premium calculation
//! - Base accident and health coverage by tier
//! - Compound-growth projection of coverage to a horizon, and year-by-year growth series
//! - Validated single and batch quoting

pub mod error;
pub mod applicant;
pub mod assumptions;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{CoverageError, Result};
pub use applicant::{Applicant, Sex};
pub use assumptions::{Assumptions, CoverageAmounts, CoverageTable, IncomeTier, TierSchedule};
pub use projection::{CoveragePredictor, GrowthSeries, PredictionResult, PredictionWithSeries};
pub use scenario::ScenarioRunner;
