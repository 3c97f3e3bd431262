//! Scenario runner for validated and batch quotes
//!
//! Pre-loads assumptions once, then quotes any number of applicants against them
//! without re-reading CSV files.

use rayon::prelude::*;

use crate::applicant::Applicant;
use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::projection::{CoveragePredictor, PredictionResult, PredictionWithSeries};

/// Pre-loaded runner that validates applicants before predicting
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
/// let results = runner.quote_batch(&applicants);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    predictor: CoveragePredictor,
}

impl ScenarioRunner {
    /// Create runner with the standard package assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_pricing())
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?))
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            predictor: CoveragePredictor::new(assumptions),
        }
    }

    /// Validate and quote a single applicant
    pub fn quote(&self, applicant: &Applicant) -> Result<PredictionResult> {
        applicant.validate()?;
        Ok(self.predictor.predict(applicant.monthly_income, applicant.years))
    }

    /// Validate and quote, including the growth series for charting
    pub fn quote_with_series(&self, applicant: &Applicant) -> Result<PredictionWithSeries> {
        applicant.validate()?;
        Ok(self.predictor.predict_with_series(applicant.monthly_income, applicant.years))
    }

    /// Quote many applicants in parallel; output order matches input order
    pub fn quote_batch(&self, applicants: &[Applicant]) -> Vec<Result<PredictionResult>> {
        let results: Vec<_> = applicants.par_iter().map(|a| self.quote(a)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        log::info!("quoted {} applicants ({} rejected)", applicants.len(), failed);
        results
    }

    pub fn predictor(&self) -> &CoveragePredictor {
        &self.predictor
    }

    pub fn assumptions(&self) -> &Assumptions {
        self.predictor.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::IncomeTier;
    use crate::error::CoverageError;

    #[test]
    fn test_quote_rejects_out_of_range_input() {
        let runner = ScenarioRunner::new();
        assert!(matches!(
            runner.quote(&Applicant::new(5_000.0, 10)),
            Err(CoverageError::IncomeOutOfRange(_))
        ));
        assert!(runner.quote(&Applicant::new(50_000.0, 10)).is_ok());
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let applicants: Vec<_> = (0..200)
            .map(|i| Applicant::new(10_000.0 + i as f64 * 250.0, 1 + i % 50))
            .collect();

        let results = runner.quote_batch(&applicants);
        assert_eq!(results.len(), applicants.len());
        for (applicant, result) in applicants.iter().zip(&results) {
            let result = result.as_ref().unwrap();
            assert_eq!(result.monthly_income, applicant.monthly_income);
            assert_eq!(result.years, applicant.years);
            assert_eq!(*result, runner.predictor().predict(applicant.monthly_income, applicant.years));
        }
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let runner = ScenarioRunner::new();
        let applicants = vec![
            Applicant::new(15_000.0, 1),
            Applicant::new(50_000.0, 0),
            Applicant::new(50_000.0, 10),
        ];
        let results = runner.quote_batch(&applicants);
        assert_eq!(results[0].as_ref().unwrap().tier, IncomeTier::Low);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().tier, IncomeTier::High);
    }

    #[test]
    fn test_from_bundled_csv_path() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/assumptions");
        let runner = ScenarioRunner::from_csv_path(&path).unwrap();
        assert_eq!(*runner.assumptions(), Assumptions::default_pricing());
        assert!(ScenarioRunner::from_csv_path(std::path::Path::new("/nonexistent/onelife")).is_err());
    }

    #[test]
    fn test_quote_with_series() {
        let runner = ScenarioRunner::new();
        let output = runner.quote_with_series(&Applicant::new(28_000.0, 15)).unwrap();
        assert_eq!(output.prediction.tier, IncomeTier::Middle);
        assert_eq!(output.accident_series.len(), 15);
    }
}
