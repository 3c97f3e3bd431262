//! Error type for applicant validation and assumption loading
//!
//! The calculation pipeline itself is total and never returns these; they are raised at
//! the boundary where form input or CSV data enters the crate.

use thiserror::Error;

/// Errors raised while validating input or loading assumptions
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("monthly income {0} is outside the accepted range [{min}, {max}]", min = crate::applicant::MIN_MONTHLY_INCOME, max = crate::applicant::MAX_MONTHLY_INCOME)]
    IncomeOutOfRange(f64),

    #[error("projection horizon {0} years is outside the accepted range [{min}, {max}]", min = crate::applicant::MIN_YEARS, max = crate::applicant::MAX_YEARS)]
    YearsOutOfRange(u32),

    #[error("age {0} is outside the accepted range [{min}, {max}]", min = crate::applicant::MIN_AGE, max = crate::applicant::MAX_AGE)]
    AgeOutOfRange(u8),

    #[error("family size {0} is outside the accepted range [{min}, {max}]", min = crate::applicant::MIN_FAMILY_MEMBERS, max = crate::applicant::MAX_FAMILY_MEMBERS)]
    FamilySizeOutOfRange(u8),

    #[error("unknown income tier: {0}")]
    UnknownTier(String),

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("invalid {name}: {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("unknown rate name: {0}")]
    UnknownRate(String),

    #[error("growth series length mismatch: accident has {accident} years, health has {health}")]
    SeriesLengthMismatch { accident: usize, health: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
