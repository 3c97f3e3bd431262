//! Applicant record matching the quote form

use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, Result};

pub const MIN_MONTHLY_INCOME: f64 = 10_000.0;
pub const MAX_MONTHLY_INCOME: f64 = 5_000_000.0;
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 50;
pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 100;
pub const MIN_FAMILY_MEMBERS: u8 = 1;
pub const MAX_FAMILY_MEMBERS: u8 = 10;

/// Sex of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Male" | "male" | "M" => Ok(Sex::Male),
            "Female" | "female" | "F" => Ok(Sex::Female),
            "Other" | "other" => Ok(Sex::Other),
            other => Err(CoverageError::UnknownSex(other.to_string())),
        }
    }
}

/// A single quote request
///
/// Age, sex and family details are collected and validated but reserved for
/// future use; only income and years feed the prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u8,

    pub sex: Sex,

    /// Number of family members to be covered
    pub family_members: u8,

    /// Free-text list of family members
    #[serde(default)]
    pub family_details: String,

    /// Monthly income in INR
    pub monthly_income: f64,

    /// Projection horizon in years
    pub years: u32,
}

impl Applicant {
    /// Applicant with the form's default profile
    pub fn new(monthly_income: f64, years: u32) -> Self {
        Self {
            age: 30,
            sex: Sex::Male,
            family_members: 3,
            family_details: String::new(),
            monthly_income,
            years,
        }
    }

    /// Check every field against the form's accepted ranges
    pub fn validate(&self) -> Result<()> {
        if !self.monthly_income.is_finite()
            || !(MIN_MONTHLY_INCOME..=MAX_MONTHLY_INCOME).contains(&self.monthly_income)
        {
            return Err(CoverageError::IncomeOutOfRange(self.monthly_income));
        }
        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(CoverageError::YearsOutOfRange(self.years));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(CoverageError::AgeOutOfRange(self.age));
        }
        if !(MIN_FAMILY_MEMBERS..=MAX_FAMILY_MEMBERS).contains(&self.family_members) {
            return Err(CoverageError::FamilySizeOutOfRange(self.family_members));
        }
        Ok(())
    }
}

impl Default for Applicant {
    fn default() -> Self {
        Self::new(50_000.0, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_applicant_is_valid() {
        let applicant = Applicant::default();
        assert_eq!(applicant.monthly_income, 50_000.0);
        assert_eq!(applicant.years, 10);
        assert!(applicant.validate().is_ok());
    }

    #[test]
    fn test_income_bounds() {
        assert!(Applicant::new(10_000.0, 10).validate().is_ok());
        assert!(Applicant::new(5_000_000.0, 10).validate().is_ok());
        assert!(matches!(
            Applicant::new(9_999.99, 10).validate(),
            Err(CoverageError::IncomeOutOfRange(_))
        ));
        assert!(Applicant::new(f64::NAN, 10).validate().is_err());
        assert!(Applicant::new(-1.0, 10).validate().is_err());
    }

    #[test]
    fn test_year_bounds() {
        assert!(Applicant::new(50_000.0, 1).validate().is_ok());
        assert!(Applicant::new(50_000.0, 50).validate().is_ok());
        assert!(matches!(
            Applicant::new(50_000.0, 0).validate(),
            Err(CoverageError::YearsOutOfRange(0))
        ));
        assert!(Applicant::new(50_000.0, 51).validate().is_err());
    }

    #[test]
    fn test_profile_bounds() {
        let mut applicant = Applicant::default();
        applicant.age = 17;
        assert!(matches!(applicant.validate(), Err(CoverageError::AgeOutOfRange(17))));

        let mut applicant = Applicant::default();
        applicant.family_members = 11;
        assert!(matches!(applicant.validate(), Err(CoverageError::FamilySizeOutOfRange(11))));
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" Other ".parse::<Sex>().unwrap(), Sex::Other);
        assert!("X".parse::<Sex>().is_err());
    }
}
