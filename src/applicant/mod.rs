//! Applicant records and batch loading

mod data;
pub mod loader;

pub use data::{
    Applicant, Sex, MAX_AGE, MAX_FAMILY_MEMBERS, MAX_MONTHLY_INCOME, MAX_YEARS, MIN_AGE,
    MIN_FAMILY_MEMBERS, MIN_MONTHLY_INCOME, MIN_YEARS,
};
pub use loader::{load_applicants, load_applicants_from_reader};
