//! CSV loader for batches of applicants

use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use super::data::{Applicant, Sex};
use crate::error::Result;

/// CSV row format for applicant batches
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "FamilyMembers")]
    family_members: u8,
    #[serde(rename = "FamilyDetails", default)]
    family_details: String,
    #[serde(rename = "MonthlyIncome")]
    monthly_income: f64,
    #[serde(rename = "Years")]
    years: u32,
}

impl CsvRow {
    fn into_applicant(self) -> Result<Applicant> {
        let sex: Sex = self.sex.parse()?;
        let applicant = Applicant {
            age: self.age,
            sex,
            family_members: self.family_members,
            family_details: self.family_details,
            monthly_income: self.monthly_income,
            years: self.years,
        };
        applicant.validate()?;
        Ok(applicant)
    }
}

/// Load and validate all applicants from a CSV file
pub fn load_applicants<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>> {
    let file = std::fs::File::open(path)?;
    load_applicants_from_reader(file)
}

/// Load and validate applicants from any reader
pub fn load_applicants_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Applicant>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut applicants = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        applicants.push(row.into_applicant()?);
    }

    log::info!("loaded {} applicants", applicants.len());
    Ok(applicants)
}
