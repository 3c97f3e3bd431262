//! ONELIFE quote CLI
//!
//! Predicts the insurance package and future benefits for one applicant

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use onelife::{Applicant, ScenarioRunner, Sex};
use onelife::report::{render_text, write_series_csv};

#[derive(Debug, Parser)]
#[command(name = "onelife", version, about = "Insurance package and coverage prediction")]
struct Args {
    /// Monthly income in INR
    #[arg(long, default_value_t = 50_000.0)]
    income: f64,

    /// Number of years for future benefits calculation
    #[arg(long, default_value_t = 10)]
    years: u32,

    #[arg(long, default_value_t = 30)]
    age: u8,

    /// Male, Female or Other
    #[arg(long, default_value = "Male")]
    sex: Sex,

    #[arg(long, default_value_t = 3)]
    family_members: u8,

    /// List of family members (optional)
    #[arg(long, default_value = "")]
    family_details: String,

    /// Directory with coverage_tiers.csv and rates.csv; standard package if omitted
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write the year-by-year growth series to this CSV file
    #[arg(long)]
    series_csv: Option<PathBuf>,

    /// Print the prediction and series as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.assumptions {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .with_context(|| format!("failed to load assumptions from {}", dir.display()))?,
        None => ScenarioRunner::new(),
    };

    let applicant = Applicant {
        age: args.age,
        sex: args.sex,
        family_members: args.family_members,
        family_details: args.family_details,
        monthly_income: args.income,
        years: args.years,
    };

    let output = runner.quote_with_series(&applicant).context("invalid quote request")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_text(&output.prediction));
    }

    if let Some(path) = &args.series_csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_series_csv(file, &output.accident_series, &output.health_series)?;
        if !args.json {
            println!("\nGrowth series written to: {}", path.display());
        }
    }

    Ok(())
}
