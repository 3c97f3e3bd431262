//! Quote every applicant in a CSV file
//!
//! Usage: quote_batch <applicants.csv> [--output quotes.csv] [--assumptions data/assumptions]

use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use onelife::applicant::load_applicants;
use onelife::report::write_quotes_csv;
use onelife::{Assumptions, IncomeTier, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "quote_batch", about = "Quote a batch of applicants in parallel")]
struct Args {
    /// Applicant CSV (Age,Sex,FamilyMembers,FamilyDetails,MonthlyIncome,Years)
    input: PathBuf,

    #[arg(long, default_value = "batch_quotes.csv")]
    output: PathBuf,

    /// Directory with coverage_tiers.csv and rates.csv; standard package if omitted
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let applicants = load_applicants(&args.input)
        .with_context(|| format!("failed to load applicants from {}", args.input.display()))?;
    println!("Loaded {} applicants in {:?}", applicants.len(), start.elapsed());

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_pricing(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions);

    let quote_start = Instant::now();
    let results = runner.quote_batch(&applicants);
    println!("Quotes complete in {:?}", quote_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    write_quotes_csv(file, &results)?;
    println!("Output written to {}", args.output.display());

    let mut by_tier: BTreeMap<IncomeTier, usize> = BTreeMap::new();
    let mut total_premium = 0.0;
    let mut total_annual_premium = 0.0;
    let mut total_projected = 0.0;
    for result in results.iter().flatten() {
        *by_tier.entry(result.tier).or_default() += 1;
        total_premium += result.monthly_premium;
        total_annual_premium += result.annual_premium();
        total_projected += result.projected_total();
    }

    println!("\nTier Summary:");
    for tier in IncomeTier::ALL {
        println!("  {:<40} {:>8}", tier.label(), by_tier.get(&tier).copied().unwrap_or(0));
    }
    println!("  Total monthly premium: {:.2}", total_premium);
    println!("  Total annual premium: {:.2}", total_annual_premium);
    println!("  Total projected coverage: {:.2}", total_projected);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
