//! CSV export of growth series and batch quotes
//!
//! The series file is the hand-off to whatever draws the growth chart: one row per year,
//! one column per benefit type.

use std::io::Write;

use csv::Writer;

use super::format::round_to_cents;
use crate::error::{CoverageError, Result};
use crate::projection::{GrowthSeries, PredictionResult};

/// Write `Year,<accident label>,<health label>` rows in ascending year order
pub fn write_series_csv<W: Write>(writer: W, accident: &GrowthSeries, health: &GrowthSeries) -> Result<()> {
    if accident.len() != health.len() {
        return Err(CoverageError::SeriesLengthMismatch {
            accident: accident.len(),
            health: health.len(),
        });
    }

    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Year", accident.label.as_str(), health.label.as_str()])?;

    for (a, h) in accident.points.iter().zip(&health.points) {
        csv.write_record([
            a.year.to_string(),
            format!("{:.2}", round_to_cents(a.value)),
            format!("{:.2}", round_to_cents(h.value)),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write one row per quote; rejected applicants carry the error message instead of figures
pub fn write_quotes_csv<W: Write>(writer: W, results: &[Result<PredictionResult>]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record([
        "Row",
        "Tier",
        "MonthlyPremium",
        "AccidentBase",
        "HealthBase",
        "ProjectedAccident",
        "ProjectedHealth",
        "Error",
    ])?;

    for (i, result) in results.iter().enumerate() {
        let row = (i + 1).to_string();
        match result {
            Ok(r) => csv.write_record([
                row,
                r.tier.as_str().to_string(),
                format!("{:.2}", r.monthly_premium),
                format!("{:.2}", r.accident_base),
                format!("{:.2}", r.health_base),
                format!("{:.2}", r.projected_accident),
                format!("{:.2}", r.projected_health),
                String::new(),
            ])?,
            Err(e) => csv.write_record([
                row,
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                e.to_string(),
            ])?,
        }
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{growth_series, predict_insurance_coverage};

    #[test]
    fn test_series_csv() {
        let (accident, health) = growth_series(100_000.0, 50_000.0, 3, 0.05);
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &accident, &health).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Year,Accident Coverage,Health Coverage");
        assert_eq!(lines[1], "1,105000.00,52500.00");
        assert_eq!(lines[2], "2,110250.00,55125.00");
        assert_eq!(lines[3], "3,115762.50,57881.25");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_series_length_mismatch() {
        let (accident, _) = growth_series(100_000.0, 50_000.0, 3, 0.05);
        let (_, health) = growth_series(100_000.0, 50_000.0, 4, 0.05);
        let err = write_series_csv(Vec::new(), &accident, &health).unwrap_err();
        assert!(matches!(err, CoverageError::SeriesLengthMismatch { accident: 3, health: 4 }));
    }

    #[test]
    fn test_quotes_csv() {
        let results = vec![
            Ok(predict_insurance_coverage(15_000.0, 1)),
            Err(CoverageError::YearsOutOfRange(0)),
        ];
        let mut buf = Vec::new();
        write_quotes_csv(&mut buf, &results).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "1,Low,750.00,100000.00,50000.00,105000.00,52500.00,");
        assert!(lines[2].starts_with("2,,,,,,,"));
        assert!(lines[2].contains("projection horizon 0 years"));
    }
}
