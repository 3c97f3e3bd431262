//! Text rendering of a prediction for the terminal

use crate::projection::PredictionResult;

/// Currency symbol used in all rendered amounts
pub const CURRENCY_SYMBOL: &str = "₹";

pub const RESERVED_FIELDS_NOTE: &str = "Note: Age, sex, and family details are collected for future enhancements \
but are not currently used in coverage calculations.";

/// Round to the nearest cent, half away from zero
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Group the integer part of a non-negative amount with commas
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `₹1,234,567.89`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(whole), cents)
}

/// `₹2500.00`, premium is shown without digit grouping
pub fn format_premium(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Render the result block shown after a prediction
pub fn render_text(result: &PredictionResult) -> String {
    let mut out = String::new();

    out.push_str("Insurance Prediction Results\n");
    out.push_str(&format!("Income Category: {}\n", result.tier_label));
    out.push_str(&format!("Monthly Premium: {}\n", format_premium(result.monthly_premium)));
    out.push_str(&format!("Accident Coverage (Initial): {}\n", format_currency(result.accident_base)));
    out.push_str(&format!("Health Coverage (Initial): {}\n", format_currency(result.health_base)));
    out.push_str(&format!(
        "Future Accident Coverage (after {} years): {}\n",
        result.years,
        format_currency(result.projected_accident),
    ));
    out.push_str(&format!(
        "Future Health Coverage (after {} years): {}\n",
        result.years,
        format_currency(result.projected_health),
    ));
    out.push('\n');
    out.push_str(RESERVED_FIELDS_NOTE);
    out.push('\n');

    out
}
