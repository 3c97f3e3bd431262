//! Monthly premium from monthly income

use crate::assumptions::DEFAULT_PREMIUM_RATE;

/// Premium as a flat share of raw monthly income
///
/// Independent of the income tier: the premium scales linearly with income.
pub fn premium_at_rate(income: f64, rate: f64) -> f64 {
    income * rate
}

/// Premium at the standard 5% rate
pub fn calculate_monthly_premium(income: f64) -> f64 {
    premium_at_rate(income, DEFAULT_PREMIUM_RATE)
}
