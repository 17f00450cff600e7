//! Next-month expense forecast
//!
//! A naive weighted average over the most recent monthly expense totals.
//! Recent months weigh more: [0.5, 0.3, 0.2] most-recent-first, truncated
//! to the available history and renormalized to sum to 1. With fewer than
//! two months of history there is nothing worth projecting.

use crate::models::Money;

/// Weights applied most-recent-month-first
const WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Minimum months of history required for a projection
const MIN_HISTORY: usize = 2;

/// Forecast outcome: a projection or an explicit refusal to guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    /// Fewer than two months of history
    InsufficientHistory,
    /// Weighted projection of next month's expense total
    Projected(Money),
}

/// Forecast next month's expenses from monthly totals, oldest first
///
/// Uses at most the last 3 entries of `monthly_totals`.
pub fn forecast_next_month(monthly_totals: &[Money]) -> Forecast {
    if monthly_totals.len() < MIN_HISTORY {
        return Forecast::InsufficientHistory;
    }

    // Most recent last in the input; weights go most recent first
    let window: Vec<Money> = monthly_totals
        .iter()
        .rev()
        .take(WEIGHTS.len())
        .copied()
        .collect();

    let weights = &WEIGHTS[..window.len()];
    let weight_sum: f64 = weights.iter().sum();

    let projected: f64 = window
        .iter()
        .zip(weights)
        .map(|(total, w)| total.cents() as f64 * (w / weight_sum))
        .sum();

    Forecast::Projected(Money::from_cents(projected.round() as i64))
}
