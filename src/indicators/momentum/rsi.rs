//! RSI (Relative Strength Index) indicator

use crate::error::Result;
use crate::indicators::validation::{validate_period, validate_prices};

/// Value reported when there is not enough history
pub const NEUTRAL_RSI: f64 = 50.0;

/// Calculate RSI over the most recent `period` price changes
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Zero average loss yields 100; fewer than `period + 1` prices yields 50.
pub fn calculate_rsi(prices: &[f64], period: usize) -> Result<f64> {
    validate_period(period)?;
    validate_prices(prices)?;

    if prices.len() < period + 1 {
        return Ok(NEUTRAL_RSI);
    }

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in prices[prices.len() - period - 1..].windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += change.abs();
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> Result<f64> {
    calculate_rsi(prices, 14)
}
