//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::error::Result;
use crate::indicators::validation::{last_price, validate_period, validate_prices};

/// EMA seeded with the SMA of the first `period` prices, then
/// `ema = (price - ema) * k + ema` with `k = 2 / (period + 1)`.
///
/// With fewer than `period` prices the most recent price is returned.
pub fn calculate_ema(prices: &[f64], period: usize) -> Result<f64> {
    validate_period(period)?;
    validate_prices(prices)?;

    match math::ema(prices, period) {
        Some(value) => Ok(value),
        None => last_price(prices),
    }
}

/// Calculate several EMAs over the same series
pub fn calculate_emas(prices: &[f64], periods: &[usize]) -> Result<Vec<(usize, f64)>> {
    periods
        .iter()
        .map(|&period| calculate_ema(prices, period).map(|value| (period, value)))
        .collect()
}

/// Compare a fast and a slow EMA: 1 when fast is above, -1 when below, 0 when equal
pub fn check_ema_cross(prices: &[f64], fast_period: usize, slow_period: usize) -> Result<i32> {
    let fast = calculate_ema(prices, fast_period)?;
    let slow = calculate_ema(prices, slow_period)?;

    Ok(if fast > slow {
        1
    } else if fast < slow {
        -1
    } else {
        0
    })
}
