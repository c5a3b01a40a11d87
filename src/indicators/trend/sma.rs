//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::error::Result;
use crate::indicators::validation::{last_price, validate_period, validate_prices};

/// Mean of the last `period` prices.
///
/// With fewer than `period` prices the most recent price is returned.
pub fn calculate_sma(prices: &[f64], period: usize) -> Result<f64> {
    validate_period(period)?;
    validate_prices(prices)?;

    match math::sma(prices, period) {
        Some(value) => Ok(value),
        None => last_price(prices),
    }
}
