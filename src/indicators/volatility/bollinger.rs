//! Bollinger Bands indicator

use crate::common::math;
use crate::error::Result;
use crate::indicators::trend::calculate_sma;
use crate::indicators::validation::{last_price, validate_multiplier, validate_period, validate_prices};
use crate::models::indicators::BollingerBands;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (multiplier * population standard deviation)
/// Lower Band = Middle - (multiplier * population standard deviation)
///
/// With fewer than `period` prices all three bands sit on the last price.
pub fn calculate_bollinger_bands(
    prices: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerBands> {
    validate_period(period)?;
    validate_prices(prices)?;
    validate_multiplier(multiplier)?;

    let Some(std) = math::standard_deviation(prices, period) else {
        return Ok(BollingerBands::flat(last_price(prices)?));
    };
    let middle = calculate_sma(prices, period)?;

    Ok(BollingerBands {
        upper: middle + (multiplier * std),
        middle,
        lower: middle - (multiplier * std),
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> Result<BollingerBands> {
    calculate_bollinger_bands(prices, 20, 2.0)
}
