//! Argument checks shared by the indicator functions.
//!
//! Short histories are not errors; a zero period or an empty series is.

use crate::error::{AiError, Result};

pub fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        return Err(AiError::InvalidArgument(
            "period must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_prices(prices: &[f64]) -> Result<()> {
    if prices.is_empty() {
        return Err(AiError::InvalidArgument(
            "price series must not be empty".to_string(),
        ));
    }
    if let Some(bad) = prices.iter().find(|p| !p.is_finite()) {
        return Err(AiError::InvalidArgument(format!(
            "price series contains non-finite value {}",
            bad
        )));
    }
    Ok(())
}

pub fn validate_multiplier(multiplier: f64) -> Result<()> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(AiError::InvalidArgument(format!(
            "deviation multiplier must be finite and non-negative, got {}",
            multiplier
        )));
    }
    Ok(())
}

/// Last element of a series already checked by `validate_prices`
pub(crate) fn last_price(prices: &[f64]) -> Result<f64> {
    prices
        .last()
        .copied()
        .ok_or_else(|| AiError::InvalidArgument("price series must not be empty".to_string()))
}
