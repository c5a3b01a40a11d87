//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::error::{AiError, Result};
use crate::indicators::trend::calculate_ema;
use crate::indicators::validation::{validate_period, validate_prices};
use crate::models::indicators::MacdIndicator;
use serde::{Deserialize, Serialize};

/// Length of the buffer the signal line is smoothed over in
/// `MacdSignalMode::RepeatedCurrent`
pub const SIGNAL_BUFFER_LEN: usize = 20;

/// How the signal line input series is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacdSignalMode {
    /// The current MACD value repeated `SIGNAL_BUFFER_LEN` times.
    /// The signal line therefore always equals MACD and the histogram is 0.
    #[default]
    RepeatedCurrent,
    /// A bar-by-bar MACD series computed over the whole history
    Historical,
}

impl MacdSignalMode {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "historical" => MacdSignalMode::Historical,
            _ => MacdSignalMode::RepeatedCurrent,
        }
    }
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) over the series selected by `mode`
/// Histogram = MACD - Signal
pub fn calculate_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    mode: MacdSignalMode,
) -> Result<MacdIndicator> {
    validate_period(fast_period)?;
    validate_period(slow_period)?;
    validate_period(signal_period)?;
    validate_prices(prices)?;
    if fast_period >= slow_period {
        return Err(AiError::InvalidArgument(format!(
            "MACD fast period {} must be shorter than slow period {}",
            fast_period, slow_period
        )));
    }

    let macd_line = calculate_ema(prices, fast_period)? - calculate_ema(prices, slow_period)?;

    let history = match mode {
        MacdSignalMode::RepeatedCurrent => vec![macd_line; SIGNAL_BUFFER_LEN],
        MacdSignalMode::Historical => {
            let series = macd_series(prices, fast_period, slow_period);
            if series.is_empty() {
                vec![macd_line]
            } else {
                series
            }
        }
    };

    let signal_line = calculate_ema(&history, signal_period)?;

    Ok(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64], mode: MacdSignalMode) -> Result<MacdIndicator> {
    calculate_macd(prices, 12, 26, 9, mode)
}

/// MACD value at every bar from the point the slow EMA is seeded.
/// Requires `fast_period < slow_period`; empty when history is too short.
pub fn macd_series(prices: &[f64], fast_period: usize, slow_period: usize) -> Vec<f64> {
    if prices.len() < slow_period || fast_period == 0 || fast_period >= slow_period {
        return Vec::new();
    }

    let (Some(mut fast_ema), Some(mut slow_ema)) = (
        math::sma(&prices[..fast_period], fast_period),
        math::sma(&prices[..slow_period], slow_period),
    ) else {
        return Vec::new();
    };

    let mut series = Vec::with_capacity(prices.len() - slow_period + 1);
    for (i, &price) in prices.iter().enumerate().skip(fast_period) {
        fast_ema = math::ema_from_previous(price, fast_ema, fast_period);
        if i + 1 == slow_period {
            series.push(fast_ema - slow_ema);
        } else if i >= slow_period {
            slow_ema = math::ema_from_previous(price, slow_ema, slow_period);
            series.push(fast_ema - slow_ema);
        }
    }
    series
}
