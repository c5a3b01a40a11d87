//! Per-symbol price history and full indicator recomputation

use crate::error::{AiError, Result};
use crate::indicators::momentum::{calculate_macd, calculate_rsi, MacdSignalMode};
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::indicators::{self as names, IndicatorSet, PriceBar};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Bars required before any indicator is computed for a symbol
pub const MIN_BARS: usize = 20;

/// Compute the full indicator set for one symbol's closing prices.
///
/// Returns `Ok(None)` when fewer than `MIN_BARS` prices are available.
pub fn compute_indicator_set(
    symbol: &str,
    closes: &[f64],
    mode: MacdSignalMode,
) -> Result<Option<IndicatorSet>> {
    if closes.len() < MIN_BARS {
        debug!(
            symbol = %symbol,
            count = closes.len(),
            min = MIN_BARS,
            "IndicatorEngine: not enough bars ({} < {}) for {}",
            closes.len(),
            MIN_BARS,
            symbol
        );
        return Ok(None);
    }

    let price = closes[closes.len() - 1];
    let mut set = IndicatorSet::new(symbol.to_string(), price);

    set.insert(names::SMA_20, calculate_sma(closes, 20)?);
    if closes.len() >= 50 {
        set.insert(names::SMA_50, calculate_sma(closes, 50)?);
    }
    if closes.len() >= 200 {
        set.insert(names::SMA_200, calculate_sma(closes, 200)?);
    }

    set.insert(names::EMA_12, calculate_ema(closes, 12)?);
    set.insert(names::EMA_26, calculate_ema(closes, 26)?);

    let macd = calculate_macd(closes, 12, 26, 9, mode)?;
    let bands = calculate_bollinger_bands(closes, 20, 2.0)?;

    let set = set
        .with_macd(macd)
        .with_value(names::RSI, calculate_rsi(closes, 14)?)
        .with_bollinger(bands);

    trace!(symbol = %symbol, values = set.values.len(), "IndicatorEngine: computed indicators");
    Ok(Some(set))
}

/// Holds bar history per symbol and the last computed indicator set
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    history: BTreeMap<String, Vec<PriceBar>>,
    indicators: BTreeMap<String, IndicatorSet>,
    mode: MacdSignalMode,
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_macd_mode(mut self, mode: MacdSignalMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn macd_mode(&self) -> MacdSignalMode {
        self.mode
    }

    /// Append a bar to its symbol's history (oldest first)
    pub fn add_bar(&mut self, bar: PriceBar) -> Result<()> {
        if !bar.close.is_finite() || bar.close < 0.0 {
            return Err(AiError::InvalidArgument(format!(
                "close price for {} must be finite and non-negative, got {}",
                bar.symbol, bar.close
            )));
        }
        self.history.entry(bar.symbol.clone()).or_default().push(bar);
        Ok(())
    }

    pub fn add_bars(&mut self, bars: impl IntoIterator<Item = PriceBar>) -> Result<()> {
        for bar in bars {
            self.add_bar(bar)?;
        }
        Ok(())
    }

    pub fn history(&self, symbol: &str) -> Option<&[PriceBar]> {
        self.history.get(symbol).map(Vec::as_slice)
    }

    pub fn closes(&self, symbol: &str) -> Vec<f64> {
        self.history
            .get(symbol)
            .map(|bars| bars.iter().map(|b| b.close).collect())
            .unwrap_or_default()
    }

    pub fn last_price(&self, symbol: &str) -> Option<f64> {
        self.history.get(symbol)?.last().map(|b| b.close)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.history.keys().map(String::as_str)
    }

    pub fn indicators(&self, symbol: &str) -> Option<&IndicatorSet> {
        self.indicators.get(symbol)
    }

    /// Recompute every indicator for `symbol`.
    ///
    /// Unknown symbols and symbols below `MIN_BARS` are skipped and
    /// yield `Ok(None)`.
    pub fn update_all(&mut self, symbol: &str) -> Result<Option<&IndicatorSet>> {
        let closes = self.closes(symbol);
        match compute_indicator_set(symbol, &closes, self.mode)? {
            Some(set) => {
                self.indicators.insert(symbol.to_string(), set);
                Ok(self.indicators.get(symbol))
            }
            None => Ok(None),
        }
    }

    /// Recompute indicators for every known symbol; returns how many were updated
    pub fn update_all_symbols(&mut self) -> Result<usize> {
        let symbols: Vec<String> = self.history.keys().cloned().collect();
        let mut updated = 0;
        for symbol in &symbols {
            if self.update_all(symbol)?.is_some() {
                updated += 1;
            }
        }
        debug!(updated = updated, total = symbols.len(), "IndicatorEngine: update pass complete");
        Ok(updated)
    }
}
