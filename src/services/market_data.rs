//! Market data provider interface feeding the indicator runtime

use crate::error::{AiError, Result};
use crate::models::indicators::PriceBar;
use std::collections::HashMap;

pub trait MarketDataProvider {
    /// Most recent `limit` bars for a symbol, oldest first
    fn get_bars(&self, symbol: &str, limit: usize) -> Result<Vec<PriceBar>>;

    /// Latest closing price for a symbol
    fn get_latest_price(&self, symbol: &str) -> Result<f64> {
        self.get_bars(symbol, 1)?
            .last()
            .map(|bar| bar.close)
            .ok_or_else(|| AiError::MarketData(format!("no bars for {}", symbol)))
    }
}

/// Fixed bar history per symbol, for the simulator and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketData {
    bars: HashMap<String, Vec<PriceBar>>,
}

impl InMemoryMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, bars: impl IntoIterator<Item = PriceBar>) -> Self {
        for bar in bars {
            self.push(bar);
        }
        self
    }

    pub fn push(&mut self, bar: PriceBar) {
        self.bars.entry(bar.symbol.clone()).or_default().push(bar);
    }
}

impl MarketDataProvider for InMemoryMarketData {
    fn get_bars(&self, symbol: &str, limit: usize) -> Result<Vec<PriceBar>> {
        let bars = self
            .bars
            .get(symbol)
            .ok_or_else(|| AiError::UnknownSymbol(symbol.to_string()))?;
        let start = bars.len().saturating_sub(limit);
        Ok(bars[start..].to_vec())
    }
}
