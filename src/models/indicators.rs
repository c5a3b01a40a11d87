use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SMA_20: &str = "sma_20";
pub const SMA_50: &str = "sma_50";
pub const SMA_200: &str = "sma_200";
pub const EMA_12: &str = "ema_12";
pub const EMA_26: &str = "ema_26";
pub const MACD: &str = "macd";
pub const MACD_SIGNAL: &str = "macd_signal";
pub const MACD_HISTOGRAM: &str = "macd_histogram";
pub const RSI: &str = "rsi";
pub const BOLLINGER_UPPER: &str = "bollinger_upper";
pub const BOLLINGER_MIDDLE: &str = "bollinger_middle";
pub const BOLLINGER_LOWER: &str = "bollinger_lower";

/// One closing-price observation for an instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub symbol: String,
    pub close: f64,
    pub volume: u64,
    pub timestamp: DateTime<Utc>,
}

impl PriceBar {
    pub fn new(symbol: impl Into<String>, close: f64, volume: u64) -> Self {
        Self {
            symbol: symbol.into(),
            close,
            volume,
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    /// All three bands pinned to one price
    pub fn flat(price: f64) -> Self {
        Self {
            upper: price,
            middle: price,
            lower: price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Named indicator values for one symbol, rebuilt on every update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub price: f64,
    pub values: BTreeMap<String, f64>,
    pub timestamp: DateTime<Utc>,
}

impl IndicatorSet {
    pub fn new(symbol: String, price: f64) -> Self {
        Self {
            symbol,
            price,
            values: BTreeMap::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn with_value(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.insert(MACD, macd.macd);
        self.insert(MACD_SIGNAL, macd.signal);
        self.insert(MACD_HISTOGRAM, macd.histogram);
        self
    }

    pub fn with_bollinger(mut self, bands: BollingerBands) -> Self {
        self.insert(BOLLINGER_UPPER, bands.upper);
        self.insert(BOLLINGER_MIDDLE, bands.middle);
        self.insert(BOLLINGER_LOWER, bands.lower);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn bollinger(&self) -> Option<BollingerBands> {
        Some(BollingerBands {
            upper: self.get(BOLLINGER_UPPER)?,
            middle: self.get(BOLLINGER_MIDDLE)?,
            lower: self.get(BOLLINGER_LOWER)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
