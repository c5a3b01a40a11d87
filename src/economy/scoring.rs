//! Score normalization and buy/sell candidate scoring

use crate::indicators::registry::{IndicatorCategory, IndicatorRegistry};
use crate::models::indicators::{self as names, IndicatorSet};
use serde::{Deserialize, Serialize};

/// MACD histogram magnitude, as a fraction of price, that maps to a full score
pub const MACD_HISTOGRAM_PRICE_SCALE: f64 = 0.01;

/// Normalize a value to -1 to +1 range
pub fn normalize_score(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    let normalized = 2.0 * ((value - min) / (max - min)) - 1.0;
    normalized.clamp(-1.0, 1.0)
}

/// Normalize RSI (0-100) to -1 to +1
pub fn normalize_rsi(rsi: f64) -> f64 {
    normalize_score(rsi, 0.0, 100.0)
}

/// Normalize MACD histogram to -1 to +1
pub fn normalize_macd_histogram(histogram: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return 0.0;
    }
    (histogram / scale).clamp(-1.0, 1.0)
}

/// Position of price inside the bands: -1 at the lower band, +1 at the upper
pub fn normalize_bollinger_position(price: f64, lower: f64, upper: f64) -> f64 {
    if upper == lower {
        return 0.0;
    }
    normalize_score(price, lower, upper)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub symbol: String,
    pub price: f64,
    /// Oversold is positive
    pub momentum: f64,
    pub trend: f64,
    /// Near the lower band is positive
    pub volatility: f64,
    /// Weighted blend in [-1, 1]; positive favours buying
    pub score: f64,
    pub action: TradeAction,
}

/// Blend an indicator set into a single score.
///
/// Missing indicators contribute 0 to their category.
pub fn score_indicator_set(
    set: &IndicatorSet,
    registry: &IndicatorRegistry,
    buy_threshold: f64,
) -> CandidateScore {
    let momentum = set.get(names::RSI).map(|rsi| -normalize_rsi(rsi)).unwrap_or(0.0);

    let trend = set
        .get(names::MACD_HISTOGRAM)
        .map(|h| normalize_macd_histogram(h, set.price.abs() * MACD_HISTOGRAM_PRICE_SCALE))
        .unwrap_or(0.0);

    let volatility = set
        .bollinger()
        .map(|bands| -normalize_bollinger_position(set.price, bands.lower, bands.upper))
        .unwrap_or(0.0);

    let score = momentum * registry.category_weight(IndicatorCategory::Momentum)
        + trend * registry.category_weight(IndicatorCategory::Trend)
        + volatility * registry.category_weight(IndicatorCategory::Volatility);

    let action = if score >= buy_threshold {
        TradeAction::Buy
    } else if score <= -buy_threshold {
        TradeAction::Sell
    } else {
        TradeAction::Hold
    };

    CandidateScore {
        symbol: set.symbol.clone(),
        price: set.price,
        momentum,
        trend,
        volatility,
        score,
        action,
    }
}
