use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradingStrategy {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

impl TradingStrategy {
    /// Unrecognized names fall back to `Balanced`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "conservative" => TradingStrategy::Conservative,
            "aggressive" => TradingStrategy::Aggressive,
            _ => TradingStrategy::Balanced,
        }
    }

    /// Minimum absolute candidate score before a buy or sell is suggested
    pub fn buy_threshold(&self) -> f64 {
        match self {
            TradingStrategy::Conservative => 0.40,
            TradingStrategy::Balanced => 0.25,
            TradingStrategy::Aggressive => 0.15,
        }
    }

    /// Share of risk-adjusted cash committed to a single position
    pub fn allocation(&self) -> f64 {
        match self {
            TradingStrategy::Conservative => 0.10,
            TradingStrategy::Balanced => 0.20,
            TradingStrategy::Aggressive => 0.35,
        }
    }
}
