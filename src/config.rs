//! Environment-driven configuration

use crate::economy::TradingStrategy;
use crate::indicators::MacdSignalMode;
use crate::movement::MovementStrategy;
use std::env;
use tracing::warn;

/// Current deployment environment (`APP_ENV`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub worker_concurrency: usize,
    pub movement_strategy: MovementStrategy,
    pub initial_cash: f64,
    pub risk_tolerance: f64,
    pub trading_strategy: TradingStrategy,
    pub macd_signal_mode: MacdSignalMode,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            worker_concurrency: 4,
            movement_strategy: MovementStrategy::Balanced,
            initial_cash: 100_000.0,
            risk_tolerance: 0.5,
            trading_strategy: TradingStrategy::Balanced,
            macd_signal_mode: MacdSignalMode::RepeatedCurrent,
        }
    }
}

impl AiConfig {
    /// Build a config from environment variables, keeping defaults for
    /// anything missing or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let worker_concurrency = parse_var("WORKER_CONCURRENCY")
            .filter(|c: &usize| *c > 0)
            .unwrap_or(defaults.worker_concurrency);

        let movement_strategy = env::var("MOVEMENT_STRATEGY")
            .map(|s| MovementStrategy::from_name(&s))
            .unwrap_or(defaults.movement_strategy);

        let initial_cash = parse_var("INITIAL_CASH")
            .filter(|c: &f64| c.is_finite() && *c >= 0.0)
            .unwrap_or(defaults.initial_cash);

        let risk_tolerance = parse_var("RISK_TOLERANCE").unwrap_or(defaults.risk_tolerance);

        let trading_strategy = env::var("TRADING_STRATEGY")
            .map(|s| TradingStrategy::from_name(&s))
            .unwrap_or(defaults.trading_strategy);

        let macd_signal_mode = env::var("MACD_SIGNAL_MODE")
            .map(|s| MacdSignalMode::from_name(&s))
            .unwrap_or(defaults.macd_signal_mode);

        Self {
            worker_concurrency,
            movement_strategy,
            initial_cash,
            risk_tolerance,
            trading_strategy,
            macd_signal_mode,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key = key, value = %raw, "Ignoring invalid value for {}", key);
            None
        }
    }
}
