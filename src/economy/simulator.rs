//! Simulated trading desk driven by technical indicators

use crate::config::AiConfig;
use crate::economy::scoring::{score_indicator_set, CandidateScore};
use crate::economy::strategy::TradingStrategy;
use crate::error::{AiError, Result};
use crate::indicators::engine::IndicatorEngine;
use crate::indicators::registry::IndicatorRegistry;
use crate::indicators::MacdSignalMode;
use crate::models::indicators::{IndicatorSet, PriceBar};
use crate::models::portfolio::{Position, Trade, TradeSide};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const MIN_RISK_TOLERANCE: f64 = 0.1;
pub const MAX_RISK_TOLERANCE: f64 = 1.0;

pub struct StockSimulator {
    cash: f64,
    risk_tolerance: f64,
    strategy: TradingStrategy,
    engine: IndicatorEngine,
    registry: IndicatorRegistry,
    portfolio: BTreeMap<String, Position>,
    trade_history: Vec<Trade>,
}

impl StockSimulator {
    /// Risk tolerance is clamped to [0.1, 1.0]
    pub fn new(initial_cash: f64, risk_tolerance: f64, strategy: TradingStrategy) -> Result<Self> {
        if !initial_cash.is_finite() || initial_cash < 0.0 {
            return Err(AiError::InvalidArgument(format!(
                "initial cash must be finite and non-negative, got {}",
                initial_cash
            )));
        }
        let risk_tolerance = if risk_tolerance.is_nan() {
            MIN_RISK_TOLERANCE
        } else {
            risk_tolerance.clamp(MIN_RISK_TOLERANCE, MAX_RISK_TOLERANCE)
        };

        Ok(Self {
            cash: initial_cash,
            risk_tolerance,
            strategy,
            engine: IndicatorEngine::new(),
            registry: IndicatorRegistry::new(),
            portfolio: BTreeMap::new(),
            trade_history: Vec::new(),
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self> {
        Ok(Self::new(config.initial_cash, config.risk_tolerance, config.trading_strategy)?
            .with_macd_mode(config.macd_signal_mode))
    }

    pub fn with_macd_mode(mut self, mode: MacdSignalMode) -> Self {
        self.engine = self.engine.with_macd_mode(mode);
        self
    }

    pub fn with_registry(mut self, registry: IndicatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn risk_tolerance(&self) -> f64 {
        self.risk_tolerance
    }

    pub fn strategy(&self) -> TradingStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: TradingStrategy) {
        self.strategy = strategy;
    }

    pub fn engine(&self) -> &IndicatorEngine {
        &self.engine
    }

    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.portfolio.get(symbol)
    }

    pub fn trade_history(&self) -> &[Trade] {
        &self.trade_history
    }

    pub fn record_bar(&mut self, bar: PriceBar) -> Result<()> {
        self.engine.add_bar(bar)
    }

    pub fn record_bars(&mut self, bars: impl IntoIterator<Item = PriceBar>) -> Result<()> {
        self.engine.add_bars(bars)
    }

    /// Recompute indicators for every symbol with enough history
    pub fn update_indicators(&mut self) -> Result<usize> {
        self.engine.update_all_symbols()
    }

    pub fn indicators(&self, symbol: &str) -> Option<&IndicatorSet> {
        self.engine.indicators(symbol)
    }

    /// `None` until the symbol has a computed indicator set
    pub fn score_candidate(&self, symbol: &str) -> Option<CandidateScore> {
        let set = self.engine.indicators(symbol)?;
        Some(score_indicator_set(set, &self.registry, self.strategy.buy_threshold()))
    }

    /// Every scored symbol, best buy first
    pub fn rank_candidates(&self) -> Vec<CandidateScore> {
        let mut candidates: Vec<CandidateScore> = self
            .engine
            .symbols()
            .filter_map(|symbol| self.score_candidate(symbol))
            .collect();
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.symbol.cmp(&b.symbol)));
        candidates
    }

    /// Cash committed to one new position
    pub fn position_budget(&self) -> f64 {
        self.cash * self.risk_tolerance * self.strategy.allocation()
    }

    /// Whole units affordable within the position budget at the last price
    pub fn suggested_quantity(&self, symbol: &str) -> u64 {
        match self.engine.last_price(symbol) {
            Some(price) if price > 0.0 => (self.position_budget() / price).floor() as u64,
            _ => 0,
        }
    }

    pub fn buy(&mut self, symbol: &str, quantity: u64) -> Result<Trade> {
        let price = self.trade_price(symbol, quantity)?;
        let cost = price * quantity as f64;
        if cost > self.cash {
            return Err(AiError::InsufficientFunds {
                required: cost,
                available: self.cash,
            });
        }

        let held = self.portfolio.get(symbol).map(|p| p.quantity).unwrap_or(0);
        let new_quantity = held.checked_add(quantity).ok_or_else(|| {
            AiError::InvalidArgument(format!(
                "buying {} more {} would overflow the held quantity {}",
                quantity, symbol, held
            ))
        })?;

        self.cash -= cost;
        let position = self
            .portfolio
            .entry(symbol.to_string())
            .or_insert_with(|| Position::new(symbol.to_string()));
        let total_cost = position.average_cost * position.quantity as f64 + cost;
        position.quantity = new_quantity;
        position.average_cost = total_cost / position.quantity as f64;

        Ok(self.record_trade(symbol, TradeSide::Buy, quantity, price))
    }

    pub fn sell(&mut self, symbol: &str, quantity: u64) -> Result<Trade> {
        let price = self.trade_price(symbol, quantity)?;
        let held = self.portfolio.get(symbol).map(|p| p.quantity).unwrap_or(0);
        if quantity > held {
            return Err(AiError::InsufficientHoldings {
                symbol: symbol.to_string(),
                requested: quantity,
                held,
            });
        }

        self.cash += price * quantity as f64;
        if quantity == held {
            self.portfolio.remove(symbol);
        } else if let Some(position) = self.portfolio.get_mut(symbol) {
            position.quantity -= quantity;
        }

        Ok(self.record_trade(symbol, TradeSide::Sell, quantity, price))
    }

    /// Cash plus holdings marked at their last price
    pub fn portfolio_value(&self) -> f64 {
        self.cash
            + self
                .portfolio
                .values()
                .map(|p| p.market_value(self.engine.last_price(&p.symbol).unwrap_or(p.average_cost)))
                .sum::<f64>()
    }

    fn trade_price(&self, symbol: &str, quantity: u64) -> Result<f64> {
        if quantity == 0 {
            return Err(AiError::InvalidArgument("trade quantity must be greater than zero".to_string()));
        }
        self.engine
            .last_price(symbol)
            .ok_or_else(|| AiError::UnknownSymbol(symbol.to_string()))
    }

    fn record_trade(&mut self, symbol: &str, side: TradeSide, quantity: u64, price: f64) -> Trade {
        let trade = Trade {
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
            timestamp: Utc::now(),
        };
        info!(
            symbol = %symbol,
            side = ?side,
            quantity = quantity,
            price = price,
            cash = self.cash,
            "StockSimulator: executed {:?} {} x {}",
            side,
            quantity,
            symbol
        );
        self.trade_history.push(trade.clone());
        debug!(trades = self.trade_history.len(), "StockSimulator: trade recorded");
        trade
    }
}
