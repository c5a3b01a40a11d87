//! Parallel evaluation of independent symbol and faction snapshots

use crate::config::AiConfig;
use crate::error::{AiError, Result};
use crate::indicators::engine::compute_indicator_set;
use crate::indicators::MacdSignalMode;
use crate::models::indicators::{IndicatorSet, PriceBar};
use crate::models::region::{MapData, RegionId};
use crate::movement::{MovementStrategy, TroopMovementCalculator};
use crate::services::market_data::MarketDataProvider;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Bars requested per symbol; enough for `sma_200`
pub const DEFAULT_BAR_LIMIT: usize = 250;

pub type ThreatMap = BTreeMap<RegionId, f64>;

/// Configuration for the evaluation runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub concurrency: usize,
    pub symbols: Vec<String>,
    pub bar_limit: usize,
    pub macd_signal_mode: MacdSignalMode,
    pub movement_strategy: MovementStrategy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            symbols: Vec::new(),
            bar_limit: DEFAULT_BAR_LIMIT,
            macd_signal_mode: MacdSignalMode::RepeatedCurrent,
            movement_strategy: MovementStrategy::Balanced,
        }
    }
}

impl RuntimeConfig {
    pub fn from_ai_config(config: &AiConfig, symbols: Vec<String>) -> Self {
        Self {
            concurrency: config.worker_concurrency,
            symbols,
            bar_limit: DEFAULT_BAR_LIMIT,
            macd_signal_mode: config.macd_signal_mode,
            movement_strategy: config.movement_strategy,
        }
    }
}

/// Runs one evaluation per symbol or faction on the blocking pool.
/// Every task owns its snapshot; nothing is shared between tasks.
pub struct EvaluationRuntime {
    config: RuntimeConfig,
    semaphore: Arc<Semaphore>,
}

impl EvaluationRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        let permits = config.concurrency.max(1);
        Self {
            config,
            semaphore: Arc::new(Semaphore::new(permits)),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Compute indicator sets for every snapshot. Symbols below the minimum
    /// history are absent from the result; symbols whose data is rejected
    /// are logged and skipped.
    pub async fn evaluate_symbols(
        &self,
        snapshots: HashMap<String, Vec<PriceBar>>,
    ) -> Result<BTreeMap<String, IndicatorSet>> {
        let mode = self.config.macd_signal_mode;
        let mut tasks = JoinSet::new();

        for (symbol, bars) in snapshots {
            let permit = self.acquire().await?;
            tasks.spawn_blocking(move || {
                let _permit = permit;
                let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
                let result = compute_indicator_set(&symbol, &closes, mode);
                (symbol, result)
            });
        }

        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            let (symbol, outcome) = joined.map_err(|e| AiError::Runtime(e.to_string()))?;
            match outcome {
                Ok(Some(set)) => {
                    results.insert(symbol, set);
                }
                Ok(None) => {
                    debug!(symbol = %symbol, "EvaluationRuntime: skipped {} (short history)", symbol);
                }
                Err(e) => {
                    error!(symbol = %symbol, error = %e, "EvaluationRuntime: evaluation failed for {}", symbol);
                }
            }
        }

        info!(evaluated = results.len(), "EvaluationRuntime: symbol pass complete");
        Ok(results)
    }

    /// Threat levels for each faction's map snapshot
    pub async fn evaluate_factions(
        &self,
        snapshots: Vec<(String, MapData)>,
    ) -> Result<BTreeMap<String, ThreatMap>> {
        let strategy = self.config.movement_strategy;
        let mut tasks = JoinSet::new();

        for (faction, map) in snapshots {
            let permit = self.acquire().await?;
            tasks.spawn_blocking(move || {
                let _permit = permit;
                let mut calculator = TroopMovementCalculator::from_map(map);
                calculator.set_movement_strategy(strategy);
                let threats = calculator.calculate_threat_levels().clone();
                (faction, threats)
            });
        }

        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            let (faction, threats) = joined.map_err(|e| AiError::Runtime(e.to_string()))?;
            results.insert(faction, threats);
        }

        info!(factions = results.len(), "EvaluationRuntime: faction pass complete");
        Ok(results)
    }

    /// Fetch bars for every configured symbol, then evaluate them
    pub async fn run_market_cycle(
        &self,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
    ) -> Result<BTreeMap<String, IndicatorSet>> {
        let mut snapshots = HashMap::new();
        for symbol in &self.config.symbols {
            match provider.get_bars(symbol, self.config.bar_limit) {
                Ok(bars) => {
                    debug!(symbol = %symbol, count = bars.len(), "EvaluationRuntime: fetched {} bars for {}", bars.len(), symbol);
                    snapshots.insert(symbol.clone(), bars);
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "EvaluationRuntime: no market data for {}", symbol);
                }
            }
        }

        self.evaluate_symbols(snapshots).await
    }

    async fn acquire(&self) -> Result<tokio::sync::OwnedSemaphorePermit> {
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| AiError::Runtime(e.to_string()))
    }
}
