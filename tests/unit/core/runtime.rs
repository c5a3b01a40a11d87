//! Unit tests for the evaluation runtime

use aicore::config::AiConfig;
use aicore::core::runtime::{EvaluationRuntime, RuntimeConfig, DEFAULT_BAR_LIMIT};
use aicore::models::indicators::{self as names, PriceBar};
use aicore::models::region::{MapData, Owner, Region};
use aicore::services::market_data::InMemoryMarketData;
use std::collections::HashMap;
use std::sync::Arc;

fn bars(symbol: &str, count: usize) -> Vec<PriceBar> {
    (0..count)
        .map(|i| PriceBar::new(symbol, 20.0 + (i as f64).cos(), 10))
        .collect()
}

#[test]
fn test_runtime_config_default() {
    let config = RuntimeConfig::default();
    assert_eq!(config.concurrency, 4);
    assert_eq!(config.bar_limit, DEFAULT_BAR_LIMIT);
    assert!(config.symbols.is_empty());
}

#[test]
fn test_runtime_config_from_ai_config() {
    let ai = AiConfig {
        worker_concurrency: 2,
        ..AiConfig::default()
    };
    let config = RuntimeConfig::from_ai_config(&ai, vec!["ACME".to_string()]);
    assert_eq!(config.concurrency, 2);
    assert_eq!(config.symbols, vec!["ACME".to_string()]);
}

#[tokio::test]
async fn test_evaluate_symbols_skips_short_history() {
    let runtime = EvaluationRuntime::new(RuntimeConfig {
        concurrency: 2,
        ..RuntimeConfig::default()
    });
    let snapshots = HashMap::from([
        ("A".to_string(), bars("A", 30)),
        ("B".to_string(), bars("B", 60)),
        ("C".to_string(), bars("C", 10)),
    ]);

    let results = runtime.evaluate_symbols(snapshots).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results["A"].get(names::SMA_50).is_none());
    assert!(results["B"].get(names::SMA_50).is_some());
    assert!(!results.contains_key("C"));
}

#[tokio::test]
async fn test_evaluate_symbols_skips_rejected_data() {
    let runtime = EvaluationRuntime::new(RuntimeConfig::default());
    let mut broken = bars("BAD", 30);
    broken[3].close = f64::INFINITY;
    let snapshots = HashMap::from([("BAD".to_string(), broken), ("OK".to_string(), bars("OK", 30))]);

    let results = runtime.evaluate_symbols(snapshots).await.unwrap();
    assert_eq!(results.len(), 1);
    assert!(results.contains_key("OK"));
}

#[tokio::test]
async fn test_evaluate_factions() {
    let runtime = EvaluationRuntime::new(RuntimeConfig::default());
    let map = MapData::new()
        .with_region(Region::new("R", Owner::Neutral, 0))
        .with_region(Region::new("P", Owner::Player, 10))
        .with_region(Region::new("Q", Owner::Player, 4))
        .with_connection("R", "P")
        .with_connection("P", "Q");

    let results = runtime
        .evaluate_factions(vec![("north".to_string(), map.clone()), ("south".to_string(), MapData::new())])
        .await
        .unwrap();
    assert_eq!(results["north"]["R"], 12.0);
    assert!(results["south"].is_empty());
}

#[test]
fn test_market_cycle_ignores_missing_symbols() {
    let provider = InMemoryMarketData::new().with_bars(bars("ACME", 40));
    let runtime = EvaluationRuntime::new(RuntimeConfig {
        symbols: vec!["ACME".to_string(), "MISSING".to_string()],
        ..RuntimeConfig::default()
    });

    let results = tokio_test::block_on(runtime.run_market_cycle(Arc::new(provider))).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results["ACME"].price, bars("ACME", 40)[39].close);
}
