//! Unit tests for the indicator engine

use aicore::indicators::engine::{compute_indicator_set, IndicatorEngine, MIN_BARS};
use aicore::indicators::MacdSignalMode;
use aicore::models::indicators::{self as names, PriceBar};
use aicore::AiError;

fn bars(symbol: &str, count: usize) -> Vec<PriceBar> {
    (0..count)
        .map(|i| PriceBar::new(symbol, 100.0 + (i as f64 / 2.0).sin() * 5.0 + i as f64 * 0.1, 1_000))
        .collect()
}

fn engine_with(symbol: &str, count: usize) -> IndicatorEngine {
    let mut engine = IndicatorEngine::new();
    engine.add_bars(bars(symbol, count)).unwrap();
    engine
}

#[test]
fn test_below_min_bars_is_skipped() {
    let mut engine = engine_with("ACME", MIN_BARS - 1);
    assert!(engine.update_all("ACME").unwrap().is_none());
    assert!(engine.indicators("ACME").is_none());
}

#[test]
fn test_unknown_symbol_is_skipped() {
    let mut engine = IndicatorEngine::new();
    assert!(engine.update_all("NOPE").unwrap().is_none());
}

#[test]
fn test_twenty_bars_core_indicators() {
    let mut engine = engine_with("ACME", 20);
    let set = engine.update_all("ACME").unwrap().unwrap();

    for name in [
        names::SMA_20,
        names::EMA_12,
        names::EMA_26,
        names::MACD,
        names::MACD_SIGNAL,
        names::MACD_HISTOGRAM,
        names::RSI,
        names::BOLLINGER_UPPER,
        names::BOLLINGER_MIDDLE,
        names::BOLLINGER_LOWER,
    ] {
        assert!(set.get(name).is_some(), "missing {}", name);
    }
    assert!(set.get(names::SMA_50).is_none());
    assert!(set.get(names::SMA_200).is_none());
}

#[test]
fn test_long_history_adds_slow_averages() {
    let mut engine = engine_with("ACME", 50);
    let set = engine.update_all("ACME").unwrap().unwrap();
    assert!(set.get(names::SMA_50).is_some());
    assert!(set.get(names::SMA_200).is_none());

    let mut engine = engine_with("ACME", 200);
    let set = engine.update_all("ACME").unwrap().unwrap();
    assert!(set.get(names::SMA_200).is_some());
}

#[test]
fn test_default_mode_histogram_is_zero() {
    let mut engine = engine_with("ACME", 60);
    let set = engine.update_all("ACME").unwrap().unwrap();
    let macd = set.get(names::MACD).unwrap();
    let signal = set.get(names::MACD_SIGNAL).unwrap();
    assert!((macd - signal).abs() < 1e-9);
    assert!(set.get(names::MACD_HISTOGRAM).unwrap().abs() < 1e-9);
}

#[test]
fn test_derived_values_are_consistent() {
    let mut engine = engine_with("ACME", 60).with_macd_mode(MacdSignalMode::Historical);
    let set = engine.update_all("ACME").unwrap().unwrap().clone();

    let macd = set.get(names::MACD).unwrap();
    let ema_12 = set.get(names::EMA_12).unwrap();
    let ema_26 = set.get(names::EMA_26).unwrap();
    assert!((macd - (ema_12 - ema_26)).abs() < 1e-12);

    let histogram = set.get(names::MACD_HISTOGRAM).unwrap();
    let signal = set.get(names::MACD_SIGNAL).unwrap();
    assert!((histogram - (macd - signal)).abs() < 1e-12);
    assert_eq!(set.get(names::BOLLINGER_MIDDLE), set.get(names::SMA_20));
    assert_eq!(set.price, engine.last_price("ACME").unwrap());
}

#[test]
fn test_update_all_symbols_counts_updates() {
    let mut engine = IndicatorEngine::new();
    engine.add_bars(bars("LONG", 30)).unwrap();
    engine.add_bars(bars("SHORT", 5)).unwrap();
    assert_eq!(engine.update_all_symbols().unwrap(), 1);
    assert!(engine.indicators("LONG").is_some());
    assert!(engine.indicators("SHORT").is_none());
}

#[test]
fn test_rejects_non_finite_close() {
    let mut engine = IndicatorEngine::new();
    let result = engine.add_bar(PriceBar::new("ACME", f64::NAN, 1));
    assert!(matches!(result, Err(AiError::InvalidArgument(_))));
    assert!(engine.history("ACME").is_none());
}

#[test]
fn test_compute_indicator_set_is_pure() {
    let closes: Vec<f64> = bars("ACME", 40).iter().map(|b| b.close).collect();
    let a = compute_indicator_set("ACME", &closes, MacdSignalMode::RepeatedCurrent).unwrap().unwrap();
    let b = compute_indicator_set("ACME", &closes, MacdSignalMode::RepeatedCurrent).unwrap().unwrap();
    assert_eq!(a.values, b.values);
}
