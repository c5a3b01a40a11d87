//! Unit tests for MACD indicator

use aicore::indicators::momentum::{calculate_macd, calculate_macd_default, macd_series, MacdSignalMode};
use aicore::indicators::trend::calculate_ema;
use aicore::AiError;

fn trending_prices(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + i as f64 * 0.5 + (i as f64 / 3.0).sin())
        .collect()
}

#[test]
fn test_macd_line_is_ema_difference() {
    let prices = trending_prices(60);
    let macd = calculate_macd_default(&prices, MacdSignalMode::RepeatedCurrent).unwrap();
    let expected = calculate_ema(&prices, 12).unwrap() - calculate_ema(&prices, 26).unwrap();
    assert!((macd.macd - expected).abs() < 1e-12);
}

#[test]
fn test_repeated_current_signal_collapses_to_macd() {
    let prices = trending_prices(60);
    let macd = calculate_macd_default(&prices, MacdSignalMode::RepeatedCurrent).unwrap();
    assert!((macd.signal - macd.macd).abs() < 1e-9);
    assert!(macd.histogram.abs() < 1e-9);
}

#[test]
fn test_historical_signal_lags_trend() {
    let prices: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64).powf(1.5) * 0.1).collect();
    let macd = calculate_macd_default(&prices, MacdSignalMode::Historical).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.histogram > 0.0);
}

#[test]
fn test_macd_series_ends_at_current_macd() {
    let prices = trending_prices(60);
    let series = macd_series(&prices, 12, 26);
    assert_eq!(series.len(), 60 - 26 + 1);
    let expected = calculate_ema(&prices, 12).unwrap() - calculate_ema(&prices, 26).unwrap();
    assert!((series.last().unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_macd_series_short_history_is_empty() {
    assert!(macd_series(&trending_prices(20), 12, 26).is_empty());
}

#[test]
fn test_macd_rejects_inverted_periods() {
    let prices = trending_prices(60);
    assert!(matches!(
        calculate_macd(&prices, 26, 12, 9, MacdSignalMode::RepeatedCurrent),
        Err(AiError::InvalidArgument(_))
    ));
}

#[test]
fn test_signal_mode_from_name() {
    assert_eq!(MacdSignalMode::from_name("historical"), MacdSignalMode::Historical);
    assert_eq!(MacdSignalMode::from_name("anything"), MacdSignalMode::RepeatedCurrent);
}
