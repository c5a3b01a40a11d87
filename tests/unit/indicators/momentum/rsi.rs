//! Unit tests for RSI indicator

use aicore::indicators::momentum::{calculate_rsi, calculate_rsi_default, NEUTRAL_RSI};
use aicore::AiError;

#[test]
fn test_rsi_strictly_increasing_is_100() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert_eq!(calculate_rsi_default(&prices).unwrap(), 100.0);
}

#[test]
fn test_rsi_strictly_decreasing_is_0() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    assert_eq!(calculate_rsi_default(&prices).unwrap(), 0.0);
}

#[test]
fn test_rsi_insufficient_data_is_neutral() {
    let prices = vec![10.0; 14];
    assert_eq!(calculate_rsi(&prices, 14).unwrap(), NEUTRAL_RSI);
}

#[test]
fn test_rsi_flat_series_is_100() {
    // no losses at all
    let prices = vec![10.0; 15];
    assert_eq!(calculate_rsi(&prices, 14).unwrap(), 100.0);
}

#[test]
fn test_rsi_only_uses_recent_changes() {
    // early losses fall outside the window
    let prices = [50.0, 10.0, 11.0, 12.0, 13.0];
    assert_eq!(calculate_rsi(&prices, 3).unwrap(), 100.0);
}

#[test]
fn test_rsi_balanced_moves() {
    // gains 2 + 2, losses 1 + 1 over 4 changes -> RS = 2
    let prices = [10.0, 12.0, 11.0, 13.0, 12.0];
    let rsi = calculate_rsi(&prices, 4).unwrap();
    assert!((rsi - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn test_rsi_invalid_arguments() {
    assert!(matches!(calculate_rsi(&[1.0, 2.0], 0), Err(AiError::InvalidArgument(_))));
    assert!(matches!(calculate_rsi(&[], 14), Err(AiError::InvalidArgument(_))));
}
