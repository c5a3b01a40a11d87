//! Unit tests for SMA indicator

use aicore::indicators::trend::calculate_sma;
use aicore::AiError;

#[test]
fn test_sma_identical_values() {
    let prices = vec![7.25; 10];
    assert_eq!(calculate_sma(&prices, 10).unwrap(), 7.25);
}

#[test]
fn test_sma_uses_last_period_values() {
    let prices = [100.0, 1.0, 2.0, 3.0];
    assert_eq!(calculate_sma(&prices, 3).unwrap(), 2.0);
}

#[test]
fn test_sma_insufficient_data_returns_last_price() {
    let prices = [4.0, 5.0, 6.0];
    assert_eq!(calculate_sma(&prices, 20).unwrap(), 6.0);
}

#[test]
fn test_sma_zero_period_is_invalid() {
    assert!(matches!(
        calculate_sma(&[1.0, 2.0], 0),
        Err(AiError::InvalidArgument(_))
    ));
}

#[test]
fn test_sma_empty_series_is_invalid() {
    assert!(matches!(calculate_sma(&[], 5), Err(AiError::InvalidArgument(_))));
}
