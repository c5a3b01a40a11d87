//! Unit tests for EMA indicator

use aicore::indicators::trend::{calculate_ema, calculate_emas, check_ema_cross};
use aicore::AiError;

fn create_test_prices(count: usize, base_price: f64) -> Vec<f64> {
    (0..count).map(|i| base_price + i as f64 * 0.1).collect()
}

#[test]
fn test_ema_insufficient_data_returns_last_price() {
    let prices = create_test_prices(10, 100.0);
    assert_eq!(calculate_ema(&prices, 20).unwrap(), *prices.last().unwrap());
}

#[test]
fn test_ema_constant_series() {
    let prices = vec![42.0; 60];
    let ema = calculate_ema(&prices, 12).unwrap();
    assert!((ema - 42.0).abs() < 1e-9);
}

#[test]
fn test_ema_converges_toward_new_level() {
    let mut prices = vec![10.0; 12];
    prices.extend(vec![20.0; 100]);
    let ema = calculate_ema(&prices, 12).unwrap();
    assert!((ema - 20.0).abs() < 1e-3);
}

#[test]
fn test_ema_known_value() {
    // seed = mean(1, 2, 3) = 2, k = 0.5: (4 - 2) * 0.5 + 2 = 3, (5 - 3) * 0.5 + 3 = 4
    let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(calculate_ema(&prices, 3).unwrap(), 4.0);
}

#[test]
fn test_calculate_multiple_emas() {
    let prices = create_test_prices(250, 100.0);
    let emas = calculate_emas(&prices, &[12, 26, 50, 200]).unwrap();
    assert_eq!(emas.len(), 4);
    assert_eq!(emas[0].0, 12);
}

#[test]
fn test_ema_cross_uptrend() {
    let prices = create_test_prices(50, 100.0);
    assert_eq!(check_ema_cross(&prices, 12, 26).unwrap(), 1);
}

#[test]
fn test_ema_zero_period_is_invalid() {
    assert!(matches!(calculate_ema(&[1.0], 0), Err(AiError::InvalidArgument(_))));
}
