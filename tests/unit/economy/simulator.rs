//! Unit tests for the stock simulator

use aicore::economy::{StockSimulator, TradeAction, TradingStrategy};
use aicore::models::indicators::PriceBar;
use aicore::models::portfolio::TradeSide;
use aicore::AiError;

fn simulator() -> StockSimulator {
    StockSimulator::new(10_000.0, 0.5, TradingStrategy::Balanced).unwrap()
}

fn flat_bars(symbol: &str, price: f64, count: usize) -> Vec<PriceBar> {
    (0..count).map(|_| PriceBar::new(symbol, price, 100)).collect()
}

#[test]
fn test_risk_tolerance_is_clamped() {
    let low = StockSimulator::new(1_000.0, 0.01, TradingStrategy::Balanced).unwrap();
    assert_eq!(low.risk_tolerance(), 0.1);
    let high = StockSimulator::new(1_000.0, 3.0, TradingStrategy::Balanced).unwrap();
    assert_eq!(high.risk_tolerance(), 1.0);
}

#[test]
fn test_negative_cash_is_invalid() {
    assert!(matches!(
        StockSimulator::new(-1.0, 0.5, TradingStrategy::Balanced),
        Err(AiError::InvalidArgument(_))
    ));
}

#[test]
fn test_strategy_from_name() {
    assert_eq!(TradingStrategy::from_name("aggressive"), TradingStrategy::Aggressive);
    assert_eq!(TradingStrategy::from_name("yolo"), TradingStrategy::Balanced);
}

#[test]
fn test_buy_and_sell_round_trip() {
    let mut sim = simulator();
    sim.record_bars(flat_bars("ACME", 50.0, 3)).unwrap();

    let trade = sim.buy("ACME", 10).unwrap();
    assert_eq!(trade.side, TradeSide::Buy);
    assert_eq!(sim.cash(), 9_500.0);
    assert_eq!(sim.position("ACME").unwrap().quantity, 10);
    assert_eq!(sim.portfolio_value(), 10_000.0);

    sim.record_bar(PriceBar::new("ACME", 60.0, 100)).unwrap();
    assert_eq!(sim.portfolio_value(), 10_100.0);

    sim.sell("ACME", 10).unwrap();
    assert_eq!(sim.cash(), 10_100.0);
    assert!(sim.position("ACME").is_none());
    assert_eq!(sim.trade_history().len(), 2);
}

#[test]
fn test_average_cost() {
    let mut sim = simulator();
    sim.record_bar(PriceBar::new("ACME", 10.0, 1)).unwrap();
    sim.buy("ACME", 10).unwrap();
    sim.record_bar(PriceBar::new("ACME", 20.0, 1)).unwrap();
    sim.buy("ACME", 10).unwrap();
    assert_eq!(sim.position("ACME").unwrap().average_cost, 15.0);
}

#[test]
fn test_trade_errors() {
    let mut sim = simulator();
    sim.record_bars(flat_bars("ACME", 50.0, 1)).unwrap();

    assert!(matches!(sim.buy("ACME", 0), Err(AiError::InvalidArgument(_))));
    assert_eq!(sim.buy("NOPE", 1).unwrap_err(), AiError::UnknownSymbol("NOPE".to_string()));
    assert!(matches!(sim.buy("ACME", 1_000), Err(AiError::InsufficientFunds { .. })));
    assert!(matches!(sim.sell("ACME", 1), Err(AiError::InsufficientHoldings { held: 0, .. })));
    assert!(sim.trade_history().is_empty());
    assert_eq!(sim.cash(), 10_000.0);
}

#[test]
fn test_position_sizing() {
    let mut sim = simulator();
    sim.record_bars(flat_bars("ACME", 30.0, 1)).unwrap();
    // 10_000 * 0.5 * 0.20 = 1_000 -> 33 whole units at 30
    assert_eq!(sim.position_budget(), 1_000.0);
    assert_eq!(sim.suggested_quantity("ACME"), 33);
    assert_eq!(sim.suggested_quantity("NOPE"), 0);
}

#[test]
fn test_no_score_without_indicators() {
    let mut sim = simulator();
    sim.record_bars(flat_bars("ACME", 30.0, 5)).unwrap();
    assert_eq!(sim.update_indicators().unwrap(), 0);
    assert!(sim.score_candidate("ACME").is_none());
}

#[test]
fn test_falling_market_scores_above_rising_market() {
    let mut sim = simulator();
    sim.record_bars((0..40).map(|i| PriceBar::new("DOWN", 100.0 - i as f64, 100)))
        .unwrap();
    sim.record_bars((0..40).map(|i| PriceBar::new("UP", 100.0 + i as f64, 100)))
        .unwrap();
    assert_eq!(sim.update_indicators().unwrap(), 2);

    let ranked = sim.rank_candidates();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].symbol, "DOWN");
    assert_eq!(ranked[0].action, TradeAction::Buy);
    assert_eq!(ranked[1].symbol, "UP");
    assert_eq!(ranked[1].action, TradeAction::Sell);
}

#[test]
fn test_buy_rejects_quantity_overflow() {
    let mut sim = simulator();
    sim.record_bar(PriceBar::new("FREE", 0.0, 1)).unwrap();
    sim.buy("FREE", u64::MAX).unwrap();

    assert!(matches!(sim.buy("FREE", 1), Err(AiError::InvalidArgument(_))));
    assert_eq!(sim.position("FREE").unwrap().quantity, u64::MAX);
    assert_eq!(sim.trade_history().len(), 1);
    assert_eq!(sim.cash(), 10_000.0);
}
