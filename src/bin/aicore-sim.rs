//! aicore simulator
//!
//! Builds a sample map and synthetic price series, runs one evaluation
//! cycle and prints the results as JSON.

use aicore::config::{get_environment, AiConfig};
use aicore::core::governor::{FactionObjective, Governor, PersonalityType};
use aicore::core::runtime::{EvaluationRuntime, RuntimeConfig};
use aicore::economy::StockSimulator;
use aicore::logging;
use aicore::models::indicators::PriceBar;
use aicore::models::region::{MapData, Owner, Region};
use aicore::movement::TroopMovementCalculator;
use aicore::services::market_data::{InMemoryMarketData, MarketDataProvider};
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const SYMBOLS: [&str; 3] = ["IRON", "GRAIN", "SILK"];
const BARS_PER_SYMBOL: usize = 220;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AiConfig::from_env();
    info!(environment = %get_environment(), "Starting aicore simulator");
    info!(config = ?config, "Configuration");

    let provider = Arc::new(sample_market());
    let symbols: Vec<String> = SYMBOLS.iter().map(|s| s.to_string()).collect();
    let runtime = EvaluationRuntime::new(RuntimeConfig::from_ai_config(&config, symbols.clone()));

    let indicators = runtime.run_market_cycle(provider.clone()).await?;
    let threats = runtime
        .evaluate_factions(vec![("north".to_string(), sample_map())])
        .await?;

    let mut simulator = StockSimulator::from_config(&config)?;
    for symbol in &symbols {
        simulator.record_bars(provider.get_bars(symbol, BARS_PER_SYMBOL)?)?;
    }

    let mut calculator = TroopMovementCalculator::from_map(sample_map());
    calculator.set_movement_strategy(config.movement_strategy);

    let mut governor = Governor::new("north", PersonalityType::Defensive)
        .with_objective(FactionObjective::HoldRegion {
            region: "ford".to_string(),
        })
        .with_threat_assessor(Box::new(calculator))
        .with_market_analyzer(Box::new(simulator));
    let plan = governor.plan_turn()?;

    let output = json!({
        "indicators": indicators,
        "threats": threats,
        "turn_plan": plan,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn sample_map() -> MapData {
    MapData::new()
        .with_region(Region::new("capital", Owner::Ai, 12))
        .with_region(Region::new("ford", Owner::Ai, 4))
        .with_region(Region::new("marsh", Owner::Neutral, 0))
        .with_region(Region::new("hill", Owner::Player, 10))
        .with_region(Region::new("camp", Owner::Player, 4))
        .with_connection("capital", "ford")
        .with_connection("capital", "marsh")
        .with_connection("ford", "hill")
        .with_connection("marsh", "hill")
        .with_connection("hill", "camp")
}

fn sample_market() -> InMemoryMarketData {
    let start = Utc::now() - Duration::days(BARS_PER_SYMBOL as i64);
    let mut market = InMemoryMarketData::new();
    for (s, symbol) in SYMBOLS.iter().enumerate() {
        let base = 50.0 + 25.0 * s as f64;
        for i in 0..BARS_PER_SYMBOL {
            let t = i as f64;
            let close = base + t * 0.05 * (s as f64 - 1.0) + (t / (4.0 + s as f64)).sin() * 2.0;
            market.push(
                PriceBar::new(*symbol, close, 1_000 + (i as u64 * 7) % 300)
                    .with_timestamp(start + Duration::days(i as i64)),
            );
        }
    }
    market
}
