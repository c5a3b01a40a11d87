//! Simulated stock-trading AI

pub mod scoring;
pub mod simulator;
pub mod strategy;

pub use scoring::{CandidateScore, TradeAction};
pub use simulator::StockSimulator;
pub use strategy::TradingStrategy;
