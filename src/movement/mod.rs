//! Region threat evaluation for troop movement

pub mod calculator;
pub mod strategy;

pub use calculator::*;
pub use strategy::{MovementStrategy, StrategyWeights};
