//! Movement strategies and their scoring weight tables

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovementStrategy {
    Aggressive,
    Defensive,
    Expand,
    Consolidate,
    #[default]
    Balanced,
}

impl MovementStrategy {
    /// Unrecognized names fall back to `Balanced`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "aggressive" => MovementStrategy::Aggressive,
            "defensive" => MovementStrategy::Defensive,
            "expand" => MovementStrategy::Expand,
            "consolidate" => MovementStrategy::Consolidate,
            _ => MovementStrategy::Balanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementStrategy::Aggressive => "aggressive",
            MovementStrategy::Defensive => "defensive",
            MovementStrategy::Expand => "expand",
            MovementStrategy::Consolidate => "consolidate",
            MovementStrategy::Balanced => "balanced",
        }
    }

    pub fn weights(&self) -> StrategyWeights {
        let base = StrategyWeights::default();
        match self {
            MovementStrategy::Balanced => base,
            MovementStrategy::Aggressive => StrategyWeights {
                resource: 0.8,
                border: 0.7,
                defensive: 0.6,
                owned: 0.8,
                enemy: 1.6,
                neutral: 1.2,
                ..base
            },
            MovementStrategy::Defensive => StrategyWeights {
                connectivity: 1.2,
                border: 1.5,
                defensive: 1.6,
                owned: 1.4,
                enemy: 0.6,
                neutral: 0.7,
                ..base
            },
            MovementStrategy::Expand => StrategyWeights {
                resource: 1.3,
                connectivity: 1.2,
                border: 0.9,
                defensive: 0.8,
                owned: 0.7,
                enemy: 0.9,
                neutral: 1.6,
                ..base
            },
            MovementStrategy::Consolidate => StrategyWeights {
                resource: 1.1,
                connectivity: 1.3,
                border: 1.3,
                defensive: 1.2,
                owned: 1.5,
                enemy: 0.5,
                neutral: 0.6,
                ..base
            },
        }
    }
}

/// Multiplicative weights consumed by move scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub base: f64,
    pub resource: f64,
    pub connectivity: f64,
    pub border: f64,
    pub defensive: f64,
    pub owned: f64,
    pub enemy: f64,
    pub neutral: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            resource: 1.0,
            connectivity: 1.0,
            border: 1.0,
            defensive: 1.0,
            owned: 1.0,
            enemy: 1.0,
            neutral: 1.0,
        }
    }
}
