//! Indicator categories and the weights used when blending them into a
//! candidate score

use serde::{Deserialize, Serialize};

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub momentum: f64,
    pub trend: f64,
    pub volatility: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            momentum: 0.35,
            trend: 0.40,
            volatility: 0.25,
        }
    }
}

impl CategoryWeights {
    /// Verify weights sum to 1.0
    pub fn verify(&self) -> bool {
        (self.momentum + self.trend + self.volatility - 1.0).abs() < 0.001
    }
}

/// Indicator registry for organizing indicators by category
pub struct IndicatorRegistry {
    weights: CategoryWeights,
}

impl IndicatorRegistry {
    /// Create a new registry with default weights
    pub fn new() -> Self {
        Self {
            weights: CategoryWeights::default(),
        }
    }

    /// Create a new registry with custom weights
    pub fn with_weights(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    pub fn category_weight(&self, category: IndicatorCategory) -> f64 {
        match category {
            IndicatorCategory::Momentum => self.weights.momentum,
            IndicatorCategory::Trend => self.weights.trend,
            IndicatorCategory::Volatility => self.weights.volatility,
        }
    }

    pub fn all_categories() -> Vec<IndicatorCategory> {
        vec![
            IndicatorCategory::Momentum,
            IndicatorCategory::Trend,
            IndicatorCategory::Volatility,
        ]
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
