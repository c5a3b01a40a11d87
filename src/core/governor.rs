//! Per-faction coordinator that owns its collaborators explicitly

use crate::economy::{CandidateScore, StockSimulator};
use crate::error::Result;
use crate::models::region::RegionId;
use crate::movement::{MovementStrategy, TroopMovementCalculator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Threatened regions reported per turn
pub const THREAT_REPORT_LIMIT: usize = 5;

/// Military capability the governor consults each turn
pub trait ThreatAssessor: Send {
    fn apply_strategy(&mut self, strategy: MovementStrategy);

    /// Most threatened regions, highest first
    fn assess_threats(&mut self, limit: usize) -> Vec<(RegionId, f64)>;
}

/// Economic capability the governor consults each turn
pub trait MarketAnalyzer: Send {
    /// Ranked buy/sell candidates, best buy first
    fn analyze_market(&mut self) -> Result<Vec<CandidateScore>>;
}

impl ThreatAssessor for TroopMovementCalculator {
    fn apply_strategy(&mut self, strategy: MovementStrategy) {
        self.set_movement_strategy(strategy);
    }

    fn assess_threats(&mut self, limit: usize) -> Vec<(RegionId, f64)> {
        self.calculate_threat_levels();
        self.most_threatened(limit)
    }
}

impl MarketAnalyzer for StockSimulator {
    fn analyze_market(&mut self) -> Result<Vec<CandidateScore>> {
        self.update_indicators()?;
        Ok(self.rank_candidates())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityType {
    Aggressive,
    Defensive,
    #[default]
    Balanced,
    Expansionist,
    Adaptive,
}

impl PersonalityType {
    /// Unrecognized names fall back to `Balanced`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "aggressive" => PersonalityType::Aggressive,
            "defensive" => PersonalityType::Defensive,
            "expansionist" => PersonalityType::Expansionist,
            "adaptive" => PersonalityType::Adaptive,
            _ => PersonalityType::Balanced,
        }
    }

    pub fn traits(&self) -> PersonalityTraits {
        match self {
            PersonalityType::Aggressive => PersonalityTraits::new(0.9, 0.2, 0.6, 0.4),
            PersonalityType::Defensive => PersonalityTraits::new(0.2, 0.9, 0.3, 0.4),
            PersonalityType::Balanced => PersonalityTraits::new(0.5, 0.5, 0.5, 0.5),
            PersonalityType::Expansionist => PersonalityTraits::new(0.5, 0.3, 0.9, 0.5),
            PersonalityType::Adaptive => PersonalityTraits::new(0.4, 0.5, 0.5, 0.9),
        }
    }

    pub fn movement_strategy(&self) -> MovementStrategy {
        match self {
            PersonalityType::Aggressive => MovementStrategy::Aggressive,
            PersonalityType::Defensive => MovementStrategy::Defensive,
            PersonalityType::Expansionist => MovementStrategy::Expand,
            PersonalityType::Balanced | PersonalityType::Adaptive => MovementStrategy::Balanced,
        }
    }
}

/// Trait levels, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub aggression: f64,
    pub caution: f64,
    pub expansion: f64,
    pub adaptability: f64,
}

impl PersonalityTraits {
    pub fn new(aggression: f64, caution: f64, expansion: f64, adaptability: f64) -> Self {
        Self {
            aggression: unit(aggression),
            caution: unit(caution),
            expansion: unit(expansion),
            adaptability: unit(adaptability),
        }
    }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Relative attention per concern; normalized to sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priorities {
    pub military: f64,
    pub economy: f64,
    pub diplomacy: f64,
    pub development: f64,
}

impl Priorities {
    pub fn from_traits(traits: &PersonalityTraits) -> Self {
        let military = 0.5 + traits.aggression + traits.caution * 0.5;
        let economy = 1.0 + traits.caution * 0.5;
        let diplomacy = 0.5 + traits.adaptability;
        let development = 0.5 + traits.expansion;
        let total = military + economy + diplomacy + development;

        Self {
            military: military / total,
            economy: economy / total,
            diplomacy: diplomacy / total,
            development: development / total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactionObjective {
    HoldRegion { region: RegionId },
    CaptureRegion { region: RegionId },
    GrowWealth { target: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnPlan {
    pub turn: u32,
    pub strategy: MovementStrategy,
    pub threats: Vec<(RegionId, f64)>,
    /// Threatened regions the faction has an objective to hold
    pub priority_defense: Vec<RegionId>,
    pub candidates: Vec<CandidateScore>,
    pub difficulty: u8,
}

pub const DEFAULT_DIFFICULTY: u8 = 5;
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

pub struct Governor {
    faction: String,
    personality: PersonalityType,
    traits: PersonalityTraits,
    priorities: Priorities,
    objectives: Vec<FactionObjective>,
    threat_assessor: Option<Box<dyn ThreatAssessor>>,
    market_analyzer: Option<Box<dyn MarketAnalyzer>>,
    difficulty: u8,
    current_turn: u32,
    decision_history: Vec<TurnPlan>,
}

impl Governor {
    pub fn new(faction: impl Into<String>, personality: PersonalityType) -> Self {
        let traits = personality.traits();
        Self {
            faction: faction.into(),
            personality,
            traits,
            priorities: Priorities::from_traits(&traits),
            objectives: Vec::new(),
            threat_assessor: None,
            market_analyzer: None,
            difficulty: DEFAULT_DIFFICULTY,
            current_turn: 0,
            decision_history: Vec::new(),
        }
    }

    pub fn with_threat_assessor(mut self, assessor: Box<dyn ThreatAssessor>) -> Self {
        self.threat_assessor = Some(assessor);
        self
    }

    pub fn with_market_analyzer(mut self, analyzer: Box<dyn MarketAnalyzer>) -> Self {
        self.market_analyzer = Some(analyzer);
        self
    }

    /// Clamped to 1..=10
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        self
    }

    pub fn with_objective(mut self, objective: FactionObjective) -> Self {
        self.objectives.push(objective);
        self
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn personality(&self) -> PersonalityType {
        self.personality
    }

    pub fn traits(&self) -> &PersonalityTraits {
        &self.traits
    }

    pub fn priorities(&self) -> &Priorities {
        &self.priorities
    }

    pub fn objectives(&self) -> &[FactionObjective] {
        &self.objectives
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn decision_history(&self) -> &[TurnPlan] {
        &self.decision_history
    }

    /// Advance one turn and gather reports from whichever collaborators are wired
    pub fn plan_turn(&mut self) -> Result<TurnPlan> {
        self.current_turn += 1;
        let strategy = self.personality.movement_strategy();

        let threats = match self.threat_assessor.as_mut() {
            Some(assessor) => {
                assessor.apply_strategy(strategy);
                assessor.assess_threats(THREAT_REPORT_LIMIT)
            }
            None => Vec::new(),
        };

        let candidates = match self.market_analyzer.as_mut() {
            Some(analyzer) => analyzer.analyze_market()?,
            None => Vec::new(),
        };

        let priority_defense = threats
            .iter()
            .filter(|(region, _)| {
                self.objectives.iter().any(|objective| {
                    matches!(objective, FactionObjective::HoldRegion { region: held } if held == region)
                })
            })
            .map(|(region, _)| region.clone())
            .collect();

        let plan = TurnPlan {
            turn: self.current_turn,
            strategy,
            threats,
            priority_defense,
            candidates,
            difficulty: self.difficulty,
        };

        info!(
            faction = %self.faction,
            turn = plan.turn,
            strategy = plan.strategy.as_str(),
            threats = plan.threats.len(),
            candidates = plan.candidates.len(),
            "Governor: planned turn {} for {}",
            plan.turn,
            self.faction
        );
        debug!(priority_defense = ?plan.priority_defense, "Governor: defense priorities");

        self.decision_history.push(plan.clone());
        Ok(plan)
    }
}
