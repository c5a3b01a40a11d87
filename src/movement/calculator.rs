//! Troop-movement support: border security and two-hop threat levels over
//! a region graph snapshot.

use crate::models::region::{MapData, Owner, Region, RegionDetails, RegionId};
use crate::movement::strategy::{MovementStrategy, StrategyWeights};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info, warn};

/// Share of a second-ring enemy's troops counted toward threat
pub const SECONDARY_THREAT_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct TroopMovementCalculator {
    regions: BTreeMap<RegionId, Region>,
    adjacency: BTreeMap<RegionId, BTreeSet<RegionId>>,
    ai_regions: BTreeSet<RegionId>,
    player_regions: BTreeSet<RegionId>,
    neutral_regions: BTreeSet<RegionId>,
    strategy: MovementStrategy,
    threat_levels: BTreeMap<RegionId, f64>,
}

impl TroopMovementCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: MapData) -> Self {
        let mut calculator = Self::new();
        calculator.load_map(map);
        calculator
    }

    /// Replace the whole map. Edges are stored in both directions and edges
    /// to unknown regions are dropped.
    pub fn load_map(&mut self, map: MapData) {
        self.regions = map
            .regions
            .into_iter()
            .map(|region| (region.id.clone(), region))
            .collect();
        self.adjacency = self
            .regions
            .keys()
            .map(|id| (id.clone(), BTreeSet::new()))
            .collect();
        self.threat_levels.clear();

        let mut dropped = 0usize;
        for (from, targets) in map.adjacency {
            for to in targets {
                if from == to || !self.regions.contains_key(&from) || !self.regions.contains_key(&to) {
                    dropped += 1;
                    continue;
                }
                self.adjacency.entry(from.clone()).or_default().insert(to.clone());
                self.adjacency.entry(to).or_default().insert(from.clone());
            }
        }
        if dropped > 0 {
            warn!(dropped = dropped, "TroopMovement: ignored {} unresolved or self connections", dropped);
        }

        self.rebuild_ownership();
        info!(
            regions = self.regions.len(),
            ai = self.ai_regions.len(),
            player = self.player_regions.len(),
            neutral = self.neutral_regions.len(),
            "TroopMovement: map loaded"
        );
    }

    /// Merge details into known regions; unknown ids are ignored
    pub fn set_region_details(&mut self, details: impl IntoIterator<Item = (RegionId, RegionDetails)>) {
        for (region_id, detail) in details {
            let Some(region) = self.regions.get_mut(&region_id) else {
                debug!(region = %region_id, "TroopMovement: details for unknown region ignored");
                continue;
            };
            if let Some(troops) = detail.troops {
                region.troops = troops;
            }
            let owner = detail.owner.unwrap_or(region.owner);
            self.update_region_ownership(&region_id, owner);
        }
    }

    /// Overwrite troop counts for known regions
    pub fn set_troop_data(&mut self, troops: &HashMap<RegionId, u32>) {
        for (region_id, &count) in troops {
            if let Some(region) = self.regions.get_mut(region_id) {
                region.troops = count;
            }
        }
    }

    /// Accepts any name; unrecognized ones select `balanced`
    pub fn set_strategy(&mut self, name: &str) -> MovementStrategy {
        self.strategy = MovementStrategy::from_name(name);
        self.strategy
    }

    pub fn set_movement_strategy(&mut self, strategy: MovementStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> MovementStrategy {
        self.strategy
    }

    pub fn strategy_weights(&self) -> StrategyWeights {
        self.strategy.weights()
    }

    pub fn region(&self, region_id: &str) -> Option<&Region> {
        self.regions.get(region_id)
    }

    pub fn neighbors(&self, region_id: &str) -> Option<&BTreeSet<RegionId>> {
        self.adjacency.get(region_id)
    }

    pub fn ai_regions(&self) -> &BTreeSet<RegionId> {
        &self.ai_regions
    }

    pub fn player_regions(&self) -> &BTreeSet<RegionId> {
        &self.player_regions
    }

    pub fn neutral_regions(&self) -> &BTreeSet<RegionId> {
        &self.neutral_regions
    }

    /// Fraction of neighbors controlled by the AI, in [0, 1].
    /// 0 for unknown regions and regions without neighbors.
    pub fn border_security(&self, region_id: &str) -> f64 {
        let Some(neighbors) = self.adjacency.get(region_id) else {
            return 0.0;
        };
        if neighbors.is_empty() {
            return 0.0;
        }

        let owned = neighbors
            .iter()
            .filter(|id| self.owner_of(id) == Some(Owner::Ai))
            .count();
        owned as f64 / neighbors.len() as f64
    }

    /// Adjacent player troops plus half of the player troops one hop beyond
    /// them. Player regions and unknown ids score 0.
    pub fn threat_level(&self, region_id: &str) -> f64 {
        let Some(region) = self.regions.get(region_id) else {
            return 0.0;
        };
        if region.owner == Owner::Player {
            return 0.0;
        }
        let Some(neighbors) = self.adjacency.get(region_id) else {
            return 0.0;
        };

        neighbors
            .iter()
            .filter_map(|id| self.regions.get(id))
            .filter(|neighbor| neighbor.owner == Owner::Player)
            .map(|enemy| {
                enemy.troops as f64
                    + self.secondary_threat(&enemy.id, region_id) * SECONDARY_THREAT_FACTOR
            })
            .sum()
    }

    /// Threat for every region; player regions are recorded as 0
    pub fn calculate_threat_levels(&mut self) -> &BTreeMap<RegionId, f64> {
        let levels: BTreeMap<RegionId, f64> = self
            .regions
            .keys()
            .map(|id| (id.clone(), self.threat_level(id)))
            .collect();
        self.threat_levels = levels;
        debug!(regions = self.threat_levels.len(), "TroopMovement: threat levels recalculated");
        &self.threat_levels
    }

    pub fn threat_levels(&self) -> &BTreeMap<RegionId, f64> {
        &self.threat_levels
    }

    /// Regions ordered by threat, highest first, zero-threat regions omitted
    pub fn most_threatened(&self, limit: usize) -> Vec<(RegionId, f64)> {
        let mut ranked: Vec<(RegionId, f64)> = self
            .regions
            .keys()
            .map(|id| (id.clone(), self.threat_level(id)))
            .filter(|(_, threat)| *threat > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }

    fn secondary_threat(&self, enemy_id: &str, origin_id: &str) -> f64 {
        self.adjacency
            .get(enemy_id)
            .into_iter()
            .flatten()
            .filter(|id| id.as_str() != origin_id)
            .filter_map(|id| self.regions.get(id))
            .filter(|region| region.owner == Owner::Player)
            .map(|region| region.troops as f64)
            .sum()
    }

    fn owner_of(&self, region_id: &str) -> Option<Owner> {
        self.regions.get(region_id).map(|r| r.owner)
    }

    fn update_region_ownership(&mut self, region_id: &str, owner: Owner) {
        self.ai_regions.remove(region_id);
        self.player_regions.remove(region_id);
        self.neutral_regions.remove(region_id);

        self.ownership_list(owner).insert(region_id.to_string());
        if let Some(region) = self.regions.get_mut(region_id) {
            region.owner = owner;
        }
    }

    fn rebuild_ownership(&mut self) {
        self.ai_regions.clear();
        self.player_regions.clear();
        self.neutral_regions.clear();
        let owners: Vec<(RegionId, Owner)> = self
            .regions
            .values()
            .map(|r| (r.id.clone(), r.owner))
            .collect();
        for (id, owner) in owners {
            self.ownership_list(owner).insert(id);
        }
    }

    fn ownership_list(&mut self, owner: Owner) -> &mut BTreeSet<RegionId> {
        match owner {
            Owner::Ai => &mut self.ai_regions,
            Owner::Player => &mut self.player_regions,
            Owner::Neutral => &mut self.neutral_regions,
        }
    }
}
