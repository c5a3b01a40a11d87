//! Faction registry with symmetric pairwise opinions

use crate::diplomacy::status::{relationship_status, OpinionThresholds, RelationshipStatus};
use crate::error::{AiError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const MIN_OPINION: i32 = -100;
pub const MAX_OPINION: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: String,
    pub name: String,
}

impl Faction {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiplomacyHandler {
    factions: BTreeMap<String, Faction>,
    relations: BTreeMap<(String, String), i32>,
    thresholds: OpinionThresholds,
}

impl DiplomacyHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: OpinionThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn thresholds(&self) -> &OpinionThresholds {
        &self.thresholds
    }

    pub fn add_faction(&mut self, faction: Faction) {
        self.factions.insert(faction.id.clone(), faction);
    }

    pub fn faction(&self, id: &str) -> Option<&Faction> {
        self.factions.get(id)
    }

    /// Opinion between two factions; pairs never set start at 0
    pub fn opinion(&self, a: &str, b: &str) -> Result<i32> {
        let key = self.pair_key(a, b)?;
        Ok(self.relations.get(&key).copied().unwrap_or(0))
    }

    /// Set the opinion, clamped to [-100, 100]
    pub fn set_opinion(&mut self, a: &str, b: &str, opinion: i32) -> Result<i32> {
        let key = self.pair_key(a, b)?;
        let clamped = opinion.clamp(MIN_OPINION, MAX_OPINION);
        self.relations.insert(key, clamped);
        debug!(a = %a, b = %b, opinion = clamped, "Diplomacy: opinion set");
        Ok(clamped)
    }

    pub fn adjust_opinion(&mut self, a: &str, b: &str, delta: i32) -> Result<i32> {
        let current = self.opinion(a, b)?;
        self.set_opinion(a, b, current.saturating_add(delta))
    }

    pub fn status_between(&self, a: &str, b: &str) -> Result<RelationshipStatus> {
        Ok(relationship_status(self.opinion(a, b)?, &self.thresholds))
    }

    fn pair_key(&self, a: &str, b: &str) -> Result<(String, String)> {
        for id in [a, b] {
            if !self.factions.contains_key(id) {
                return Err(AiError::UnknownFaction(id.to_string()));
            }
        }
        if a == b {
            return Err(AiError::InvalidArgument(format!(
                "faction {} cannot hold an opinion of itself",
                a
            )));
        }
        Ok(if a < b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        })
    }
}
