//! Region graph snapshot types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type RegionId = String;

/// Controller of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Owner {
    Ai,
    Player,
    #[default]
    Neutral,
}

impl Owner {
    /// Anything other than `ai` or `player` is neutral ground
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "ai" => Owner::Ai,
            "player" => Owner::Player,
            _ => Owner::Neutral,
        }
    }
}

impl From<String> for Owner {
    fn from(name: String) -> Self {
        Owner::from_name(&name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub troops: u32,
}

impl Region {
    pub fn new(id: impl Into<RegionId>, owner: Owner, troops: u32) -> Self {
        Self {
            id: id.into(),
            owner,
            troops,
        }
    }
}

/// Partial update for a known region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub troops: Option<u32>,
}

/// Full map snapshot supplied by the game-state provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapData {
    pub regions: Vec<Region>,
    #[serde(default)]
    pub adjacency: BTreeMap<RegionId, Vec<RegionId>>,
}

impl MapData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Add an undirected edge
    pub fn with_connection(mut self, a: &str, b: &str) -> Self {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self
    }
}
