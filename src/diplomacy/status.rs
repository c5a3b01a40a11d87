use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStatus {
    War,
    Hostile,
    Unfriendly,
    Neutral,
    Cordial,
    Friendly,
    Allied,
}

/// Inclusive upper bounds for each status; anything above `friendly` is allied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpinionThresholds {
    pub war: i32,
    pub hostile: i32,
    pub unfriendly: i32,
    pub neutral: i32,
    pub cordial: i32,
    pub friendly: i32,
}

impl Default for OpinionThresholds {
    fn default() -> Self {
        Self {
            war: -75,
            hostile: -25,
            unfriendly: -5,
            neutral: 5,
            cordial: 25,
            friendly: 50,
        }
    }
}

pub fn relationship_status(opinion: i32, thresholds: &OpinionThresholds) -> RelationshipStatus {
    if opinion <= thresholds.war {
        RelationshipStatus::War
    } else if opinion <= thresholds.hostile {
        RelationshipStatus::Hostile
    } else if opinion <= thresholds.unfriendly {
        RelationshipStatus::Unfriendly
    } else if opinion <= thresholds.neutral {
        RelationshipStatus::Neutral
    } else if opinion <= thresholds.cordial {
        RelationshipStatus::Cordial
    } else if opinion <= thresholds.friendly {
        RelationshipStatus::Friendly
    } else {
        RelationshipStatus::Allied
    }
}
