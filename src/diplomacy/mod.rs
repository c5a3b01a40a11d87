//! Faction opinions and relationship classification

pub mod handler;
pub mod status;

pub use handler::{DiplomacyHandler, Faction};
pub use status::{relationship_status, OpinionThresholds, RelationshipStatus};
