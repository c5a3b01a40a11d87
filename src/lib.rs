//! AI core for a strategy game: region threat evaluation, technical
//! indicators for the trading simulation, diplomacy and the per-faction
//! governor that ties them together.

pub mod common;
pub mod config;
pub mod core;
pub mod diplomacy;
pub mod economy;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod movement;
pub mod services;

pub use error::{AiError, Result};
