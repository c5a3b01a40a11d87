//! Shared data models spanning the AI subsystems.

pub mod indicators;
pub mod portfolio;
pub mod region;

pub use indicators::{BollingerBands, IndicatorSet, MacdIndicator, PriceBar};
pub use portfolio::{Position, Trade, TradeSide};
pub use region::{MapData, Owner, Region, RegionDetails, RegionId};
