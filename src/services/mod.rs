//! External data sources

pub mod market_data;

pub use market_data::{InMemoryMarketData, MarketDataProvider};
