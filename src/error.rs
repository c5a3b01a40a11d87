//! Crate-wide error type

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Unknown faction: {0}")]
    UnknownFaction(String),

    #[error("Insufficient funds: required {required:.2}, available {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("Insufficient holdings of {symbol}: requested {requested}, held {held}")]
    InsufficientHoldings {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("Market data error: {0}")]
    MarketData(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, AiError>;
