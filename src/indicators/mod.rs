pub mod engine;
pub mod registry;
pub mod validation;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::*;
pub use momentum::{MacdSignalMode, NEUTRAL_RSI};
pub use registry::*;
pub use validation::*;
