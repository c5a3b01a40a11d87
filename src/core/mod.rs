//! Orchestration: faction governor and parallel evaluation runtime

pub mod governor;
pub mod runtime;

pub use governor::*;
pub use runtime::*;
