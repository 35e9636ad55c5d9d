mod config;
mod driver;
mod engine;

pub use config::EngineConfig;
pub use driver::Driver;
pub use engine::{Engine, TickOutcome};
