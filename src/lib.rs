// Domain layer - grid, step rule, speed
pub mod domain;

// Application layer - engine state and the tick driver
pub mod application;

pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, Speed, presets};
pub use application::{Driver, Engine, EngineConfig, TickOutcome};
pub use error::EngineError;
pub use ui::Button;
