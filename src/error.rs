//! Error types for the automaton engine.

use thiserror::Error;

/// Errors signalled back to the caller. None of them leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate fell outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Speed outside the accepted range.
    #[error("speed {0} is outside 1..=100")]
    InvalidSpeed(u32),

    /// Grids need at least one row and one column.
    #[error("grid dimensions {rows}x{cols} must both be positive")]
    InvalidDimensions { rows: usize, cols: usize },
}
