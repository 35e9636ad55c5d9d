use std::time::Duration;

use crate::domain::Speed;
use crate::error::EngineError;

/// Construction parameters for an [`Engine`](super::Engine).
///
/// Dimensions are fixed for the engine's lifetime; `speed` is only the
/// starting value and can be changed later.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub speed: u32,
    /// Delay at speed 1. The delay at speed `n` is `base_delay / n`.
    pub base_delay: Duration,
    /// Seed for the randomizer; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check dimensions and speed, returning the validated speed
    pub fn validate(&self) -> Result<Speed, EngineError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Speed::new(self.speed)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            speed: Speed::default().get(),
            base_delay: Duration::from_millis(1000),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (50, 50));
        assert_eq!(config.validate(), Ok(Speed::default()));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = EngineConfig::default().with_dimensions(0, 10);
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 10 })
        );
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let config = EngineConfig::default().with_dimensions(usize::MAX, 2);
        assert_eq!(
            config.validate(),
            Err(EngineError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2,
            })
        );
    }

    #[test]
    fn test_bad_speed_rejected() {
        let config = EngineConfig::default().with_speed(0);
        assert_eq!(config.validate(), Err(EngineError::InvalidSpeed(0)));
    }
}
