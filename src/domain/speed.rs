//! Simulation speed and its mapping to an inter-generation delay.

use std::time::Duration;

use crate::error::EngineError;

/// Speed setting in `1..=100`. Larger is faster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    /// Validate a raw speed value
    pub const fn new(value: u32) -> Result<Self, EngineError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(EngineError::InvalidSpeed(value));
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Nudge the speed, clamping into range
    pub fn saturating_add(self, delta: i32) -> Self {
        let value = (self.0 as i64 + delta as i64).clamp(Self::MIN as i64, Self::MAX as i64);
        Self(value as u32)
    }

    /// Delay between generations: `base / value`
    pub fn delay(self, base: Duration) -> Duration {
        base / self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(50)
    }
}
