use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::EngineConfig;
use crate::domain::{Grid, Pattern, Speed};
use crate::error::EngineError;

/// Result of one timer firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A generation was applied; the next tick is due after `next_delay`.
    Stepped { generation: u64, next_delay: Duration },
    /// The engine was stopped when the tick fired. Nothing changed and
    /// nothing should be rescheduled.
    Skipped,
}

/// Engine owns the grid and everything that gates how it advances.
///
/// Every mutating call replaces the grid with a new value, so a snapshot
/// taken through [`Engine::snapshot`] is never affected afterwards.
pub struct Engine {
    grid: Grid,
    running: bool,
    speed: Speed,
    base_delay: Duration,
    generation: u64,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with an empty grid, stopped
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let speed = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            rows = config.rows,
            cols = config.cols,
            speed = speed.get(),
            "engine created"
        );

        Ok(Self {
            grid: Grid::create_empty(config.rows, config.cols),
            running: false,
            speed,
            base_delay: config.base_delay,
            generation: 0,
            rng,
        })
    }

    /// Read-only view for renderers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current grid
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay before the next tick, from the speed as it is right now
    pub fn delay(&self) -> Duration {
        self.speed.delay(self.base_delay)
    }

    /// Set the running flag. Returns `true` only if the engine was stopped.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        info!(generation = self.generation, "simulation started");
        true
    }

    /// Clear the running flag. Pending ticks see this when they fire.
    pub fn stop(&mut self) {
        if self.running {
            info!(generation = self.generation, "simulation stopped");
        }
        self.running = false;
    }

    /// Change the speed; out-of-range values leave the old speed in place
    pub fn set_speed(&mut self, value: u32) -> Result<(), EngineError> {
        self.speed = Speed::new(value)?;
        debug!(speed = value, delay_ms = self.delay().as_millis() as u64, "speed changed");
        Ok(())
    }

    /// Adjust the speed by `delta`, clamped into range
    pub fn nudge_speed(&mut self, delta: i32) {
        self.speed = self.speed.saturating_add(delta);
        debug!(speed = self.speed.get(), "speed nudged");
    }

    /// Flip one cell
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<&Grid, EngineError> {
        self.grid = self.grid.toggle_cell(row, col)?;
        debug!(row, col, "cell toggled");
        Ok(&self.grid)
    }

    /// Stamp a preset with its top-left corner at `(row, col)`
    pub fn stamp(
        &mut self,
        pattern: &Pattern,
        row: usize,
        col: usize,
    ) -> Result<&Grid, EngineError> {
        self.grid = pattern.stamp(&self.grid, row, col)?;
        debug!(pattern = pattern.name, row, col, "pattern stamped");
        Ok(&self.grid)
    }

    /// Replace the grid with an empty one
    pub fn clear(&mut self) -> &Grid {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::create_empty(rows, cols);
        self.generation = 0;
        info!("grid cleared");
        &self.grid
    }

    /// Replace the grid with a random one drawn from the engine's rng
    pub fn randomize(&mut self) -> &Grid {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::randomize(rows, cols, &mut self.rng);
        self.generation = 0;
        info!(population = self.grid.population(), "grid randomized");
        &self.grid
    }

    /// Apply one generation regardless of the running flag
    pub fn step_once(&mut self) -> &Grid {
        self.grid = self.grid.step();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "generation applied"
        );
        &self.grid
    }

    /// One timer firing: step only if still running.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            debug!("tick skipped, engine stopped");
            return TickOutcome::Skipped;
        }
        self.step_once();
        TickOutcome::Stepped {
            generation: self.generation,
            next_delay: self.delay(),
        }
    }
}
