//! Self-rescheduling tick timer over an externally supplied clock.
//!
//! The frontend feeds frame time into [`Driver::advance`]; when the pending
//! tick is due the driver fires it against the engine. Whether the tick does
//! anything is decided by the engine's running flag at that moment, so a
//! `stop` issued after scheduling still suppresses the tick.

use std::time::Duration;

use tracing::debug;

use super::{Engine, TickOutcome};

#[derive(Debug, Default)]
pub struct Driver {
    now: Duration,
    pending: Option<Duration>,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time on the driver's clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// When the next tick fires, if one is scheduled
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Start the engine. On a stopped-to-running transition the first step
    /// happens immediately and replaces any stale pending tick. An engine
    /// that was flagged running elsewhere but has nothing scheduled is
    /// kicked off the same way.
    pub fn start(&mut self, engine: &mut Engine) -> TickOutcome {
        let transitioned = engine.start();
        if !transitioned && self.pending.is_some() {
            return TickOutcome::Skipped;
        }
        self.fire(engine)
    }

    /// Stop the engine. A pending tick still fires but becomes a no-op.
    pub fn stop(&mut self, engine: &mut Engine) {
        engine.stop();
    }

    /// Flip between running and stopped
    pub fn toggle(&mut self, engine: &mut Engine) {
        if engine.is_running() {
            self.stop(engine);
        } else {
            self.start(engine);
        }
    }

    /// Move the clock forward and fire the pending tick if it is due.
    /// At most one tick fires per call.
    pub fn advance(&mut self, engine: &mut Engine, elapsed: Duration) -> Option<TickOutcome> {
        self.now += elapsed;
        match self.pending {
            Some(due) if due <= self.now => Some(self.fire(engine)),
            _ => None,
        }
    }

    fn fire(&mut self, engine: &mut Engine) -> TickOutcome {
        let outcome = engine.tick();
        self.pending = match outcome {
            TickOutcome::Stepped { next_delay, .. } => Some(self.now + next_delay),
            TickOutcome::Skipped => None,
        };
        debug!(?outcome, pending = ?self.pending, "tick fired");
        outcome
    }
}
