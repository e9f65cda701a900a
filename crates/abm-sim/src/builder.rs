//! Fluent builder for constructing a [`Sim`].

use abm_core::{AbmError, SpatialModel};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<M>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default |
/// |---------------------------|---------|
/// | `.total_ticks(n)`         | 0       |
/// | `.snapshot_interval(k)`   | 1       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(model)
///     .total_ticks(500)
///     .snapshot_interval(10)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<M: SpatialModel> {
    model: M,
    total_ticks: u64,
    snapshot_interval: u64,
}

impl<M: SpatialModel> SimBuilder<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            total_ticks: 0,
            snapshot_interval: 1,
        }
    }

    /// Number of ticks [`Sim::run`] advances, counted from the model's
    /// tick at build time.
    pub fn total_ticks(mut self, ticks: u64) -> Self {
        self.total_ticks = ticks;
        self
    }

    /// Emit a snapshot every `interval` ticks.  1 = every tick.
    pub fn snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        if self.snapshot_interval == 0 {
            return Err(SimError::Config(
                "snapshot_interval must be at least 1".into(),
            ));
        }
        if self.model.agents().is_empty() {
            return Err(AbmError::EmptyPopulation.into());
        }
        let start_tick = self.model.tick();
        Ok(Sim {
            model: self.model,
            start_tick,
            total_ticks: self.total_ticks,
            snapshot_interval: self.snapshot_interval,
        })
    }
}
