//! The `Sim` struct and its stepping loop.

use abm_core::{SpatialModel, Tick};

use crate::SimObserver;

/// Drives one model instance and reports to an observer.
///
/// Single-owner and single-threaded; run independent instances on separate
/// threads if you need throughput.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: SpatialModel> {
    /// The model being stepped.  Read it freely between calls.
    pub model: M,

    /// Model tick when the `Sim` was built; snapshot intervals count from here.
    pub start_tick: Tick,

    /// Ticks [`run`](Self::run) advances past `start_tick`.
    pub total_ticks: u64,

    /// Emit a snapshot every this many ticks.  Always `>= 1`.
    pub snapshot_interval: u64,
}

impl<M: SpatialModel> Sim<M> {
    /// The tick at which [`run`](Self::run) stops (exclusive upper bound on
    /// ticks started).
    pub fn end_tick(&self) -> Tick {
        self.start_tick + self.total_ticks
    }

    /// Run from the current tick to [`end_tick`](Self::end_tick).
    ///
    /// Emits the initial snapshot when called on a fresh `Sim`.  Calling
    /// again after the end is reached only fires `on_sim_end`.
    pub fn run<O: SimObserver<M::Agent>>(&mut self, observer: &mut O) {
        let end = self.end_tick();
        log::info!(
            "run start at {} for {} ticks (snapshot every {})",
            self.model.tick(),
            end.0.saturating_sub(self.model.tick().0),
            self.snapshot_interval
        );

        if self.model.tick() == self.start_tick {
            observer.on_snapshot(self.start_tick, self.model.agents());
        }
        while self.model.tick() < end {
            self.advance(observer);
        }

        let final_tick = self.model.tick();
        observer.on_sim_end(final_tick);
        log::info!("run complete at {final_tick}");
    }

    /// Step exactly `n` ticks from the current position (ignores
    /// `end_tick`).
    ///
    /// Useful for tests and incremental stepping from a UI loop.
    pub fn run_ticks<O: SimObserver<M::Agent>>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.advance(observer);
        }
    }

    fn advance<O: SimObserver<M::Agent>>(&mut self, observer: &mut O) {
        let now = self.model.tick();
        observer.on_tick_start(now);
        self.model.step();

        let done = self.model.tick();
        observer.on_tick_end(done);
        if done.since(self.start_tick) % self.snapshot_interval == 0 {
            observer.on_snapshot(done, self.model.agents());
        }
    }
}
