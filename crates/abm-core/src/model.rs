//! The `SpatialModel` trait: the seam between a model and whatever drives it.

use crate::{Domain, Tick};

/// A fixed population of point agents advanced one tick at a time.
///
/// Implemented by the flocking and diffusion models.  The stepping loop in
/// `abm-sim` (or any external renderer/recorder) only needs this trait:
/// call [`step`](Self::step) repeatedly and read
/// [`agents`](Self::agents) between calls.
///
/// # Contract
///
/// - `agents()` is ordered by ascending `AgentId` and its length never
///   changes.
/// - `step()` is atomic from the caller's point of view: the slice returned
///   by `agents()` is either entirely the previous tick or entirely the
///   next one.
/// - Models own their RNG, so instances share no state and may be stepped
///   on separate threads.
///
/// # Example
///
/// ```rust,ignore
/// fn advance<M: SpatialModel>(model: &mut M, ticks: u64) -> Vec<M::Agent>
/// where
///     M::Agent: Clone,
/// {
///     model.run(ticks);
///     model.agents().to_vec()
/// }
/// ```
pub trait SpatialModel: Send + 'static {
    /// Per-agent snapshot record exposed to callers.
    type Agent;

    /// Advance every agent by one discrete unit of time.
    fn step(&mut self);

    /// Read-only view of the population, ordered by id.
    fn agents(&self) -> &[Self::Agent];

    /// Number of completed ticks.
    fn tick(&self) -> Tick;

    /// The square domain the population lives in.
    fn domain(&self) -> Domain;

    /// Step `ticks` times.
    fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }
}
