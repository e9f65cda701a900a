//! Simulation observer trait for progress reporting and data collection.

use abm_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// stepping loop.  `A` is the model's agent record type.
///
/// Every hook defaults to a no-op.
///
/// # Example — informed-count trace
///
/// ```rust,ignore
/// struct InformedTrace(Vec<(Tick, usize)>);
///
/// impl SimObserver<KnowledgeAgent> for InformedTrace {
///     fn on_snapshot(&mut self, tick: Tick, agents: &[KnowledgeAgent]) {
///         let n = agents.iter().filter(|a| a.is_informed()).count();
///         self.0.push((tick, n));
///     }
/// }
/// ```
pub trait SimObserver<A> {
    /// Called before the model steps away from `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the model has completed the step that reached `tick`.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called for the initial population and then every
    /// `snapshot_interval` ticks.
    ///
    /// `agents` is the model's read-only view, ordered by id.  Clone it if
    /// it must outlive the call.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[A]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl<A> SimObserver<A> for NoopObserver {}
