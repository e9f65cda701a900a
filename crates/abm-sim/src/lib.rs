//! `abm-sim` — stepping loop for any [`SpatialModel`](abm_core::SpatialModel).
//!
//! # Loop
//!
//! ```text
//! on_snapshot(T0)                       — initial population
//! for each tick until start + total_ticks:
//!   on_tick_start(t)
//!   model.step()
//!   on_tick_end(t + 1)
//!   on_snapshot(t + 1)                  — every snapshot_interval ticks
//! on_sim_end(final tick)
//! ```
//!
//! The models never render or persist anything; observers are where a
//! caller hooks in rendering, playback buffers or its own file formats.
//! [`SnapshotRecorder`] keeps frames in memory for scrubbing.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use abm_core::SimRng;
//! use abm_flocking::{FlockingModel, FlockingParams};
//! use abm_sim::{SimBuilder, SnapshotRecorder};
//!
//! let model = FlockingModel::new(50, 500.0, FlockingParams::default(), SimRng::new(42))?;
//! let mut sim = SimBuilder::new(model).total_ticks(200).build()?;
//! let mut recorder = SnapshotRecorder::new();
//! sim.run(&mut recorder);
//! assert_eq!(recorder.len(), 201);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod recorder;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use recorder::{Frame, SnapshotRecorder};
pub use sim::Sim;
