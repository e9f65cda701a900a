//! `abm-flocking` — the boids flocking model.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`params`] | `FlockingParams` — every coefficient, with defaults          |
//! | [`rules`]  | Pure steering functions: boundary nudge, speed clamp         |
//! | [`model`]  | `FlockingModel` — population + snapshot-then-commit `step()` |
//!
//! # Tick
//!
//! ```text
//! ① Snapshot  — index start-of-tick positions (R-tree).
//! ② Compute   — for every agent, from the snapshot only:
//!                 separation  (neighbors within protected_range)
//!                 alignment   (mean velocity within visual_range)
//!                 cohesion    (mean position within visual_range)
//!                 boundary nudge, speed clamp, Euler integration
//!               (parallel with the `parallel` feature).
//! ③ Commit    — write every next state in one pass.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon's thread pool.         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.     |

pub mod model;
pub mod params;
pub mod rules;


pub use model::FlockingModel;
pub use params::FlockingParams;
