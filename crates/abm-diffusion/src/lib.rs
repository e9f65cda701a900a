//! `abm-diffusion` — knowledge diffusion among randomly drifting agents.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`params`] | `DiffusionParams` — coefficients, with defaults            |
//! | [`model`]  | `DiffusionModel`, `DiffusionStats`                         |
//!
//! # Tick
//!
//! ```text
//! ① Move      — per agent, ascending id (one RNG stream):
//!                 jitter velocity by U[-jitter, jitter] per axis
//!                 reflect off any edge the agent is outside of
//!                 integrate position += velocity
//! ② Transfer  — index post-move positions; every agent below 1.0 gains
//!               learning_increment per informed neighbor within
//!               interaction_range, read from the pre-transfer levels
//!               (parallel with the `parallel` feature).
//! ③ Commit    — write kinematics, clamp knowledge to 1.0, recompute the
//!               cosmetic knowledge band.
//! ```
//!
//! The transfer is synchronous: knowledge gained this tick is not passed on
//! until the next tick, so the result does not depend on agent order.

pub mod model;
pub mod params;

#[cfg(test)]
mod tests;

pub use model::{DiffusionModel, DiffusionStats};
pub use params::DiffusionParams;
