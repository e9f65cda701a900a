//! `abm-core` — foundational types for the `rust_abm` agent-based framework.
//!
//! This crate is a dependency of every other `abm-*` crate.  It has no
//! `abm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `Domain`                                      |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (per-model, seedable)                        |
//! | [`config`]      | `PopulationConfig`                                    |
//! | [`model`]       | `SpatialModel` trait                                  |
//! | [`error`]       | `AbmError`, `AbmResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod model;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PopulationConfig;
pub use error::{AbmError, AbmResult};
pub use geo::{Domain, Vec2};
pub use ids::AgentId;
pub use model::SpatialModel;
pub use rng::SimRng;
pub use time::Tick;
