//! `abm-agent` — agent records for the `rust_abm` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`agent`]   | `Agent` (kinematic record), `KnowledgeAgent` (diffusion), population means |
//! | [`spawn`]   | `Spawner` (fluent randomised population construction)      |
//!
//! Agents are passive data.  All behaviour lives in the model crates, which
//! hold the population in a `Vec` indexed by `AgentId`.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.  |

pub mod agent;
pub mod spawn;

#[cfg(test)]
mod tests;

pub use agent::{Agent, KnowledgeAgent, centroid, mean_speed};
pub use spawn::Spawner;
