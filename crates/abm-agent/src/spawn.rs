//! Fluent builder for a randomised initial population.
//!
//! # Usage
//!
//! ```rust
//! use abm_agent::Spawner;
//! use abm_core::{Domain, SimRng};
//!
//! let domain = Domain::new(500.0).unwrap();
//! let mut rng = SimRng::new(42);
//!
//! let agents = Spawner::new(50, domain)
//!     .velocity_bound(1.0)
//!     .groups(3)
//!     .spawn(&mut rng);
//!
//! assert_eq!(agents.len(), 50);
//! assert!(agents.iter().all(|a| a.group < 3));
//! ```

use abm_core::{AgentId, Domain, SimRng, Vec2};

use crate::Agent;

/// Fluent builder for the initial `Vec<Agent>` of a model.
///
/// Draw order is fixed (per agent, ascending id: x, y, vx, vy, group) so a
/// seed always reproduces the same population.
pub struct Spawner {
    count: usize,
    domain: Domain,
    velocity_bound: f64,
    groups: u8,
}

impl Spawner {
    /// Spawn `count` agents uniformly over `domain`.
    ///
    /// Defaults: velocity components in `[-1, 1]`, a single group.
    /// `count` must already have been validated to fit in an `AgentId`.
    pub fn new(count: usize, domain: Domain) -> Self {
        Self {
            count,
            domain,
            velocity_bound: 1.0,
            groups: 1,
        }
    }

    /// Initial velocity components are drawn from `[-bound, bound]`.
    pub fn velocity_bound(mut self, bound: f64) -> Self {
        self.velocity_bound = bound;
        self
    }

    /// Cosmetic groups are drawn uniformly from `0..groups`.  With one group
    /// (the default) every agent is group 0 and no randomness is consumed.
    pub fn groups(mut self, groups: u8) -> Self {
        self.groups = groups.max(1);
        self
    }

    /// Build the population, ids `0..count`.
    pub fn spawn(self, rng: &mut SimRng) -> Vec<Agent> {
        (0..self.count as u32)
            .map(|i| {
                let position = self.domain.random_point(rng);
                let vx = rng.symmetric(self.velocity_bound);
                let vy = rng.symmetric(self.velocity_bound);
                let group = if self.groups > 1 {
                    rng.gen_range(0..self.groups)
                } else {
                    0
                };
                Agent::new(AgentId(i), position, Vec2::new(vx, vy), group)
            })
            .collect()
    }
}
