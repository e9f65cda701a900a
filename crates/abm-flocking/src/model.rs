//! The `FlockingModel` struct and its tick.

use abm_agent::{Agent, Spawner};
use abm_core::config::validate_population;
use abm_core::{
    AbmError, AbmResult, AgentId, Domain, PopulationConfig, SimRng, SpatialModel, Tick, Vec2,
};
use abm_spatial::NeighborIndex;

use crate::FlockingParams;
use crate::rules::{self, Neighborhood};

/// A boids population on a square domain.
///
/// Every tick is computed Jacobi-style: each agent's next state depends
/// only on the population as it stood at the start of the tick, so the
/// result is independent of iteration order (and of thread scheduling with
/// the `parallel` feature).
///
/// # Example
///
/// ```rust
/// use abm_core::SimRng;
/// use abm_flocking::{FlockingModel, FlockingParams};
///
/// let mut model = FlockingModel::new(50, 500.0, FlockingParams::default(), SimRng::new(7))?;
/// model.step();
/// assert_eq!(model.agents().len(), 50);
/// # Ok::<(), abm_core::AbmError>(())
/// ```
pub struct FlockingModel {
    params: FlockingParams,
    domain: Domain,
    /// Ordered by ascending `AgentId`; the slot index is what the neighbor
    /// index reports.
    agents: Vec<Agent>,
    tick: Tick,
}

impl FlockingModel {
    // ── Construction ──────────────────────────────────────────────────────

    /// Spawn `population` agents uniformly over `[0, domain_size]²` with
    /// velocity components in `[-b, b]` (`b = params.initial_velocity_bound`)
    /// and a uniform cosmetic group.
    ///
    /// `rng` is consumed: flocking dynamics are deterministic once the
    /// population exists.
    pub fn new(
        population: usize,
        domain_size: f64,
        params: FlockingParams,
        mut rng: SimRng,
    ) -> AbmResult<Self> {
        validate_population(population)?;
        let domain = Domain::new(domain_size)?;
        params.validate()?;

        let agents = Spawner::new(population, domain)
            .velocity_bound(params.initial_velocity_bound)
            .groups(params.groups)
            .spawn(&mut rng);

        log::debug!(
            "flocking model: {population} agents on a {domain_size}-unit domain"
        );

        Ok(Self { params, domain, agents, tick: Tick::ZERO })
    }

    /// Build from a shared [`PopulationConfig`], seeding a fresh RNG from it.
    pub fn from_config(config: &PopulationConfig, params: FlockingParams) -> AbmResult<Self> {
        Self::new(config.population, config.domain_size, params, config.rng())
    }

    /// Build from an explicit initial population.
    ///
    /// Agents are sorted by id; duplicate ids and an empty population are
    /// rejected.
    pub fn from_agents(
        mut agents: Vec<Agent>,
        domain_size: f64,
        params: FlockingParams,
    ) -> AbmResult<Self> {
        if agents.is_empty() {
            return Err(AbmError::EmptyPopulation);
        }
        validate_population(agents.len())?;
        let domain = Domain::new(domain_size)?;
        params.validate()?;

        agents.sort_by_key(|a| a.id);
        if let Some(pair) = agents.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(AbmError::DuplicateAgent(pair[0].id));
        }
        if let Some(bad) = agents
            .iter()
            .find(|a| !a.position().is_finite() || !a.velocity().is_finite())
        {
            return Err(AbmError::InvalidConfiguration(format!(
                "agent {} has a non-finite position or velocity",
                bad.id
            )));
        }

        Ok(Self { params, domain, agents, tick: Tick::ZERO })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Read-only snapshot, ordered by id.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents
            .binary_search_by_key(&id, |a| a.id)
            .ok()
            .map(|slot| &self.agents[slot])
    }

    pub fn params(&self) -> &FlockingParams {
        &self.params
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Mean position of the population.
    pub fn centroid(&self) -> Vec2 {
        abm_agent::centroid(&self.agents)
    }

    /// Mean speed of the population.
    pub fn mean_speed(&self) -> f64 {
        abm_agent::mean_speed(&self.agents)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every agent by one tick.
    ///
    /// Snapshot-then-commit: all next states are computed from `&self`
    /// before any agent is written.
    pub fn step(&mut self) {
        let positions: Vec<Vec2> = self.agents.iter().map(Agent::position).collect();
        let index = NeighborIndex::build(&positions);

        let next = self.compute_next(&index);

        for (agent, (position, velocity)) in self.agents.iter_mut().zip(next) {
            agent.set_kinematics(position, velocity);
        }
        self.tick = self.tick + 1;
        log::trace!("flocking {}: mean speed {:.3}", self.tick, self.mean_speed());
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_next(&self, index: &NeighborIndex) -> Vec<(Vec2, Vec2)> {
        let mut scratch = Vec::new();
        (0..self.agents.len())
            .map(|slot| self.next_kinematics(slot, index, &mut scratch))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn compute_next(&self, index: &NeighborIndex) -> Vec<(Vec2, Vec2)> {
        use rayon::prelude::*;

        (0..self.agents.len())
            .into_par_iter()
            .map_init(Vec::new, |scratch, slot| self.next_kinematics(slot, index, scratch))
            .collect()
    }

    /// Next `(position, velocity)` of the agent in `slot`.
    fn next_kinematics(
        &self,
        slot: usize,
        index: &NeighborIndex,
        scratch: &mut Vec<usize>,
    ) -> (Vec2, Vec2) {
        let p = &self.params;
        let me = &self.agents[slot];
        let position = me.position();

        let hood = self.neighborhood(slot, position, index, scratch);
        let mut velocity = rules::steer(
            position,
            me.velocity(),
            &hood,
            p.avoid_factor,
            p.matching_factor,
            p.centering_factor,
        );
        velocity += rules::boundary_nudge(position, &self.domain, p.margin, p.turn_factor);
        velocity = rules::clamp_speed(velocity, p.min_speed, p.max_speed);

        (position + velocity, velocity)
    }

    /// Accumulate separation and visual-range sums in ascending slot order.
    fn neighborhood(
        &self,
        slot: usize,
        position: Vec2,
        index: &NeighborIndex,
        scratch: &mut Vec<usize>,
    ) -> Neighborhood {
        let p = &self.params;
        let protected_sq = p.protected_range * p.protected_range;
        let visual_sq = p.visual_range * p.visual_range;

        index.within_excluding(slot, p.search_radius(), scratch);

        let mut hood = Neighborhood::default();
        for &other_slot in scratch.iter() {
            let other = &self.agents[other_slot];
            let other_position = other.position();
            let dist_sq = position.distance_squared(other_position);

            if dist_sq < protected_sq {
                hood.separation += position - other_position;
            }
            if dist_sq < visual_sq {
                hood.velocity_sum += other.velocity();
                hood.position_sum += other_position;
                hood.count += 1;
            }
        }
        hood
    }
}

impl SpatialModel for FlockingModel {
    type Agent = Agent;

    fn step(&mut self) {
        FlockingModel::step(self);
    }

    fn agents(&self) -> &[Agent] {
        &self.agents
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
