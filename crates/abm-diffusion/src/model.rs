//! The `DiffusionModel` struct and its tick.

use abm_agent::{KnowledgeAgent, Spawner};
use abm_core::config::validate_population;
use abm_core::{
    AbmError, AbmResult, AgentId, Domain, PopulationConfig, SimRng, SpatialModel, Tick, Vec2,
};
use abm_spatial::NeighborIndex;

use crate::DiffusionParams;

// ── DiffusionStats ────────────────────────────────────────────────────────────

/// Population-level knowledge summary for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffusionStats {
    /// Agents with any knowledge (`> 0`).
    pub informed: usize,
    /// Agents at full knowledge (`>= 1`).
    pub saturated: usize,
    pub mean_knowledge: f64,
    /// `informed / population`.
    pub informed_fraction: f64,
}

// ── DiffusionModel ────────────────────────────────────────────────────────────

/// Randomly drifting agents that pass a scalar "knowledge" to neighbors.
///
/// Owns its [`SimRng`]; the jitter draws are the only randomness after
/// construction and are taken in ascending id order, so a seed fully
/// determines the run.
pub struct DiffusionModel {
    params: DiffusionParams,
    domain: Domain,
    /// Ordered by ascending `AgentId`.
    agents: Vec<KnowledgeAgent>,
    rng: SimRng,
    tick: Tick,
}

impl DiffusionModel {
    // ── Construction ──────────────────────────────────────────────────────

    /// Spawn `population` agents uniformly over `[0, domain_size]²` with
    /// velocity components in `[-b, b]` (`b = params.initial_velocity_bound`),
    /// group 0, and a random subset of
    /// [`seed_count`](DiffusionParams::seed_count) agents fully informed.
    pub fn new(
        population: usize,
        domain_size: f64,
        params: DiffusionParams,
        mut rng: SimRng,
    ) -> AbmResult<Self> {
        validate_population(population)?;
        let domain = Domain::new(domain_size)?;
        params.validate()?;

        let mut agents: Vec<KnowledgeAgent> = Spawner::new(population, domain)
            .velocity_bound(params.initial_velocity_bound)
            .spawn(&mut rng)
            .into_iter()
            .map(|a| KnowledgeAgent::new(a, 0.0))
            .collect();

        let seeded = params.seed_count(population);
        for slot in rng.sample_indices(population, seeded) {
            agents[slot].knowledge_level = 1.0;
        }

        log::debug!(
            "diffusion model: {population} agents on a {domain_size}-unit domain, {seeded} seeded"
        );

        Ok(Self { params, domain, agents, rng, tick: Tick::ZERO })
    }

    /// Build from a shared [`PopulationConfig`], seeding a fresh RNG from it.
    pub fn from_config(config: &PopulationConfig, params: DiffusionParams) -> AbmResult<Self> {
        Self::new(config.population, config.domain_size, params, config.rng())
    }

    /// Build from an explicit initial population.  `rng` drives the jitter.
    ///
    /// Agents are sorted by id.  Rejects an empty population, duplicate ids,
    /// non-finite kinematics and knowledge outside `[0, 1]`.
    pub fn from_agents(
        mut agents: Vec<KnowledgeAgent>,
        domain_size: f64,
        params: DiffusionParams,
        rng: SimRng,
    ) -> AbmResult<Self> {
        if agents.is_empty() {
            return Err(AbmError::EmptyPopulation);
        }
        validate_population(agents.len())?;
        let domain = Domain::new(domain_size)?;
        params.validate()?;

        agents.sort_by_key(KnowledgeAgent::id);
        if let Some(pair) = agents.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(AbmError::DuplicateAgent(pair[0].id()));
        }
        for a in &agents {
            if !a.agent.position().is_finite() || !a.agent.velocity().is_finite() {
                return Err(AbmError::InvalidConfiguration(format!(
                    "agent {} has a non-finite position or velocity",
                    a.id()
                )));
            }
            if !(0.0..=1.0).contains(&a.knowledge_level) {
                return Err(AbmError::InvalidConfiguration(format!(
                    "agent {} knowledge {} outside [0, 1]",
                    a.id(),
                    a.knowledge_level
                )));
            }
        }

        Ok(Self { params, domain, agents, rng, tick: Tick::ZERO })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Read-only snapshot, ordered by id.
    pub fn agents(&self) -> &[KnowledgeAgent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&KnowledgeAgent> {
        self.agents
            .binary_search_by_key(&id, KnowledgeAgent::id)
            .ok()
            .map(|slot| &self.agents[slot])
    }

    pub fn params(&self) -> &DiffusionParams {
        &self.params
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn stats(&self) -> DiffusionStats {
        let n = self.agents.len();
        let informed = self.agents.iter().filter(|a| a.is_informed()).count();
        let saturated = self.agents.iter().filter(|a| a.is_saturated()).count();
        let total: f64 = self.agents.iter().map(|a| a.knowledge_level).sum();
        DiffusionStats {
            informed,
            saturated,
            mean_knowledge: total / n as f64,
            informed_fraction: informed as f64 / n as f64,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every agent by one tick.
    ///
    /// Movement and transfer are both computed into buffers first; agents
    /// are only written in the final commit loop.
    pub fn step(&mut self) {
        let moved = self.compute_movement();

        let positions: Vec<Vec2> = moved.iter().map(|&(p, _)| p).collect();
        let index = NeighborIndex::build(&positions);
        let gains = self.compute_gains(&index);

        let params = &self.params;
        for ((a, (position, velocity)), gain) in self.agents.iter_mut().zip(moved).zip(gains) {
            a.agent.set_kinematics(position, velocity);
            a.knowledge_level = (a.knowledge_level + gain).min(1.0);
            a.agent.group = params.band(a.knowledge_level);
        }
        self.tick = self.tick + 1;

        log::trace!("diffusion {}: {:?}", self.tick, self.stats());
    }

    /// Jitter, reflect and integrate every agent, in id order.
    fn compute_movement(&mut self) -> Vec<(Vec2, Vec2)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let rng = &mut self.rng;
        let jitter = self.params.jitter;
        let domain = &self.domain;

        self.agents
            .iter()
            .map(|a| {
                let position = a.agent.position();
                let mut velocity = a.agent.velocity();
                velocity.x += rng.symmetric(jitter);
                velocity.y += rng.symmetric(jitter);
                velocity = reflect(position, velocity, domain);
                (position + velocity, velocity)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_gains(&self, index: &NeighborIndex) -> Vec<f64> {
        let mut scratch = Vec::new();
        (0..self.agents.len())
            .map(|slot| self.gain_for(slot, index, &mut scratch))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn compute_gains(&self, index: &NeighborIndex) -> Vec<f64> {
        use rayon::prelude::*;

        (0..self.agents.len())
            .into_par_iter()
            .map_init(Vec::new, |scratch, slot| self.gain_for(slot, index, scratch))
            .collect()
    }

    /// Knowledge the agent in `slot` learns this tick, before clamping.
    ///
    /// Every pair within range is considered once from each side: the
    /// learner gains one increment per informed neighbor as long as it is
    /// not yet saturated.  Reads only pre-transfer levels.
    fn gain_for(&self, slot: usize, index: &NeighborIndex, scratch: &mut Vec<usize>) -> f64 {
        if self.agents[slot].is_saturated() {
            return 0.0;
        }
        index.within_excluding(slot, self.params.interaction_range, scratch);
        let informed_neighbors = scratch
            .iter()
            .filter(|&&other| self.agents[other].is_informed())
            .count();
        informed_neighbors as f64 * self.params.learning_increment
    }
}

/// Negate each velocity component whose axis the agent is outside of while
/// still heading further out.
///
/// An agent outside the domain that is already moving back in keeps its
/// velocity: jitter can leave it outside for more than one tick, and flipping
/// it again would push it back out and trap it beyond the edge.
fn reflect(position: Vec2, mut velocity: Vec2, domain: &Domain) -> Vec2 {
    let size = domain.size();
    if (position.x < 0.0 && velocity.x < 0.0) || (position.x > size && velocity.x > 0.0) {
        velocity.x = -velocity.x;
    }
    if (position.y < 0.0 && velocity.y < 0.0) || (position.y > size && velocity.y > 0.0) {
        velocity.y = -velocity.y;
    }
    velocity
}

impl SpatialModel for DiffusionModel {
    type Agent = KnowledgeAgent;

    fn step(&mut self) {
        DiffusionModel::step(self);
    }

    fn agents(&self) -> &[KnowledgeAgent] {
        &self.agents
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
