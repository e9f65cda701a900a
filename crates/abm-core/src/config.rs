//! Construction parameters shared by every model.

use crate::{AbmError, AbmResult, Domain, SimRng};

/// Population-level configuration common to all models.
///
/// Model-specific coefficients live in each model crate's params struct;
/// this holds only what every model needs to lay out its initial
/// population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Number of agents.  Fixed for the lifetime of the model.
    pub population: usize,

    /// Side length of the square domain.
    pub domain_size: f64,

    /// Seed for the model-owned RNG.  The same seed always produces
    /// identical results.
    pub seed: u64,
}

impl PopulationConfig {
    pub fn new(population: usize, domain_size: f64, seed: u64) -> Self {
        Self { population, domain_size, seed }
    }

    /// Fail fast on a zero population or a non-positive domain.
    pub fn validate(&self) -> AbmResult<()> {
        validate_population(self.population)?;
        Domain::new(self.domain_size)?;
        Ok(())
    }

    /// The validated domain.
    pub fn domain(&self) -> AbmResult<Domain> {
        Domain::new(self.domain_size)
    }

    /// A fresh generator seeded from `self.seed`.
    pub fn rng(&self) -> SimRng {
        SimRng::new(self.seed)
    }
}

/// `population` must be at least one and fit in an `AgentId`.
pub fn validate_population(population: usize) -> AbmResult<()> {
    if population == 0 {
        return Err(AbmError::InvalidConfiguration(
            "population size must be positive".into(),
        ));
    }
    if u32::try_from(population).is_err() {
        return Err(AbmError::InvalidConfiguration(format!(
            "population size {population} exceeds the AgentId range"
        )));
    }
    Ok(())
}
