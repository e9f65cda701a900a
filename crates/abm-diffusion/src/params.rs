//! Diffusion coefficients.

use abm_core::error::ensure_non_negative;
use abm_core::{AbmError, AbmResult};

/// Every tunable coefficient of the diffusion model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffusionParams {
    /// Agents closer than this exchange knowledge.
    pub interaction_range: f64,
    /// Knowledge gained per informed neighbor per tick.
    pub learning_increment: f64,
    /// Per-axis velocity noise, uniform in `[-jitter, jitter]`.
    pub jitter: f64,
    /// Share of the population that starts fully informed.
    pub seed_fraction: f64,
    /// Initial velocity components are uniform in `[-bound, bound]`.
    pub initial_velocity_bound: f64,
    /// Cosmetic group is `floor(knowledge * knowledge_bands)`.
    pub knowledge_bands: u8,
}

impl Default for DiffusionParams {
    fn default() -> Self {
        Self {
            interaction_range: 15.0,
            learning_increment: 0.1,
            jitter: 0.2,
            seed_fraction: 0.05,
            initial_velocity_bound: 2.0,
            knowledge_bands: 5,
        }
    }
}

impl DiffusionParams {
    pub fn validate(&self) -> AbmResult<()> {
        ensure_non_negative("interaction_range", self.interaction_range)?;
        ensure_non_negative("learning_increment", self.learning_increment)?;
        ensure_non_negative("jitter", self.jitter)?;
        ensure_non_negative("seed_fraction", self.seed_fraction)?;
        ensure_non_negative("initial_velocity_bound", self.initial_velocity_bound)?;

        if self.seed_fraction > 1.0 {
            return Err(AbmError::InvalidConfiguration(format!(
                "seed_fraction must be at most 1, got {}",
                self.seed_fraction
            )));
        }
        if self.knowledge_bands == 0 {
            return Err(AbmError::InvalidConfiguration(
                "knowledge_bands must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// How many of `population` agents start informed: the rounded share,
    /// but never zero when `seed_fraction > 0`.
    pub fn seed_count(&self, population: usize) -> usize {
        if self.seed_fraction == 0.0 || population == 0 {
            return 0;
        }
        let share = (population as f64 * self.seed_fraction).round() as usize;
        share.clamp(1, population)
    }

    /// Cosmetic group for a knowledge level.
    #[inline]
    pub fn band(&self, knowledge: f64) -> u8 {
        let bands = self.knowledge_bands;
        ((knowledge * bands as f64).floor().max(0.0) as u8).min(bands)
    }
}
