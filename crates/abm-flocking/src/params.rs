//! Flocking coefficients.

use abm_core::error::ensure_non_negative;
use abm_core::{AbmError, AbmResult};

/// Every tunable coefficient of the flocking model.
///
/// `Default` gives the classic boids tuning for a few-hundred-unit domain.
/// Override individual fields with struct-update syntax:
///
/// ```rust
/// use abm_flocking::FlockingParams;
///
/// let params = FlockingParams { max_speed: 5.0, ..Default::default() };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockingParams {
    /// Radius within which neighbors contribute to alignment and cohesion.
    pub visual_range: f64,
    /// Radius within which neighbors push the agent away (separation).
    pub protected_range: f64,
    /// Cohesion weight: pull toward the neighbors' mean position.
    pub centering_factor: f64,
    /// Separation weight.
    pub avoid_factor: f64,
    /// Alignment weight: pull toward the neighbors' mean velocity.
    pub matching_factor: f64,
    /// Velocity nudge applied per axis while inside the edge margin.
    pub turn_factor: f64,
    pub max_speed: f64,
    pub min_speed: f64,
    /// Width of the band along each edge where the boundary nudge applies.
    pub margin: f64,
    /// Initial velocity components are uniform in `[-bound, bound]`.
    pub initial_velocity_bound: f64,
    /// Number of cosmetic groups assigned at spawn.
    pub groups: u8,
}

impl Default for FlockingParams {
    fn default() -> Self {
        Self {
            visual_range: 40.0,
            protected_range: 8.0,
            centering_factor: 0.005,
            avoid_factor: 0.05,
            matching_factor: 0.05,
            turn_factor: 0.2,
            max_speed: 3.0,
            min_speed: 2.0,
            margin: 20.0,
            initial_velocity_bound: 1.0,
            groups: 3,
        }
    }
}

impl FlockingParams {
    /// Reject coefficients that cannot be simulated.  Never coerces.
    pub fn validate(&self) -> AbmResult<()> {
        ensure_non_negative("visual_range", self.visual_range)?;
        ensure_non_negative("protected_range", self.protected_range)?;
        ensure_non_negative("centering_factor", self.centering_factor)?;
        ensure_non_negative("avoid_factor", self.avoid_factor)?;
        ensure_non_negative("matching_factor", self.matching_factor)?;
        ensure_non_negative("turn_factor", self.turn_factor)?;
        ensure_non_negative("max_speed", self.max_speed)?;
        ensure_non_negative("min_speed", self.min_speed)?;
        ensure_non_negative("margin", self.margin)?;
        ensure_non_negative("initial_velocity_bound", self.initial_velocity_bound)?;

        if self.max_speed == 0.0 {
            return Err(AbmError::InvalidConfiguration(
                "max_speed must be positive".into(),
            ));
        }
        if self.min_speed > self.max_speed {
            return Err(AbmError::InvalidConfiguration(format!(
                "min_speed ({}) exceeds max_speed ({})",
                self.min_speed, self.max_speed
            )));
        }
        if self.groups == 0 {
            return Err(AbmError::InvalidConfiguration(
                "groups must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Query radius that covers both neighborhoods.
    #[inline]
    pub fn search_radius(&self) -> f64 {
        self.visual_range.max(self.protected_range)
    }
}
