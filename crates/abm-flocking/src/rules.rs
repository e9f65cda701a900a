//! Pure steering rules, separated from the model so they can be tested on
//! hand-picked vectors.

use abm_core::{Domain, Vec2};

/// Heading used when a zero velocity must be rescaled.
pub const FALLBACK_HEADING: Vec2 = Vec2::UNIT_X;

/// Running sums over one agent's neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighborhood {
    /// Sum of `self.pos - other.pos` over agents inside the protected range.
    pub separation: Vec2,
    /// Sum of neighbor velocities inside the visual range.
    pub velocity_sum: Vec2,
    /// Sum of neighbor positions inside the visual range.
    pub position_sum: Vec2,
    pub count: usize,
}

/// Apply separation, alignment and cohesion to `velocity`, in that order.
pub fn steer(
    position: Vec2,
    mut velocity: Vec2,
    hood: &Neighborhood,
    avoid_factor: f64,
    matching_factor: f64,
    centering_factor: f64,
) -> Vec2 {
    velocity += hood.separation * avoid_factor;

    if hood.count > 0 {
        let n = hood.count as f64;
        let mean_velocity = hood.velocity_sum / n;
        velocity += (mean_velocity - velocity) * matching_factor;

        let mean_position = hood.position_sum / n;
        velocity += (mean_position - position) * centering_factor;
    }
    velocity
}

/// Soft steering toward the interior while inside the edge margin.
///
/// Each axis is handled independently; this is a nudge on velocity, not a
/// reflection, so agents can overshoot the edge before turning back.
pub fn boundary_nudge(position: Vec2, domain: &Domain, margin: f64, turn_factor: f64) -> Vec2 {
    let far = domain.size() - margin;
    let mut nudge = Vec2::ZERO;

    if position.x < margin {
        nudge.x += turn_factor;
    }
    if position.x > far {
        nudge.x -= turn_factor;
    }
    if position.y < margin {
        nudge.y += turn_factor;
    }
    if position.y > far {
        nudge.y -= turn_factor;
    }
    nudge
}

/// Rescale `velocity` so its magnitude lies in `[min_speed, max_speed]`.
///
/// A zero velocity below `min_speed` takes [`FALLBACK_HEADING`].
pub fn clamp_speed(velocity: Vec2, min_speed: f64, max_speed: f64) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity.with_length(max_speed, FALLBACK_HEADING)
    } else if speed < min_speed {
        if speed == 0.0 {
            log::trace!("zero velocity rescaled along fallback heading");
        }
        velocity.with_length(min_speed, FALLBACK_HEADING)
    } else {
        velocity
    }
}
