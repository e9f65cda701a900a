//! Planar vector type and the square simulation domain.
//!
//! Positions and velocities are `f64`: the models integrate thousands of
//! small increments per run and reproducibility across runs matters more
//! than memory footprint at these population sizes.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::{AbmError, AbmResult, SimRng};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector used for both positions and velocities.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Unit heading along +x.
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f64 {
        (self - other).length_squared()
    }

    /// Rescale to magnitude `len`, keeping the heading.
    ///
    /// A zero vector has no heading; `fallback` (expected to be a unit
    /// vector) is used instead, so the result always has magnitude `len`.
    #[inline]
    pub fn with_length(self, len: f64, fallback: Vec2) -> Vec2 {
        let current = self.length();
        if current > 0.0 {
            self * (len / current)
        } else {
            fallback * len
        }
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Domain ────────────────────────────────────────────────────────────────────

/// The square region `[0, size]²` agents move in.
///
/// Positions are not hard-clamped to the domain; each model decides how it
/// keeps agents near it (soft steering for flocking, reflection for
/// diffusion).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    size: f64,
}

impl Domain {
    /// Fails with [`AbmError::InvalidConfiguration`] unless `size` is finite
    /// and strictly positive.
    pub fn new(size: f64) -> AbmResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(AbmError::InvalidConfiguration(format!(
                "domain size must be a positive finite number, got {size}"
            )));
        }
        Ok(Self { size })
    }

    /// Side length of the square.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.size).contains(&p.x) && (0.0..=self.size).contains(&p.y)
    }

    /// Uniformly distributed point in `[0, size)²`.  Draws x before y.
    pub fn random_point(&self, rng: &mut SimRng) -> Vec2 {
        let x = rng.gen_range(0.0..self.size);
        let y = rng.gen_range(0.0..self.size);
        Vec2::new(x, y)
    }
}
