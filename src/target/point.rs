//! Cartesian target point.

use serde::Deserialize;

/// Desired end-effector position in world coordinates.
///
/// `y` is up; `x` and `z` span the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Target {
    /// Floor-plane coordinate.
    pub x: f32,
    /// Height above the floor.
    pub y: f32,
    /// Floor-plane coordinate.
    pub z: f32,
}

impl Target {
    /// Default target offered by the parameter panel.
    pub const REFERENCE: Self = Self::new(60.0, 115.0, 80.0);

    /// Create a target.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Whether every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Coordinates paired with their axis names.
    pub(crate) fn axes(&self) -> [(&'static str, f32); 3] {
        [("x", self.x), ("y", self.y), ("z", self.z)]
    }
}

impl From<[f32; 3]> for Target {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}
