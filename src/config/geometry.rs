//! Arm geometry: link lengths and joint mounting.

use serde::Deserialize;

/// Lengths of the three links.
///
/// `l1` runs from the floor to the shoulder joint, `l2` from shoulder to
/// elbow and `l3` from elbow to the end-effector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkLengths {
    /// Floor to shoulder.
    pub l1: f32,
    /// Shoulder to elbow.
    pub l2: f32,
    /// Elbow to end-effector.
    pub l3: f32,
}

impl LinkLengths {
    /// Reference arm geometry.
    pub const REFERENCE: Self = Self::new(100.0, 70.0, 40.0);

    /// Create link lengths.
    pub const fn new(l1: f32, l2: f32, l3: f32) -> Self {
        Self { l1, l2, l3 }
    }

    /// Farthest shoulder-to-target distance the planar sub-chain can span.
    #[inline]
    pub fn max_reach(&self) -> f32 {
        self.l2 + self.l3
    }

    /// Nearest shoulder-to-target distance the planar sub-chain can span.
    #[inline]
    pub fn min_reach(&self) -> f32 {
        self.l2 - self.l3
    }
}

impl Default for LinkLengths {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// `[geometry]` section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Floor to shoulder length.
    pub l1: f32,
    /// Shoulder to elbow length.
    pub l2: f32,
    /// Elbow to end-effector length.
    pub l3: f32,
    /// Height of the rotating base.
    ///
    /// Visual only: the first drawn segment is `l1 - base_height` long,
    /// kinematics always uses the full `l1`.
    pub base_height: f32,
}

impl GeometryConfig {
    /// Link lengths used by the kinematics.
    pub fn links(&self) -> LinkLengths {
        LinkLengths::new(self.l1, self.l2, self.l3)
    }

    /// Length of the first link segment above the base, for renderers.
    pub fn first_segment_length(&self) -> f32 {
        self.l1 - self.base_height
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let links = LinkLengths::REFERENCE;
        Self {
            l1: links.l1,
            l2: links.l2,
            l3: links.l3,
            base_height: 20.0,
        }
    }
}
