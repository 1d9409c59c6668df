//! Kinematics for the yaw + two-link planar arm.
//!
//! Inverse kinematics maps a Cartesian target to joint angles; forward
//! kinematics goes the other way and places each joint for renderers.

mod forward;
mod inverse;

use core::ops::{Index, IndexMut};

pub use crate::config::LinkLengths;
pub use forward::{chain_points, forward, ChainPoints};
pub use inverse::{solve, IkSolution, Reach};

use crate::config::{Joint, Radians, JOINT_COUNT};

/// One angle per joint, in radians, indexed by [`Joint`].
///
/// The base angle is read modulo a full turn; shoulder and elbow are plain
/// signed angles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointAngles(pub [f32; JOINT_COUNT]);

impl JointAngles {
    /// Create from base, shoulder and elbow angles.
    pub const fn new(base: f32, shoulder: f32, elbow: f32) -> Self {
        Self([base, shoulder, elbow])
    }

    /// Angle of one joint.
    #[inline]
    pub fn get(&self, joint: Joint) -> Radians {
        Radians(self.0[joint.index()])
    }

    /// Base yaw.
    #[inline]
    pub fn base(&self) -> f32 {
        self.0[0]
    }

    /// Shoulder pitch.
    #[inline]
    pub fn shoulder(&self) -> f32 {
        self.0[1]
    }

    /// Elbow pitch.
    #[inline]
    pub fn elbow(&self) -> f32 {
        self.0[2]
    }

    /// Raw array view.
    #[inline]
    pub fn as_array(&self) -> &[f32; JOINT_COUNT] {
        &self.0
    }
}

impl Index<Joint> for JointAngles {
    type Output = f32;

    fn index(&self, joint: Joint) -> &f32 {
        &self.0[joint.index()]
    }
}

impl IndexMut<Joint> for JointAngles {
    fn index_mut(&mut self, joint: Joint) -> &mut f32 {
        &mut self.0[joint.index()]
    }
}

impl From<[f32; JOINT_COUNT]> for JointAngles {
    fn from(angles: [f32; JOINT_COUNT]) -> Self {
        Self(angles)
    }
}
