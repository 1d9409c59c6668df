//! Per-tick output for renderers.

use crate::config::{Joint, JOINT_COUNT};
use crate::kinematics::JointAngles;
use crate::motion::MotionPhase;

/// Joint angles plus each joint's velocity phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArmPose {
    /// Current joint angles.
    pub angles: JointAngles,
    /// Current phase per joint, for color feedback.
    pub phases: [MotionPhase; JOINT_COUNT],
}

/// Rotations to apply to scene nodes.
///
/// The base node turns about the vertical axis with the opposite sign of the
/// base angle; shoulder and elbow turn about their local lateral axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneRotations {
    /// Base node rotation about the vertical axis.
    pub base_vertical: f32,
    /// Shoulder node rotation about its lateral axis.
    pub shoulder_lateral: f32,
    /// Elbow node rotation about its lateral axis.
    pub elbow_lateral: f32,
}

impl ArmPose {
    /// Phase of one joint.
    #[inline]
    pub fn phase(&self, joint: Joint) -> MotionPhase {
        self.phases[joint.index()]
    }

    /// Whether every joint is stopped.
    pub fn is_at_rest(&self) -> bool {
        self.phases.iter().all(|p| *p == MotionPhase::Stopped)
    }

    /// Scene node rotations for this pose.
    pub fn scene_rotations(&self) -> SceneRotations {
        SceneRotations {
            base_vertical: -self.angles.base(),
            shoulder_lateral: self.angles.shoulder(),
            elbow_lateral: self.angles.elbow(),
        }
    }
}
