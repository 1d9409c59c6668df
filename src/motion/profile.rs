//! Trajectory plan and per-joint motion state.
//!
//! Every joint shares one step budget so all three finish together; each
//! joint still runs its own accelerate/cruise/decelerate profile over its
//! share of the distance.

use crate::config::{Joint, JOINT_COUNT};
use crate::kinematics::JointAngles;

use super::resolver::JointTravel;
use super::timer::RampSchedule;

/// Direction of joint travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing angle.
    #[default]
    Forward,
    /// Decreasing angle.
    Reverse,
}

impl Direction {
    /// Get direction from a signed angle delta. Zero counts as forward.
    #[inline]
    pub fn from_delta(delta: f32) -> Self {
        if delta >= 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Velocity phase of a joint, recomputed every step.
///
/// Renderers map each phase to a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Not moving, or done with its share of the motion.
    #[default]
    Stopped,
    /// Speeding up toward max velocity.
    Accelerating,
    /// Holding max velocity.
    Cruising,
    /// Slowing toward the creep velocity.
    Decelerating,
}

/// Runtime state of one joint within a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointMotion {
    /// Travel direction.
    pub direction: Direction,
    /// Total angular distance to cover (always >= 0).
    pub distance: f32,
    /// Distance covered so far.
    pub travelled: f32,
    /// Current speed (always >= 0).
    pub velocity: f32,
    /// Current phase.
    pub phase: MotionPhase,
}

impl JointMotion {
    /// Fresh joint state at rest.
    pub fn new(travel: JointTravel) -> Self {
        Self {
            direction: travel.direction,
            distance: travel.distance,
            travelled: 0.0,
            velocity: 0.0,
            phase: MotionPhase::Stopped,
        }
    }

    /// A joint with nothing to do for this motion.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.distance == 0.0
    }

    /// Whether the joint has covered its distance.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.travelled > self.distance
    }

    /// Distance still to cover (zero once finished).
    #[inline]
    pub fn remaining(&self) -> f32 {
        (self.distance - self.travelled).max(0.0)
    }
}

/// A planned motion from the current pose to an IK-solved pose.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrajectoryPlan {
    /// Per-joint state, indexed by [`Joint::index`].
    joints: [JointMotion; JOINT_COUNT],
    /// Angles applied verbatim on completion.
    desired: JointAngles,
    /// Shared step budget.
    total_steps: u32,
    /// Steps taken so far.
    elapsed: u32,
    /// Nominal ramp boundaries for the step budget.
    schedule: RampSchedule,
}

impl TrajectoryPlan {
    /// Create a plan at rest.
    pub fn new(travel: [JointTravel; JOINT_COUNT], desired: JointAngles, total_steps: u32) -> Self {
        Self {
            joints: travel.map(JointMotion::new),
            desired,
            total_steps,
            elapsed: 0,
            schedule: RampSchedule::for_steps(total_steps),
        }
    }

    /// Create a plan that completes without stepping.
    pub fn immediate(travel: [JointTravel; JOINT_COUNT], desired: JointAngles) -> Self {
        Self::new(travel, desired, 0)
    }

    /// State of one joint.
    #[inline]
    pub fn joint(&self, joint: Joint) -> &JointMotion {
        &self.joints[joint.index()]
    }

    /// All joint states.
    #[inline]
    pub fn joints(&self) -> &[JointMotion; JOINT_COUNT] {
        &self.joints
    }

    pub(crate) fn joints_mut(&mut self) -> &mut [JointMotion; JOINT_COUNT] {
        &mut self.joints
    }

    /// Angles the motion ends on.
    #[inline]
    pub fn desired(&self) -> &JointAngles {
        &self.desired
    }

    /// Shared step budget.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Steps taken so far.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Get steps remaining.
    #[inline]
    pub fn steps_remaining(&self) -> u32 {
        self.total_steps.saturating_sub(self.elapsed)
    }

    /// Nominal accelerate/decelerate boundaries.
    #[inline]
    pub fn schedule(&self) -> RampSchedule {
        self.schedule
    }

    /// Check if the step budget is used up.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total_steps
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.total_steps == 0 {
            1.0
        } else {
            self.elapsed as f32 / self.total_steps as f32
        }
    }

    /// Current phase of every joint.
    pub fn phases(&self) -> [MotionPhase; JOINT_COUNT] {
        self.joints.map(|j| j.phase)
    }

    /// Current velocity of every joint.
    pub fn velocities(&self) -> [f32; JOINT_COUNT] {
        self.joints.map(|j| j.velocity)
    }

    pub(crate) fn advance_clock(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }
}
