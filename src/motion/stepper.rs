//! Per-tick motion stepping.

use crate::config::{JointLimitSet, ProfileConfig, JOINT_COUNT};
use crate::kinematics::JointAngles;

use super::profile::{JointMotion, MotionPhase, TrajectoryPlan};

/// Advances a [`TrajectoryPlan`] one discrete tick at a time.
///
/// Phases follow the distance covered, not the clock: the first
/// `ramp_fraction` of a joint's travel accelerates, the last `ramp_fraction`
/// decelerates (never below the creep velocity), and the middle cruises.
/// A joint that has passed its distance stops where it is; the controller
/// snaps to the exact target once the step budget runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStepper {
    max_velocity: [f32; JOINT_COUNT],
    max_acceleration: [f32; JOINT_COUNT],
    ramp_fraction: f32,
    creep_velocity: f32,
}

impl MotionStepper {
    /// Create a stepper for the given limits and profile shaping.
    pub fn new(limits: &JointLimitSet, profile: &ProfileConfig) -> Self {
        Self {
            max_velocity: limits.max_velocities(),
            max_acceleration: limits.max_accelerations(),
            ramp_fraction: profile.ramp_fraction,
            creep_velocity: profile.creep_velocity.0,
        }
    }

    /// Max velocities indexed by joint.
    #[inline]
    pub fn max_velocities(&self) -> &[f32; JOINT_COUNT] {
        &self.max_velocity
    }

    /// Max accelerations indexed by joint.
    #[inline]
    pub fn max_accelerations(&self) -> &[f32; JOINT_COUNT] {
        &self.max_acceleration
    }

    /// Advance every joint by one tick and integrate `angles`.
    ///
    /// Returns `true` once the plan's step budget is used up.
    pub fn step(&self, plan: &mut TrajectoryPlan, angles: &mut JointAngles) -> bool {
        for (i, joint) in plan.joints_mut().iter_mut().enumerate() {
            angles.0[i] += self.advance_joint(i, joint);
        }

        plan.advance_clock();
        plan.is_complete()
    }

    /// Update one joint's phase and velocity, returning its angle change.
    fn advance_joint(&self, i: usize, joint: &mut JointMotion) -> f32 {
        if joint.is_inert() {
            return 0.0;
        }

        if joint.is_finished() {
            joint.phase = MotionPhase::Stopped;
            return 0.0;
        }

        let (v_max, a_max) = (self.max_velocity[i], self.max_acceleration[i]);
        let ramp = self.ramp_fraction * joint.distance;

        if joint.travelled < ramp {
            joint.phase = MotionPhase::Accelerating;
            joint.velocity = (joint.velocity + a_max).min(v_max);
        } else if joint.distance - joint.travelled < ramp {
            joint.phase = MotionPhase::Decelerating;
            joint.velocity = (joint.velocity - a_max).max(self.creep_velocity).min(v_max);
        } else {
            joint.phase = MotionPhase::Cruising;
            joint.velocity = v_max;
        }

        joint.travelled += joint.velocity;
        joint.direction.sign() * joint.velocity
    }
}
