//! Joint identifiers and per-joint motion limits.

use serde::Deserialize;

use super::units::{RadiansPerTick, RadiansPerTickSquared};

/// Number of actuated joints.
pub const JOINT_COUNT: usize = 3;

/// Reference max velocity for every joint (rad/tick).
pub const DEFAULT_MAX_VELOCITY: f32 = 0.05;

/// Reference max acceleration for every joint (rad/tick²).
pub const DEFAULT_MAX_ACCELERATION: f32 = 0.01;

/// One of the three revolute joints, base first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Joint {
    /// Yaw about the vertical axis. Wraps at 2π.
    Base,
    /// First pitch joint at the top of the first link.
    Shoulder,
    /// Second pitch joint between links two and three.
    Elbow,
}

impl Joint {
    /// All joints in chain order.
    pub const ALL: [Joint; JOINT_COUNT] = [Joint::Base, Joint::Shoulder, Joint::Elbow];

    /// Array index of this joint.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Joint::Base => 0,
            Joint::Shoulder => 1,
            Joint::Elbow => 2,
        }
    }

    /// Joint name as used in configuration files.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Joint::Base => "base",
            Joint::Shoulder => "shoulder",
            Joint::Elbow => "elbow",
        }
    }

    /// Whether the joint angle is interpreted modulo a full turn.
    #[inline]
    pub const fn wraps(self) -> bool {
        matches!(self, Joint::Base)
    }
}

/// Velocity and acceleration limits for one joint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct JointLimits {
    /// Maximum angular velocity in radians per tick.
    pub max_velocity: RadiansPerTick,

    /// Maximum angular acceleration in radians per tick squared.
    pub max_acceleration: RadiansPerTickSquared,
}

impl JointLimits {
    /// Create new joint limits.
    pub const fn new(max_velocity: RadiansPerTick, max_acceleration: RadiansPerTickSquared) -> Self {
        Self {
            max_velocity,
            max_acceleration,
        }
    }
}

impl Default for JointLimits {
    fn default() -> Self {
        Self::new(
            RadiansPerTick(DEFAULT_MAX_VELOCITY),
            RadiansPerTickSquared(DEFAULT_MAX_ACCELERATION),
        )
    }
}

/// Limits for all three joints (`[joints.base]`, `[joints.shoulder]`, `[joints.elbow]`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct JointLimitSet {
    /// Base joint limits.
    pub base: JointLimits,
    /// Shoulder joint limits.
    pub shoulder: JointLimits,
    /// Elbow joint limits.
    pub elbow: JointLimits,
}

impl JointLimitSet {
    /// Same limits on every joint.
    pub const fn uniform(limits: JointLimits) -> Self {
        Self {
            base: limits,
            shoulder: limits,
            elbow: limits,
        }
    }

    /// Limits of a single joint.
    pub fn get(&self, joint: Joint) -> &JointLimits {
        match joint {
            Joint::Base => &self.base,
            Joint::Shoulder => &self.shoulder,
            Joint::Elbow => &self.elbow,
        }
    }

    /// Max velocities indexed by [`Joint::index`].
    pub fn max_velocities(&self) -> [f32; JOINT_COUNT] {
        Joint::ALL.map(|j| self.get(j).max_velocity.0)
    }

    /// Max accelerations indexed by [`Joint::index`].
    pub fn max_accelerations(&self) -> [f32; JOINT_COUNT] {
        Joint::ALL.map(|j| self.get(j).max_acceleration.0)
    }
}
