//! Angular distance and direction resolution.
//!
//! The base joint wraps, so it takes the shorter way around the circle.
//! Shoulder and elbow never wrap: they travel the plain signed difference.

use crate::config::units::{Radians, FULL_TURN};
use crate::config::{Joint, JOINT_COUNT};
use crate::kinematics::JointAngles;

use super::profile::Direction;

/// How far and which way one joint must travel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointTravel {
    /// Travel direction.
    pub direction: Direction,
    /// Unsigned angular distance, at most half a turn for the base joint.
    pub distance: f32,
}

impl JointTravel {
    /// Signed angle change this travel produces.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.direction.sign() * self.distance
    }
}

/// Resolve travel for every joint from `current` to `desired`.
pub fn resolve(current: &JointAngles, desired: &JointAngles) -> [JointTravel; JOINT_COUNT] {
    Joint::ALL.map(|joint| {
        let (from, to) = (current.get(joint), desired.get(joint));
        if joint.wraps() {
            resolve_wrapped(from, to)
        } else {
            resolve_linear(from, to)
        }
    })
}

/// Shortest arc on the circle. Ties (exactly half a turn) go forward.
pub fn resolve_wrapped(current: Radians, desired: Radians) -> JointTravel {
    let from = current.full_turn();
    let to = desired.full_turn();

    // Forward arc from `from` to `to`, in [0, 2π).
    let forward = libm::fmodf(to - from + FULL_TURN, FULL_TURN);

    if forward <= FULL_TURN / 2.0 {
        JointTravel {
            direction: Direction::Forward,
            distance: forward,
        }
    } else {
        JointTravel {
            direction: Direction::Reverse,
            distance: FULL_TURN - forward,
        }
    }
}

/// Plain signed difference.
pub fn resolve_linear(current: Radians, desired: Radians) -> JointTravel {
    let delta = desired.0 - current.0;
    JointTravel {
        direction: Direction::from_delta(delta),
        distance: libm::fabsf(delta),
    }
}
