//! Forward kinematics.
//!
//! Shares the inverse solver's conventions: a shoulder angle of zero points
//! link two straight up, and the elbow angle is measured relative to link
//! two, so a straight arm has `elbow == 0`.

use core::f32::consts::FRAC_PI_2;

use libm::{cosf, sinf};

use super::{JointAngles, LinkLengths};
use crate::target::Target;

/// World positions of the joints along the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainPoints {
    /// Shoulder joint (top of link one).
    pub shoulder: Target,
    /// Elbow joint (end of link two).
    pub elbow: Target,
    /// End-effector (end of link three).
    pub tip: Target,
}

/// Place every joint of the chain.
pub fn chain_points(angles: &JointAngles, links: &LinkLengths) -> ChainPoints {
    let yaw = angles.base();
    let (sin_yaw, cos_yaw) = (sinf(yaw), cosf(yaw));

    // Elevations above the floor plane, inside the arm's vertical plane.
    let e2 = angles.shoulder() + FRAC_PI_2;
    let e3 = e2 + angles.elbow();

    let elbow_r = links.l2 * cosf(e2);
    let elbow_h = links.l1 + links.l2 * sinf(e2);
    let tip_r = elbow_r + links.l3 * cosf(e3);
    let tip_h = elbow_h + links.l3 * sinf(e3);

    let place = |r: f32, h: f32| Target::new(r * cos_yaw, h, r * sin_yaw);

    ChainPoints {
        shoulder: place(0.0, links.l1),
        elbow: place(elbow_r, elbow_h),
        tip: place(tip_r, tip_h),
    }
}

/// End-effector position for the given joint angles.
pub fn forward(angles: &JointAngles, links: &LinkLengths) -> Target {
    chain_points(angles, links).tip
}
