//! Closed-form inverse kinematics.
//!
//! The base yaw is decoupled from the planar shoulder/elbow sub-chain: yaw
//! points the arm's plane at the target, then the two-link problem is solved
//! in that plane with the law of cosines. Only the elbow-down branch is
//! returned.

use core::f32::consts::{FRAC_PI_2, PI};

use libm::{acosf, asinf, atan2f, sqrtf};

use super::{JointAngles, LinkLengths};
use crate::target::Target;

/// Shoulder-to-target distances below this count as coincident.
const COINCIDENT_DISTANCE: f32 = 1e-6;

/// Which reach regime the target fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reach {
    /// Target within the planar sub-chain's annulus; solved exactly.
    Normal,
    /// Target beyond full extension; arm points straight at it.
    Extended,
    /// Target inside the inner dead zone; elbow fully folded.
    Folded,
    /// Target on the shoulder point itself; elevation is undefined and the
    /// shoulder angle is a placeholder the caller may ignore.
    Degenerate,
}

impl Reach {
    /// Whether the solved pose actually places the end-effector on the target.
    #[inline]
    pub fn is_exact(self) -> bool {
        matches!(self, Reach::Normal)
    }
}

/// Result of an inverse kinematics query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IkSolution {
    /// Desired joint angles.
    pub angles: JointAngles,
    /// Reach regime the angles were derived under.
    pub reach: Reach,
}

/// Inverse trig arguments drift just outside [-1, 1] near the reach limits.
#[inline]
fn clamp_unit(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

/// Solve joint angles reaching `target`.
///
/// Unreachable targets are not errors: beyond full extension the arm is
/// laid straight along the shoulder-to-target line, inside the dead zone it
/// is folded back on itself. See [`Reach`].
pub fn solve(target: Target, links: &LinkLengths) -> IkSolution {
    let Target { x, y, z } = target;
    let LinkLengths { l1, l2, l3 } = *links;

    let base = atan2f(z, x);

    // Horizontal reach, height above the shoulder, and the straight line between.
    let d2 = sqrtf(x * x + z * z);
    let d3 = y - l1;
    let d1 = sqrtf(d2 * d2 + d3 * d3);

    if d1 < COINCIDENT_DISTANCE {
        return IkSolution {
            angles: JointAngles::new(base, -FRAC_PI_2, PI),
            reach: Reach::Degenerate,
        };
    }

    let alpha = asinf(clamp_unit(d3 / d1));

    let (shoulder, elbow, reach) = if d1 > links.max_reach() {
        (-FRAC_PI_2 + alpha, 0.0, Reach::Extended)
    } else if d1 < links.min_reach() {
        (-FRAC_PI_2 + alpha, PI, Reach::Folded)
    } else {
        let phi_1 = acosf(clamp_unit((l3 * l3 - l2 * l2 - d1 * d1) / (-2.0 * l2 * d1)));
        let phi_2 = acosf(clamp_unit((d1 * d1 - l2 * l2 - l3 * l3) / (-2.0 * l2 * l3)));
        (-FRAC_PI_2 + alpha + phi_1, -PI + phi_2, Reach::Normal)
    };

    IkSolution {
        angles: JointAngles::new(base, shoulder, elbow),
        reach,
    }
}
