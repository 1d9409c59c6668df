//! Synchronized trajectory timing.
//!
//! Each joint's duration is estimated from a trapezoidal (or, for short
//! moves, triangular) profile; the slowest joint sets the step budget
//! shared by all three.

use libm::{floorf, sqrtf};

use crate::config::JOINT_COUNT;

/// Steps the nominal acceleration ramp lasts, for every joint and distance.
pub const ACCEL_RAMP_STEPS: u32 = 1;

/// Ticks one joint needs to cover `distance` from rest to rest.
///
/// Long moves reach `max_velocity` and cruise; short moves accelerate and
/// decelerate without ever cruising.
pub fn joint_duration(distance: f32, max_velocity: f32, max_acceleration: f32) -> f32 {
    if distance <= 0.0 {
        return 0.0;
    }

    if distance >= max_velocity * max_velocity / max_acceleration {
        distance / max_velocity + max_velocity / max_acceleration
    } else {
        2.0 * sqrtf(distance / max_acceleration)
    }
}

/// Shared step budget for a motion: `floor(slowest joint duration) - 1`,
/// never negative.
pub fn plan_steps(
    distances: &[f32; JOINT_COUNT],
    max_velocities: &[f32; JOINT_COUNT],
    max_accelerations: &[f32; JOINT_COUNT],
) -> u32 {
    let slowest = (0..JOINT_COUNT)
        .map(|i| joint_duration(distances[i], max_velocities[i], max_accelerations[i]))
        .fold(0.0f32, f32::max);

    let steps = floorf(slowest) - 1.0;
    if steps > 0.0 {
        steps as u32
    } else {
        0
    }
}

/// Nominal accelerate/decelerate boundaries within a step budget.
///
/// The acceleration ramp is fixed at [`ACCEL_RAMP_STEPS`] regardless of
/// distance; deceleration nominally begins that many steps before the end.
/// The stepper's own distance-based phase rule decides the actual velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampSchedule {
    /// Steps spent accelerating.
    pub accel_steps: u32,
    /// Step index at which deceleration begins.
    pub decel_start: u32,
}

impl RampSchedule {
    /// Schedule for a step budget.
    pub fn for_steps(total_steps: u32) -> Self {
        Self {
            accel_steps: ACCEL_RAMP_STEPS,
            decel_start: total_steps.saturating_sub(ACCEL_RAMP_STEPS),
        }
    }
}
