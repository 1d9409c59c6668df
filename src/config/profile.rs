//! Velocity profile shaping constants.

use serde::Deserialize;

use super::units::RadiansPerTick;

/// Fraction of a joint's travel spent accelerating, and again decelerating.
pub const DEFAULT_RAMP_FRACTION: f32 = 0.10;

/// Velocity floor while decelerating, so a joint never stalls short of its goal.
pub const DEFAULT_CREEP_VELOCITY: f32 = 0.01;

/// `[profile]` section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Share of the travel distance at each end of the move used for ramping.
    pub ramp_fraction: f32,

    /// Minimum velocity during deceleration.
    pub creep_velocity: RadiansPerTick,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            ramp_fraction: DEFAULT_RAMP_FRACTION,
            creep_velocity: RadiansPerTick(DEFAULT_CREEP_VELOCITY),
        }
    }
}
