//! Unit types for physical quantities.
//!
//! Joint angles are radians and motion is measured per discrete tick, so
//! velocities are rad/tick and accelerations rad/tick². Degrees exist for
//! configuration files and human-facing output.

use core::f32::consts::PI;
use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// One full revolution in radians.
pub const FULL_TURN: f32 = 2.0 * PI;

/// Angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Radians(pub f32);

impl Radians {
    /// Create a new Radians value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Map onto the half-open turn `(0, 2π]`.
    ///
    /// Zero maps to `2π`, matching how the base joint measures a full turn.
    pub fn full_turn(self) -> f32 {
        let wrapped = libm::fmodf(self.0, FULL_TURN);
        if wrapped <= 0.0 {
            wrapped + FULL_TURN
        } else {
            wrapped
        }
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Radians {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Angle in degrees.
///
/// Accepted in configuration for convenience; converted to [`Radians`] before use.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

/// Angular velocity in radians per tick.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct RadiansPerTick(pub f32);

impl RadiansPerTick {
    /// Create a new RadiansPerTick value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Angular acceleration in radians per tick squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct RadiansPerTickSquared(pub f32);

impl RadiansPerTickSquared {
    /// Create a new RadiansPerTickSquared value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Radians.
    fn radians(self) -> Radians;
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
    /// Convert to RadiansPerTick.
    fn radians_per_tick(self) -> RadiansPerTick;
    /// Convert to RadiansPerTickSquared.
    fn radians_per_tick_squared(self) -> RadiansPerTickSquared;
}

impl UnitExt for f32 {
    #[inline]
    fn radians(self) -> Radians {
        Radians(self)
    }

    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }

    #[inline]
    fn radians_per_tick(self) -> RadiansPerTick {
        RadiansPerTick(self)
    }

    #[inline]
    fn radians_per_tick_squared(self) -> RadiansPerTickSquared {
        RadiansPerTickSquared(self)
    }
}
