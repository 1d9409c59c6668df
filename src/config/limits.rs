//! Workspace bounds for target coordinates.

use serde::Deserialize;

use crate::error::TargetError;
use crate::target::Target;

/// Policy for handling coordinates outside the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Reject targets that leave the workspace.
    Reject,
    /// Clamp each coordinate to the nearest bound.
    #[default]
    Clamp,
}

/// `[workspace]` section: the editing range applied to every axis.
///
/// This is the only check a target sees before inverse kinematics. Points
/// inside the box may still be out of the arm's reach; the solver handles
/// those by clamping the posture.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkspaceBounds {
    /// Lower bound for x, y and z.
    pub min: f32,

    /// Upper bound for x, y and z.
    pub max: f32,

    /// What to do when a coordinate is out of range.
    pub policy: LimitPolicy,
}

impl WorkspaceBounds {
    /// Create new bounds.
    pub fn new(min: f32, max: f32, policy: LimitPolicy) -> Self {
        Self { min, max, policy }
    }

    /// Check if bounds are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check if a coordinate is within bounds.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Apply the policy to a single coordinate.
    ///
    /// Returns `Some(value)` if valid or clamped, `None` if rejected.
    pub fn apply(&self, value: f32) -> Option<f32> {
        if self.contains(value) {
            Some(value)
        } else {
            match self.policy {
                LimitPolicy::Reject => None,
                LimitPolicy::Clamp => Some(value.clamp(self.min, self.max)),
            }
        }
    }

    /// Apply the policy to a whole target.
    ///
    /// # Errors
    ///
    /// `TargetError::NonFinite` for NaN/infinite coordinates (under either
    /// policy), `TargetError::OutOfBounds` for the first rejected axis.
    pub fn admit(&self, target: Target) -> Result<Target, TargetError> {
        if !target.is_finite() {
            return Err(TargetError::NonFinite);
        }

        let mut admitted = [0.0; 3];
        for (slot, (axis, value)) in admitted.iter_mut().zip(target.axes()) {
            *slot = self.apply(value).ok_or(TargetError::OutOfBounds {
                axis,
                value,
                min: self.min,
                max: self.max,
            })?;
        }

        Ok(Target::from(admitted))
    }
}

impl Default for WorkspaceBounds {
    fn default() -> Self {
        Self::new(-200.0, 200.0, LimitPolicy::Clamp)
    }
}
