//! Arm configuration - root configuration structure.

use core::f32::consts::FRAC_PI_2;

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::animation::AnimationConfig;
use super::geometry::GeometryConfig;
use super::joint::JointLimitSet;
use super::limits::WorkspaceBounds;
use super::profile::ProfileConfig;
use super::target::TargetConfig;
use super::units::Radians;
use crate::kinematics::JointAngles;

/// Maximum number of named targets in a configuration.
pub const MAX_CONFIG_TARGETS: usize = 16;

/// `[home]` section: joint angles the arm starts from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Base yaw.
    pub base: Radians,
    /// Shoulder pitch.
    pub shoulder: Radians,
    /// Elbow pitch.
    pub elbow: Radians,
}

impl HomeConfig {
    /// Home pose as joint angles.
    pub fn angles(&self) -> JointAngles {
        JointAngles::new(self.base.0, self.shoulder.0, self.elbow.0)
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            base: Radians(0.0),
            shoulder: Radians(FRAC_PI_2),
            elbow: Radians(-FRAC_PI_2),
        }
    }
}

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document describes the reference arm.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Link lengths and base height.
    pub geometry: GeometryConfig,

    /// Per-joint velocity and acceleration limits.
    pub joints: JointLimitSet,

    /// Velocity profile shaping.
    pub profile: ProfileConfig,

    /// Tick pacing per animation mode.
    pub animation: AnimationConfig,

    /// Target editing range.
    pub workspace: WorkspaceBounds,

    /// Starting joint angles.
    pub home: HomeConfig,

    /// Named targets.
    pub targets: FnvIndexMap<String<32>, TargetConfig, MAX_CONFIG_TARGETS>,
}

impl ArmConfig {
    /// Get a named target by name.
    pub fn target(&self, name: &str) -> Option<&TargetConfig> {
        self.targets
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all target names.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(|s| s.as_str())
    }
}
