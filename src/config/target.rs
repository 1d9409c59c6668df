//! Named target configuration from TOML.

use serde::Deserialize;

use super::animation::AnimationMode;
use crate::target::Target;

/// A named target from configuration (`[targets.<name>]`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TargetConfig {
    /// Floor-plane coordinate.
    pub x: f32,

    /// Height above the floor.
    pub y: f32,

    /// Floor-plane coordinate.
    pub z: f32,

    /// Animation mode for this target; falls back to `[animation].default_mode`.
    #[serde(default)]
    pub mode: Option<AnimationMode>,
}

impl TargetConfig {
    /// Create a named target entry.
    pub fn new(target: Target, mode: Option<AnimationMode>) -> Self {
        Self {
            x: target.x,
            y: target.y,
            z: target.z,
            mode,
        }
    }

    /// The Cartesian point.
    pub fn target(&self) -> Target {
        Target::new(self.x, self.y, self.z)
    }

    /// Effective animation mode given the configured default.
    pub fn effective_mode(&self, default: AnimationMode) -> AnimationMode {
        self.mode.unwrap_or(default)
    }
}
