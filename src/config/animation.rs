//! Animation mode and tick pacing.

use serde::Deserialize;

/// How a new target is approached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Snap straight to the solved angles, no stepping.
    #[default]
    None,
    /// Step with the slow inter-step delay.
    Slow,
    /// Step with the fast inter-step delay.
    Fast,
}

impl AnimationMode {
    /// Whether the mode steps through a trajectory.
    #[inline]
    pub fn is_animated(self) -> bool {
        !matches!(self, AnimationMode::None)
    }
}

/// `[animation]` section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds between steps in [`AnimationMode::Slow`].
    pub slow_delay_ms: u32,

    /// Milliseconds between steps in [`AnimationMode::Fast`].
    pub fast_delay_ms: u32,

    /// Mode used for named targets that do not pick one.
    pub default_mode: AnimationMode,
}

impl AnimationConfig {
    /// Inter-step delay for a mode. `None` for the non-animated mode.
    pub fn step_delay_ms(&self, mode: AnimationMode) -> Option<u32> {
        match mode {
            AnimationMode::None => None,
            AnimationMode::Slow => Some(self.slow_delay_ms),
            AnimationMode::Fast => Some(self.fast_delay_ms),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            slow_delay_ms: 500,
            fast_delay_ms: 50,
            default_mode: AnimationMode::None,
        }
    }
}
