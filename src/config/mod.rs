//! Configuration module for arm-motion.
//!
//! Provides types for loading and validating arm geometry, joint limits,
//! profile shaping and named targets from TOML files (with `std` feature)
//! or pre-parsed data.

mod animation;
mod geometry;
mod joint;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod profile;
mod system;
mod target;
pub mod units;
mod validation;

pub use animation::{AnimationConfig, AnimationMode};
pub use geometry::{GeometryConfig, LinkLengths};
pub use joint::{
    Joint, JointLimitSet, JointLimits, DEFAULT_MAX_ACCELERATION, DEFAULT_MAX_VELOCITY, JOINT_COUNT,
};
pub use limits::{LimitPolicy, WorkspaceBounds};
pub use profile::{ProfileConfig, DEFAULT_CREEP_VELOCITY, DEFAULT_RAMP_FRACTION};
pub use system::{ArmConfig, HomeConfig, MAX_CONFIG_TARGETS};
pub use target::TargetConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Radians, RadiansPerTick, RadiansPerTickSquared};
