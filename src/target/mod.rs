//! Target module for arm-motion.
//!
//! Provides the Cartesian target type and named target storage and lookup.

mod point;
mod registry;

pub use point::Target;
pub use registry::{TargetRegistry, MAX_TARGETS};
