//! # arm-motion
//!
//! Inverse kinematics and synchronized joint motion for a three-joint arm:
//! a rotating base, a shoulder and an elbow.
//!
//! ## Features
//!
//! - **Closed-form IK**: yaw plus a two-link planar solve, clamped for
//!   unreachable targets instead of producing NaN
//! - **Synchronized motion**: all joints share one step budget and finish together
//! - **Velocity phases**: every joint reports accelerating/cruising/decelerating
//!   for visual feedback
//! - **Configuration-driven**: geometry, limits and named targets in TOML
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arm_motion::{AnimationMode, MotionController, Target};
//!
//! let config = arm_motion::load_config("arm.toml")?;
//! let mut arm = MotionController::from_config(&config)?;
//!
//! arm.set_target(Target::new(60.0, 115.0, 80.0), AnimationMode::Fast)?;
//!
//! // From a display refresh callback
//! arm.tick(now_ms);
//! let pose = arm.pose();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log;

// Core modules
pub mod config;
pub mod controller;
pub mod error;
pub mod kinematics;
pub mod motion;
pub mod target;

// Re-exports for ergonomic API
pub use config::{validate_config, AnimationMode, ArmConfig, Joint, LimitPolicy};
pub use controller::{Admission, ArmPose, ControllerBuilder, ControllerState, MotionController};
pub use error::{Error, Result};
pub use kinematics::{IkSolution, JointAngles, LinkLengths, Reach};
pub use motion::{Direction, MotionPhase, TrajectoryPlan};
pub use target::{Target, TargetRegistry};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Radians, RadiansPerTick, RadiansPerTickSquared};
