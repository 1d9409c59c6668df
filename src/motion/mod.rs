//! Motion module for arm-motion.
//!
//! Resolves per-joint travel, times a synchronized trapezoidal motion and
//! steps it tick by tick.

mod profile;
mod resolver;
mod stepper;
mod timer;

pub use profile::{Direction, JointMotion, MotionPhase, TrajectoryPlan};
pub use resolver::{resolve, resolve_linear, resolve_wrapped, JointTravel};
pub use stepper::MotionStepper;
pub use timer::{joint_duration, plan_steps, RampSchedule, ACCEL_RAMP_STEPS};
