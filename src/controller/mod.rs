//! Controller module for arm-motion.
//!
//! Owns the arm's pose and sequences target admission, IK, planning and
//! stepping.

mod builder;
mod driver;
mod pose;
mod state;

pub use builder::ControllerBuilder;
pub use driver::MotionController;
pub use pose::{ArmPose, SceneRotations};
pub use state::{Admission, ControllerState};
