//! Controller lifecycle state.

/// What the controller is doing.
///
/// Solving is synchronous inside [`set_target`](super::MotionController::set_target),
/// so only the resting and moving states are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// At rest; new targets are accepted.
    #[default]
    Idle,
    /// Executing a trajectory; new targets are rejected.
    Running,
}

impl ControllerState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            ControllerState::Idle => "Idle",
            ControllerState::Running => "Running",
        }
    }
}

/// How a target was taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Admission {
    /// Angles were applied at once; the controller is idle again.
    Snapped,
    /// A stepped motion started with this step budget.
    Running {
        /// Shared step budget for all joints.
        total_steps: u32,
    },
}
