//! Motion controller.
//!
//! Owns every piece of mutable arm state and drives the solver, resolver,
//! timer and stepper in order.

use embedded_hal::delay::DelayNs;

use crate::config::{
    AnimationConfig, AnimationMode, ArmConfig, Joint, LinkLengths, WorkspaceBounds, JOINT_COUNT,
};
use crate::error::{Error, MotionError, Result};
use crate::kinematics::{self, ChainPoints, IkSolution, JointAngles, Reach};
use crate::motion::{self, MotionPhase, MotionStepper, TrajectoryPlan};
use crate::target::{Target, TargetRegistry};

use super::builder::ControllerBuilder;
use super::pose::ArmPose;
use super::state::{Admission, ControllerState};

/// Drives the arm from target to target.
///
/// A target is accepted only while [`ControllerState::Idle`]. With
/// [`AnimationMode::None`] the solved angles are applied immediately;
/// otherwise a synchronized trajectory runs, one step per [`tick`](Self::tick)
/// or [`step`](Self::step), and ends by snapping to the solved angles.
#[derive(Debug, Clone)]
pub struct MotionController {
    /// Link lengths used by the solver.
    links: LinkLengths,

    /// Target editing range.
    workspace: WorkspaceBounds,

    /// Tick pacing per mode.
    animation: AnimationConfig,

    /// Per-tick integrator with the joint limits baked in.
    stepper: MotionStepper,

    /// Current joint angles.
    angles: JointAngles,

    /// Current phase per joint.
    phases: [MotionPhase; JOINT_COUNT],

    /// Lifecycle state.
    state: ControllerState,

    /// Trajectory being executed (if any).
    plan: Option<TrajectoryPlan>,

    /// Mode of the current or last motion.
    mode: AnimationMode,

    /// Clock reading at the last gated step.
    last_step_ms: Option<u64>,

    /// Most recent IK result.
    last_solution: Option<IkSolution>,
}

impl MotionController {
    /// Create a controller from a validated configuration.
    pub(crate) fn new(
        links: LinkLengths,
        workspace: WorkspaceBounds,
        animation: AnimationConfig,
        stepper: MotionStepper,
        home: JointAngles,
    ) -> Self {
        Self {
            links,
            workspace,
            animation,
            stepper,
            angles: home,
            phases: [MotionPhase::Stopped; JOINT_COUNT],
            state: ControllerState::Idle,
            plan: None,
            mode: AnimationMode::None,
            last_step_ms: None,
            last_solution: None,
        }
    }

    /// Start building a controller.
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    /// Create a controller from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &ArmConfig) -> Result<Self> {
        ControllerBuilder::new().from_config(config).build()
    }

    /// Get the lifecycle state.
    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether a new target would be accepted.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == ControllerState::Idle
    }

    /// Whether a trajectory is executing.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// Get current joint angles.
    #[inline]
    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    /// Get current joint phases.
    #[inline]
    pub fn phases(&self) -> &[MotionPhase; JOINT_COUNT] {
        &self.phases
    }

    /// Angles and phases for the renderer.
    #[inline]
    pub fn pose(&self) -> ArmPose {
        ArmPose {
            angles: self.angles,
            phases: self.phases,
        }
    }

    /// Get the running trajectory, if any.
    #[inline]
    pub fn plan(&self) -> Option<&TrajectoryPlan> {
        self.plan.as_ref()
    }

    /// Mode of the current or last motion.
    #[inline]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Link lengths used by the solver.
    #[inline]
    pub fn links(&self) -> &LinkLengths {
        &self.links
    }

    /// Most recent IK result.
    #[inline]
    pub fn last_solution(&self) -> Option<&IkSolution> {
        self.last_solution.as_ref()
    }

    /// Current end-effector position.
    pub fn end_effector(&self) -> Target {
        kinematics::forward(&self.angles, &self.links)
    }

    /// Current joint positions along the chain.
    pub fn chain_points(&self) -> ChainPoints {
        kinematics::chain_points(&self.angles, &self.links)
    }

    /// Inter-step delay of the current mode in milliseconds.
    pub fn step_delay_ms(&self) -> u32 {
        self.animation.step_delay_ms(self.mode).unwrap_or(0)
    }

    /// Accept a new target.
    ///
    /// Solves IK, resolves each joint's travel from the current pose and
    /// either snaps (`AnimationMode::None`) or starts a stepped motion.
    ///
    /// # Errors
    ///
    /// - `MotionError::Busy` if a motion is running; nothing changes.
    /// - `TargetError` if the target is non-finite or rejected by the
    ///   workspace bounds.
    pub fn set_target(&mut self, target: Target, mode: AnimationMode) -> Result<Admission> {
        if self.is_running() {
            warn!("target rejected: motion in progress");
            return Err(Error::Motion(MotionError::Busy));
        }

        let target = self.workspace.admit(target).map_err(|e| {
            warn!("target rejected: {}", e);
            Error::Target(e)
        })?;

        let solution = kinematics::solve(target, &self.links);
        debug!("ik {}: reach {}", solution.angles, solution.reach);

        let mut desired = solution.angles;
        if solution.reach == Reach::Degenerate {
            // No elevation to aim at; leave the shoulder where it is.
            desired[Joint::Shoulder] = self.angles[Joint::Shoulder];
        }
        self.last_solution = Some(solution);

        let travel = motion::resolve(&self.angles, &desired);
        let plan = if mode.is_animated() {
            let distances = travel.map(|t| t.distance);
            let total_steps = motion::plan_steps(
                &distances,
                self.stepper.max_velocities(),
                self.stepper.max_accelerations(),
            );
            TrajectoryPlan::new(travel, desired, total_steps)
        } else {
            TrajectoryPlan::immediate(travel, desired)
        };
        debug!("plan: {} steps, travel {}", plan.total_steps(), travel);

        let total_steps = plan.total_steps();
        self.plan = Some(plan);
        self.mode = mode;
        self.phases = [MotionPhase::Stopped; JOINT_COUNT];
        self.last_step_ms = None;
        self.state = ControllerState::Running;

        if mode.is_animated() {
            Ok(Admission::Running { total_steps })
        } else {
            self.complete();
            Ok(Admission::Snapped)
        }
    }

    /// Accept a named target from a registry, using its mode or the
    /// configured default.
    ///
    /// # Errors
    ///
    /// `ConfigError::TargetNotFound` for unknown names, otherwise as
    /// [`set_target`](Self::set_target).
    pub fn go_to(&mut self, name: &str, registry: &TargetRegistry) -> Result<Admission> {
        let entry = registry.get_or_error(name)?;
        let mode = entry.effective_mode(self.animation.default_mode);
        self.set_target(entry.target(), mode)
    }

    /// Execute one step of the running trajectory, ignoring the clock.
    ///
    /// Returns `true` when the motion has completed and the controller is idle.
    ///
    /// # Errors
    ///
    /// `MotionError::NotRunning` if no motion is in progress.
    pub fn step(&mut self) -> Result<bool> {
        let plan = self.plan.as_mut().ok_or(MotionError::NotRunning)?;

        let done = if plan.is_complete() {
            true
        } else {
            let done = self.stepper.step(plan, &mut self.angles);
            self.phases = plan.phases();
            trace!("step {}/{}: {}", plan.elapsed(), plan.total_steps(), self.angles);
            done
        };

        if done {
            self.complete();
        }

        Ok(done)
    }

    /// Clock-gated step for a display refresh callback.
    ///
    /// Steps only while running and only once more than the mode's delay has
    /// passed since the previous step. The first tick of a motion always
    /// steps. Returns `true` if a step was taken.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_running() {
            return false;
        }

        if let Some(last) = self.last_step_ms {
            if now_ms.saturating_sub(last) <= u64::from(self.step_delay_ms()) {
                return false;
            }
        }

        self.last_step_ms = Some(now_ms);
        self.step().is_ok()
    }

    /// Run the current motion to completion (blocking), sleeping the mode's
    /// step delay between steps.
    ///
    /// Returns immediately if nothing is running.
    pub fn run_to_completion<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        while self.is_running() {
            if !self.step()? {
                delay.delay_ms(self.step_delay_ms());
            }
        }
        Ok(())
    }

    /// Abandon the running motion, holding the current angles.
    ///
    /// # Errors
    ///
    /// `MotionError::NotRunning` if no motion is in progress.
    pub fn cancel(&mut self) -> Result<()> {
        if self.plan.take().is_none() {
            return Err(Error::Motion(MotionError::NotRunning));
        }

        debug!("motion cancelled at {}", self.angles);
        self.phases = [MotionPhase::Stopped; JOINT_COUNT];
        self.state = ControllerState::Idle;
        Ok(())
    }

    /// Snap to the plan's desired angles and return to idle.
    fn complete(&mut self) {
        if let Some(plan) = self.plan.take() {
            self.angles = *plan.desired();
        }
        debug!("motion complete at {}", self.angles);
        self.phases = [MotionPhase::Stopped; JOINT_COUNT];
        self.state = ControllerState::Idle;
    }
}
