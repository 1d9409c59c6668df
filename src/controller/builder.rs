//! Builder pattern for MotionController.

use crate::config::{
    validate_config, AnimationConfig, ArmConfig, GeometryConfig, HomeConfig, JointLimitSet,
    LinkLengths, ProfileConfig, WorkspaceBounds,
};
use crate::error::Result;
use crate::motion::MotionStepper;

use super::driver::MotionController;

/// Builder for creating MotionController instances.
///
/// Every setting starts at the reference arm's value.
#[derive(Debug, Clone, Default)]
pub struct ControllerBuilder {
    geometry: GeometryConfig,
    joints: JointLimitSet,
    profile: ProfileConfig,
    animation: AnimationConfig,
    workspace: WorkspaceBounds,
    home: HomeConfig,
}

impl ControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set link lengths.
    pub fn links(mut self, links: LinkLengths) -> Self {
        self.geometry.l1 = links.l1;
        self.geometry.l2 = links.l2;
        self.geometry.l3 = links.l3;
        self
    }

    /// Set per-joint velocity and acceleration limits.
    pub fn limits(mut self, limits: JointLimitSet) -> Self {
        self.joints = limits;
        self
    }

    /// Set velocity profile shaping.
    pub fn profile(mut self, profile: ProfileConfig) -> Self {
        self.profile = profile;
        self
    }

    /// Set tick pacing.
    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the target editing range.
    pub fn workspace(mut self, workspace: WorkspaceBounds) -> Self {
        self.workspace = workspace;
        self
    }

    /// Set the starting joint angles.
    pub fn home(mut self, home: HomeConfig) -> Self {
        self.home = home;
        self
    }

    /// Configure from an ArmConfig. Named targets are not carried over;
    /// load them into a [`TargetRegistry`](crate::target::TargetRegistry).
    pub fn from_config(mut self, config: &ArmConfig) -> Self {
        self.geometry = config.geometry;
        self.joints = config.joints;
        self.profile = config.profile;
        self.animation = config.animation;
        self.workspace = config.workspace;
        self.home = config.home;
        self
    }

    /// Build the controller.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any setting fails validation.
    pub fn build(self) -> Result<MotionController> {
        let config = ArmConfig {
            geometry: self.geometry,
            joints: self.joints,
            profile: self.profile,
            animation: self.animation,
            workspace: self.workspace,
            home: self.home,
            targets: Default::default(),
        };
        validate_config(&config)?;

        debug!(
            "controller: links {}, home {}",
            config.geometry.links(),
            config.home.angles()
        );

        Ok(MotionController::new(
            config.geometry.links(),
            config.workspace,
            config.animation,
            MotionStepper::new(&config.joints, &config.profile),
            config.home.angles(),
        ))
    }
}
