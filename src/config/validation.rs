//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::joint::Joint;
use super::ArmConfig;

/// Validate an arm configuration.
///
/// Checks:
/// - Link lengths are finite and positive, base height lies in [0, l1)
/// - Joint velocity/acceleration limits are finite and positive
/// - Ramp fraction lies in (0, 0.5); the creep velocity is positive and
///   no faster than any joint's max velocity
/// - Workspace bounds are ordered (min < max)
/// - Animated step delays are non-zero
pub fn validate_config(config: &ArmConfig) -> Result<()> {
    validate_geometry(config)?;

    for joint in Joint::ALL {
        validate_joint(joint, config)?;
    }

    validate_profile(config)?;

    if !config.workspace.is_valid() {
        return Err(Error::Config(ConfigError::InvalidBounds {
            min: config.workspace.min,
            max: config.workspace.max,
        }));
    }

    for delay in [config.animation.slow_delay_ms, config.animation.fast_delay_ms] {
        if delay == 0 {
            return Err(Error::Config(ConfigError::InvalidStepDelay(delay)));
        }
    }

    Ok(())
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_geometry(config: &ArmConfig) -> Result<()> {
    let links = config.geometry.links();
    for (link, value) in [(1, links.l1), (2, links.l2), (3, links.l3)] {
        if !is_positive(value) {
            return Err(Error::Config(ConfigError::InvalidLinkLength { link, value }));
        }
    }

    let base_height = config.geometry.base_height;
    if !(base_height.is_finite() && base_height >= 0.0 && base_height < links.l1) {
        return Err(Error::Config(ConfigError::InvalidBaseHeight {
            base_height,
            l1: links.l1,
        }));
    }

    Ok(())
}

fn validate_joint(joint: Joint, config: &ArmConfig) -> Result<()> {
    let limits = config.joints.get(joint);

    if !is_positive(limits.max_velocity.0) {
        return Err(Error::Config(ConfigError::InvalidMaxVelocity {
            joint: joint.name(),
            value: limits.max_velocity.0,
        }));
    }

    if !is_positive(limits.max_acceleration.0) {
        return Err(Error::Config(ConfigError::InvalidMaxAcceleration {
            joint: joint.name(),
            value: limits.max_acceleration.0,
        }));
    }

    Ok(())
}

fn validate_profile(config: &ArmConfig) -> Result<()> {
    let ramp = config.profile.ramp_fraction;
    if !(ramp > 0.0 && ramp < 0.5) {
        return Err(Error::Config(ConfigError::InvalidRampFraction(ramp)));
    }

    let creep = config.profile.creep_velocity.0;
    let slowest = config
        .joints
        .max_velocities()
        .into_iter()
        .fold(f32::INFINITY, f32::min);
    if !is_positive(creep) || creep > slowest {
        return Err(Error::Config(ConfigError::InvalidCreepVelocity(creep)));
    }

    Ok(())
}
