//! Unit tests for configuration validation.

use arm_motion::config::{parse_config, validate_config, ArmConfig};
use arm_motion::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[geometry]
l1 = 100.0
l2 = 70.0
l3 = 40.0

[joints.shoulder]
max_velocity = 0.04
max_acceleration = 0.008

[targets.reference]
x = 60.0
y = 115.0
z = 80.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a negative link length.
#[test]
fn test_negative_link_length() {
    let toml_str = r#"
[geometry]
l1 = -10.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidLinkLength { link: 1, .. }))
    ));
}

/// Test validation fails for a zero joint velocity.
#[test]
fn test_zero_max_velocity() {
    let toml_str = r#"
[joints.base]
max_velocity = 0.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxVelocity { joint: "base", .. }))
    ));
}

/// Test validation fails for inverted workspace bounds.
#[test]
fn test_inverted_workspace_bounds() {
    let toml_str = r#"
[workspace]
min = 100.0
max = -100.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidBounds { .. }))
    ));
}

/// Test validation fails for a non-positive creep velocity.
#[test]
fn test_invalid_creep_velocity() {
    let toml_str = r#"
[profile]
creep_velocity = 0.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidCreepVelocity(_)))
    ));
}

/// Test that parse_config runs validation after parsing.
#[test]
fn test_parse_config_validates() {
    let toml_str = r#"
[animation]
slow_delay_ms = 0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidStepDelay(0)))
    ));
}

/// Test validation fails when the base is as tall as the first link.
#[test]
fn test_base_height_reaching_shoulder() {
    let toml_str = r#"
[geometry]
l1 = 100.0
base_height = 120.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidBaseHeight { .. }))
    ));
}

/// Test validation fails when the creep floor exceeds a joint's max velocity.
#[test]
fn test_creep_above_joint_velocity() {
    let toml_str = r#"
[joints.elbow]
max_velocity = 0.02

[profile]
creep_velocity = 0.03
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidCreepVelocity(_)))
    ));
}
