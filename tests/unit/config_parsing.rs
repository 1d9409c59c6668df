//! Unit tests for TOML configuration parsing.

use arm_motion::config::{load_config, AnimationMode, ArmConfig, LimitPolicy};
use arm_motion::kinematics::LinkLengths;

/// Test parsing a full geometry and joint limit configuration from TOML.
#[test]
fn test_parse_geometry_and_limits() {
    let toml_str = r#"
[geometry]
l1 = 120.0
l2 = 80.0
l3 = 50.0
base_height = 25.0

[joints.base]
max_velocity = 0.08
max_acceleration = 0.02

[joints.elbow]
max_velocity = 0.03
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.geometry.links(), LinkLengths::new(120.0, 80.0, 50.0));
    assert_eq!(config.geometry.first_segment_length(), 95.0);
    assert_eq!(config.joints.base.max_velocity.0, 0.08);
    assert_eq!(config.joints.base.max_acceleration.0, 0.02);
    assert_eq!(config.joints.elbow.max_velocity.0, 0.03);
    // Unset fields keep reference values
    assert_eq!(config.joints.elbow.max_acceleration.0, 0.01);
    assert_eq!(config.joints.shoulder.max_velocity.0, 0.05);
}

/// Test parsing profile, animation and workspace sections.
#[test]
fn test_parse_profile_animation_workspace() {
    let toml_str = r#"
[profile]
ramp_fraction = 0.2
creep_velocity = 0.005

[animation]
slow_delay_ms = 250
fast_delay_ms = 20
default_mode = "slow"

[workspace]
min = -150.0
max = 150.0
policy = "reject"
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.profile.ramp_fraction, 0.2);
    assert_eq!(config.profile.creep_velocity.0, 0.005);
    assert_eq!(config.animation.slow_delay_ms, 250);
    assert_eq!(config.animation.fast_delay_ms, 20);
    assert_eq!(config.animation.default_mode, AnimationMode::Slow);
    assert_eq!(config.workspace.min, -150.0);
    assert_eq!(config.workspace.policy, LimitPolicy::Reject);
}

/// Test parsing home pose and named targets.
#[test]
fn test_parse_home_and_targets() {
    let toml_str = r#"
[home]
base = 0.5
shoulder = 0.0
elbow = -1.0

[targets.pick]
x = 60.0
y = 115.0
z = 80.0

[targets.place]
x = -60.0
y = 80.0
z = 20.0
mode = "fast"
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    let home = config.home.angles();
    assert_eq!(home.base(), 0.5);
    assert_eq!(home.elbow(), -1.0);

    let names: Vec<&str> = config.target_names().collect();
    assert_eq!(names, ["pick", "place"]);
    assert_eq!(config.target("pick").unwrap().mode, None);
    assert_eq!(config.target("place").unwrap().mode, Some(AnimationMode::Fast));
}

/// Test that an unknown animation mode is a parse error.
#[test]
fn test_unknown_mode_fails() {
    let toml_str = r#"
[animation]
default_mode = "warp"
"#;

    let result: Result<ArmConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("arm_motion_config_parsing.toml");
    std::fs::write(
        &path,
        r#"
[geometry]
l2 = 75.0

[targets.reference]
x = 60.0
y = 115.0
z = 80.0
"#,
    )
    .expect("Failed to write temp config");

    let config = load_config(&path).expect("Failed to load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.geometry.l1, 100.0);
    assert_eq!(config.geometry.l2, 75.0);
    assert!(config.target("reference").is_some());
}
