//! Integration tests for arm-motion.
//!
//! These tests verify the complete workflow from TOML parsing through IK,
//! planning and stepping to the final pose.

use arm_motion::config::units::Degrees;
use arm_motion::config::{AnimationMode, ArmConfig, LimitPolicy};
use arm_motion::error::{Error, MotionError, TargetError};
use arm_motion::kinematics::{self, JointAngles, LinkLengths, Reach};
use arm_motion::motion::{resolve_wrapped, Direction, MotionPhase};
use arm_motion::{parse_config, Admission, MotionController, Target, TargetRegistry};
use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;
use proptest::prelude::*;

// =============================================================================
// Test configuration data
// =============================================================================

const ARM_CONFIG: &str = r#"
[geometry]
l1 = 100.0
l2 = 70.0
l3 = 40.0
base_height = 20.0

[joints.base]
max_velocity = 0.05
max_acceleration = 0.01

[animation]
slow_delay_ms = 500
fast_delay_ms = 50
default_mode = "fast"

[workspace]
min = -200.0
max = 200.0
policy = "reject"

[targets.reference]
x = 60.0
y = 115.0
z = 80.0
mode = "none"

[targets.behind]
x = -80.0
y = 90.0
z = -40.0

[targets.overhead]
x = 5.0
y = 200.0
z = 0.0
mode = "slow"
"#;

/// Records every requested delay.
#[derive(Default)]
struct RecordingDelay {
    calls: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}

fn reference_arm() -> MotionController {
    MotionController::from_config(&ArmConfig::default()).expect("reference config is valid")
}

fn deg(rad: f32) -> f32 {
    rad.to_degrees()
}

// =============================================================================
// Config to controller
// =============================================================================

#[test]
fn test_config_to_named_targets() {
    let config = parse_config(ARM_CONFIG).expect("Should parse arm config");
    let registry = TargetRegistry::from_config(&config);
    let mut arm = MotionController::from_config(&config).expect("Should build controller");

    assert_eq!(registry.len(), 3);
    assert_eq!(arm.links(), &LinkLengths::REFERENCE);

    // Per-target mode wins over the default
    assert_eq!(arm.go_to("reference", &registry), Ok(Admission::Snapped));

    // No mode on the target: default "fast" applies
    let admission = arm.go_to("behind", &registry).expect("Should admit");
    assert!(matches!(admission, Admission::Running { .. }));
    assert_eq!(arm.mode(), AnimationMode::Fast);
    assert_eq!(arm.step_delay_ms(), 50);

    arm.run_to_completion(&mut NoopDelay::new()).expect("Should finish");
    assert!(arm.is_idle());

    let tip = arm.end_effector();
    assert!((tip.x + 80.0).abs() < 0.05);
    assert!((tip.y - 90.0).abs() < 0.05);
    assert!((tip.z + 40.0).abs() < 0.05);
}

#[test]
fn test_unknown_named_target() {
    let config = parse_config(ARM_CONFIG).unwrap();
    let registry = TargetRegistry::from_config(&config);
    let mut arm = MotionController::from_config(&config).unwrap();
    let before = *arm.angles();

    assert!(arm.go_to("nowhere", &registry).is_err());
    assert_eq!(arm.angles(), &before);
}

#[test]
fn test_reject_policy_from_config() {
    let config = parse_config(ARM_CONFIG).unwrap();
    assert_eq!(config.workspace.policy, LimitPolicy::Reject);
    let mut arm = MotionController::from_config(&config).unwrap();

    let result = arm.set_target(Target::new(250.0, 0.0, 0.0), AnimationMode::None);
    assert!(matches!(
        result,
        Err(Error::Target(TargetError::OutOfBounds { axis: "x", .. }))
    ));
}

#[test]
fn test_non_finite_target_rejected() {
    let mut arm = reference_arm();
    let result = arm.set_target(Target::new(0.0, f32::INFINITY, 0.0), AnimationMode::Fast);

    assert_eq!(result, Err(Error::Target(TargetError::NonFinite)));
    assert!(arm.is_idle());
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_reference_target_snaps() {
    let mut arm = reference_arm();

    let admission = arm
        .set_target(Target::new(60.0, 115.0, 80.0), AnimationMode::None)
        .expect("Should admit");
    assert_eq!(admission, Admission::Snapped);

    let solution = arm.last_solution().expect("Should have solved");
    assert_eq!(solution.reach, Reach::Normal);
    assert!((deg(arm.angles().base()) - 53.13).abs() < 0.01);
    assert!((deg(arm.angles().shoulder()) + 64.29).abs() < 0.01);
    assert!((deg(arm.angles().elbow()) + 48.30).abs() < 0.01);

    assert!(arm.pose().is_at_rest());
    assert!(arm.plan().is_none());
}

#[test]
fn test_reference_target_animated_reaches_same_pose() {
    let mut snapped = reference_arm();
    snapped.set_target(Target::REFERENCE, AnimationMode::None).unwrap();

    let mut animated = reference_arm();
    animated.set_target(Target::REFERENCE, AnimationMode::Slow).unwrap();

    let mut saw_motion = false;
    while animated.is_running() {
        animated.step().unwrap();
        if !animated.pose().is_at_rest() {
            saw_motion = true;
        }
    }

    assert!(saw_motion);
    assert_eq!(animated.angles(), snapped.angles());
}

// =============================================================================
// Completion snap and idle admission
// =============================================================================

#[test]
fn test_completion_snaps_exactly() {
    let mut arm = reference_arm();
    arm.set_target(Target::new(-70.0, 60.0, 55.0), AnimationMode::Fast)
        .unwrap();
    let desired = *arm.plan().expect("Should be running").desired();

    let mut now = 0u64;
    while arm.is_running() {
        arm.tick(now);
        now += 51;
    }

    // Bit-exact, not approximately equal
    assert_eq!(arm.angles(), &desired);
    assert_eq!(arm.phases(), &[MotionPhase::Stopped; 3]);
}

#[test]
fn test_set_target_while_running_is_ignored() {
    let mut arm = reference_arm();
    arm.set_target(Target::REFERENCE, AnimationMode::Fast).unwrap();
    let planned = *arm.plan().unwrap().desired();

    for _ in 0..3 {
        arm.step().unwrap();
        let result = arm.set_target(Target::new(-100.0, 50.0, -100.0), AnimationMode::None);
        assert_eq!(result, Err(Error::Motion(MotionError::Busy)));
        assert_eq!(arm.plan().unwrap().desired(), &planned);
    }

    arm.run_to_completion(&mut NoopDelay::new()).unwrap();
    assert_eq!(arm.angles(), &planned);

    // Idle again: the next target is accepted
    assert!(arm.set_target(Target::new(-100.0, 50.0, -100.0), AnimationMode::None).is_ok());
}

#[test]
fn test_run_to_completion_paces_steps() {
    let mut arm = reference_arm();
    let total_steps = match arm.set_target(Target::REFERENCE, AnimationMode::Slow).unwrap() {
        Admission::Running { total_steps } => total_steps,
        other => panic!("expected running, got {:?}", other),
    };

    let mut delay = RecordingDelay::default();
    arm.run_to_completion(&mut delay).unwrap();

    // One pause between consecutive steps, none after the last
    assert_eq!(delay.calls.len() as u32, total_steps - 1);
    assert!(delay.calls.iter().all(|&ms| ms == 500));
    assert!(arm.is_idle());
}

#[test]
fn test_run_to_completion_when_idle() {
    let mut arm = reference_arm();
    let mut delay = RecordingDelay::default();

    arm.run_to_completion(&mut delay).unwrap();
    assert!(delay.calls.is_empty());
}

#[test]
fn test_phases_follow_profile_during_long_move() {
    let mut arm = reference_arm();
    // Nearly half a turn of base yaw
    arm.set_target(Target::new(-100.0, 110.0, 1.0), AnimationMode::Fast)
        .unwrap();

    let mut seen = Vec::new();
    while arm.is_running() {
        arm.step().unwrap();
        if let Some(plan) = arm.plan() {
            seen.push(plan.joint(arm_motion::Joint::Base).phase);
        }
    }

    assert_eq!(seen.first(), Some(&MotionPhase::Accelerating));
    assert!(seen.contains(&MotionPhase::Cruising));
    assert!(seen.contains(&MotionPhase::Decelerating));
}

// =============================================================================
// Wraparound
// =============================================================================

#[test]
fn test_wraparound_shortest_path() {
    let travel = resolve_wrapped(Degrees(10.0).to_radians(), Degrees(350.0).to_radians());

    assert_eq!(travel.direction, Direction::Reverse);
    assert!((deg(travel.distance) - 20.0).abs() < 1e-3);
}

#[test]
fn test_base_crosses_seam_the_short_way() {
    let mut arm = reference_arm();
    arm.set_target(Target::new(-90.0, 100.0, 10.0), AnimationMode::None)
        .unwrap();
    let start = arm.angles().base();

    arm.set_target(Target::new(-90.0, 100.0, -10.0), AnimationMode::Fast)
        .unwrap();
    let base = *arm.plan().unwrap().joint(arm_motion::Joint::Base);
    assert_eq!(base.direction, Direction::Forward);

    // Small sweep through ±180°, not a full lap the other way.
    let mut max_excursion = 0.0f32;
    while !arm.step().unwrap() {
        max_excursion = max_excursion.max((arm.angles().base() - start).abs());
    }
    assert!(max_excursion > 0.0);
    assert!(max_excursion < 0.5);

    // The final snap lands on the solver's side of the seam.
    assert!((arm.angles().base() + 3.031).abs() < 1e-3);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #[test]
    fn prop_motion_is_monotonic_and_bounded(
        x in -150.0f32..150.0,
        y in 0.0f32..200.0,
        z in -150.0f32..150.0,
    ) {
        let mut arm = reference_arm();
        arm.set_target(Target::new(x, y, z), AnimationMode::Fast).unwrap();

        let mut previous = [0.0f32; 3];
        while let Some(plan) = arm.plan() {
            for (i, joint) in plan.joints().iter().enumerate() {
                prop_assert!(joint.travelled >= previous[i]);
                prop_assert!(joint.velocity <= 0.05 + 1e-6);
                previous[i] = joint.travelled;
            }
            arm.step().unwrap();
        }

        let solved = arm.last_solution().unwrap().angles;
        let mut expected = solved;
        if arm.last_solution().unwrap().reach == Reach::Degenerate {
            expected = JointAngles::new(solved.base(), arm.angles().shoulder(), solved.elbow());
        }
        prop_assert_eq!(arm.angles(), &expected);
    }

    #[test]
    fn prop_clamped_targets_never_nan(
        x in -400.0f32..400.0,
        y in -400.0f32..400.0,
        z in -400.0f32..400.0,
    ) {
        let solution = kinematics::solve(Target::new(x, y, z), &LinkLengths::REFERENCE);
        prop_assert!(solution.angles.as_array().iter().all(|a| a.is_finite()));

        match solution.reach {
            Reach::Extended => prop_assert_eq!(solution.angles.elbow(), 0.0),
            Reach::Folded => prop_assert_eq!(solution.angles.elbow(), core::f32::consts::PI),
            _ => {}
        }
    }
}
