//! Example: Console renderer for the arm.
//!
//! This example demonstrates how to:
//! - Load geometry and named targets from TOML
//! - Drive the controller from a refresh callback with `tick`
//! - Map each joint's motion phase to a display color
//!
//! Run with: `cargo run --example console_arm --features std`

use std::time::{Duration, Instant};

use arm_motion::{
    config::AnimationMode,
    controller::ArmPose,
    error::Result,
    motion::MotionPhase,
    parse_config, Joint, MotionController, Target, TargetRegistry,
};

/// Display color for a motion phase (0xRRGGBB).
fn phase_color(phase: MotionPhase) -> u32 {
    match phase {
        MotionPhase::Stopped => 0x7BBCB5,
        MotionPhase::Accelerating => 0x77AA00,
        MotionPhase::Cruising => 0xDEE829,
        MotionPhase::Decelerating => 0xF10E0E,
    }
}

/// Delay backed by thread sleep.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

fn render(frame: u32, arm: &MotionController, pose: &ArmPose) {
    let rotations = pose.scene_rotations();
    let tip = arm.end_effector();

    print!("  [{:>3}]", frame);
    for joint in Joint::ALL {
        print!(
            " {:>8} {:>8.2}° #{:06X}",
            joint.name(),
            pose.angles[joint].to_degrees(),
            phase_color(pose.phase(joint))
        );
    }
    println!(
        "  base node {:>7.3} rad  tip ({:>6.1}, {:>6.1}, {:>6.1})",
        rotations.base_vertical, tip.x, tip.y, tip.z
    );
}

fn main() -> Result<()> {
    println!("=== Console Arm Example ===\n");

    let toml_content = r#"
[geometry]
l1 = 100.0
l2 = 70.0
l3 = 40.0
base_height = 20.0

[animation]
slow_delay_ms = 40
fast_delay_ms = 5
default_mode = "fast"

[targets.reference]
x = 60.0
y = 115.0
z = 80.0
mode = "slow"

[targets.behind]
x = -90.0
y = 100.0
z = -10.0

[targets.out_of_reach]
x = 200.0
y = 100.0
z = 0.0
"#;

    let config = parse_config(toml_content)?;
    let registry = TargetRegistry::from_config(&config);
    let mut arm = MotionController::from_config(&config)?;

    println!("Targets: {:?}", registry.names().collect::<Vec<_>>());
    println!(
        "First segment above base: {}\n",
        config.geometry.first_segment_length()
    );

    // Immediate snap
    println!("--- snap to (60, 115, 80) ---");
    arm.set_target(Target::REFERENCE, AnimationMode::None)?;
    render(0, &arm, &arm.pose());

    // Refresh-loop driven motions
    for name in ["behind", "reference", "out_of_reach"] {
        let admission = arm.go_to(name, &registry)?;
        let reach = arm.last_solution().map(|s| s.reach);
        println!("\n--- {} ({:?}, {:?}) ---", name, admission, reach);

        let start = Instant::now();
        let mut frame = 0;
        while arm.is_running() {
            let now_ms = start.elapsed().as_millis() as u64;
            if arm.tick(now_ms) {
                frame += 1;
                render(frame, &arm, &arm.pose());
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    // Blocking run
    println!("\n--- blocking run to (60, 115, -80) ---");
    arm.set_target(Target::new(60.0, 115.0, -80.0), AnimationMode::Fast)?;
    arm.run_to_completion(&mut SleepDelay)?;
    render(0, &arm, &arm.pose());

    println!("\n=== Example Complete ===");
    Ok(())
}
