//! Configuration-driven joint move example.
//!
//! Plans a synchronized two-axis move of a cylindrical arm from TOML,
//! checks both axes against their limits, and plays the trace back.

use std::time::Duration;

use motion_profile::config::units::UnitExt;
use motion_profile::kinematics::CylindricalPose;
use motion_profile::playback::{play_blocking, spawn_playback, TracePlayer};
use motion_profile::{parse_config, MotionSystem, Result};

/// Delay provider backed by `std::thread::sleep`.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

const CONFIG: &str = r#"
[axes.radial]
name = "Radial"
velocity_limit = 120.0
acceleration_limit = 240.0

[axes.radial.limits]
min = 20.0
max = 300.0
policy = "clamp"

[axes.angular]
name = "Angular"
velocity_limit = 90.0
acceleration_limit = 180.0

[axes.angular.limits]
min = -180.0
max = 180.0

[moves.preview]
start = -10.0
end = 10.0
duration_secs = 10.0
steps = 10
accel_fraction = 0.25

[joint_moves.reach]
axis_a = "radial"
axis_b = "angular"
start_a = 150.0
end_a = 60.0
start_b = 10.0
end_b = 135.0
interval_secs = 0.05
"#;

fn main() -> Result<()> {
    println!("=== Joint Move Example ===\n");

    let system = MotionSystem::from_config(parse_config(CONFIG)?);

    // Single-axis preview on a one-second grid
    let preview = system.plan_move("preview")?;
    println!("Preview ({} samples):", preview.len());
    for sample in preview.samples() {
        println!(
            "  t={:5.2}s  d={:8.4}  v={:7.4}  a={:7.4}",
            sample.time, sample.displacement, sample.velocity, sample.acceleration
        );
    }

    // Synchronized two-axis move
    let joint = system.plan_joint_move("reach")?;
    println!("\nJoint move 'reach':");
    println!("  Duration: {:.3} s over {} samples", joint.duration(), joint.len());
    println!(
        "  Radial:  {} -> {:.3}  (peak v {:.2}, peak a {:.2})",
        joint.a.start(),
        joint.a.final_position(),
        joint.a.peak_velocity(),
        joint.a.peak_acceleration()
    );
    println!(
        "  Angular: {} -> {:.3}  (peak v {:.2}, peak a {:.2})",
        joint.b.start(),
        joint.b.final_position(),
        joint.b.peak_velocity(),
        joint.b.peak_acceleration()
    );

    let (report_a, report_b) = system.check_joint_move("reach", &joint)?;
    for violation in report_a.violations().iter().chain(report_b.violations()) {
        println!("  Limit violation: {}", violation);
    }
    if report_a.passed() && report_b.passed() {
        println!("  All limits respected");
    }

    // Blocking playback, printing the tool tip position every tenth frame
    println!("\nPlayback:");
    let mut player = TracePlayer::new(&joint);
    let played = play_blocking(&mut player, &mut SleepDelay, 0.05_f64.seconds(), |frame| {
        let (x, y) = CylindricalPose {
            radius: frame.position_a,
            theta: frame.position_b.degrees(),
        }
        .to_cartesian();
        if (frame.time / 0.05).round() as usize % 10 == 0 {
            println!("  t={:5.2}s  x={:8.3}  y={:8.3}", frame.time, x, y);
        }
    });
    println!("  Played {} frames", played);

    // The same trace on a background thread
    let task = spawn_playback(
        "reach",
        TracePlayer::new(std::sync::Arc::new(joint)),
        Duration::from_millis(5),
        |_| {},
    )?;
    let stats = task.join()?;
    println!(
        "\nBackground playback: {} ticks, average slack {:.6} s",
        stats.ticks, stats.average_slack_secs
    );

    Ok(())
}
