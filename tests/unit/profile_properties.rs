//! Property tests for profile evaluation and joint interpolation.

use std::f64::consts::PI;

use motion_profile::motion::grid::uniform_grid;
use motion_profile::motion::{AxisMove, CosineProfile, JointRequest};
use motion_profile::{joint_interpolation, profile};
use proptest::prelude::*;

fn profile_inputs() -> impl Strategy<Value = (f64, f64, f64, u32)> {
    (-100.0..100.0f64, 0.1..50.0f64, 0.01..=0.5f64, 1u32..200)
}

fn axis_inputs() -> impl Strategy<Value = (f64, f64, f64)> {
    (-200.0..200.0f64, 1.0..100.0f64, 1.0..100.0f64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The trace starts at rest and covers exactly the requested displacement.
    #[test]
    fn prop_endpoints((d, tm, fraction, steps) in profile_inputs(), start in -50.0..50.0f64) {
        let times = uniform_grid(tm, steps).unwrap();
        let trace = profile(d, start, &times, tm * fraction).unwrap();
        let last = trace.len() - 1;

        prop_assert_eq!(trace.len(), times.len());
        prop_assert_eq!(trace.displacement()[0], 0.0);
        prop_assert_eq!(trace.velocity()[0], 0.0);
        prop_assert_eq!(trace.position(0), Some(start));
        prop_assert!((trace.displacement()[last] - d).abs() <= 1e-9 * (1.0 + d.abs()));
        prop_assert!(trace.velocity()[last].abs() <= 1e-9 * (1.0 + trace.peak_velocity()));
    }

    /// Identical inputs give identical traces.
    #[test]
    fn prop_deterministic((d, tm, fraction, steps) in profile_inputs()) {
        let times = uniform_grid(tm, steps).unwrap();
        let first = profile(d, 1.0, &times, tm * fraction).unwrap();
        let second = profile(d, 1.0, &times, tm * fraction).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Displacement, velocity, and acceleration have no jumps at phase boundaries.
    #[test]
    fn prop_continuous_at_phase_boundaries((d, tm, fraction, _) in profile_inputs()) {
        let plan = CosineProfile::new(d, tm, tm * fraction).unwrap();
        let h = tm * 1e-9;
        let vm = plan.peak_velocity().abs();
        let am = plan.peak_acceleration().abs();

        for boundary in [plan.accel_time(), plan.accel_time() + plan.cruise_time()] {
            let before = plan.sample(boundary - h);
            let after = plan.sample(boundary + h);

            prop_assert!((before.displacement - after.displacement).abs() <= 1e-6 * (1.0 + d.abs() + vm));
            prop_assert!((before.velocity - after.velocity).abs() <= 1e-6 * (1.0 + vm + am));
            prop_assert!((before.acceleration - after.acceleration).abs() <= 1e-6 * (1.0 + am));
        }
    }

    /// The midpoint moves at the closed-form cruise velocity.
    #[test]
    fn prop_peak_velocity((d, tm, fraction, _) in profile_inputs()) {
        let ta = tm * fraction;
        let plan = CosineProfile::new(d, tm, ta).unwrap();
        let expected = d * PI / (PI * tm + (4.0 - PI) * ta);

        prop_assert!((plan.peak_velocity() - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
        prop_assert!((plan.sample(tm / 2.0).velocity - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
    }

    /// A positive move never reverses.
    #[test]
    fn prop_monotonic((d, tm, fraction, steps) in profile_inputs()) {
        let d = d.abs();
        let times = uniform_grid(tm, steps).unwrap();
        let trace = profile(d, 0.0, &times, tm * fraction).unwrap();

        prop_assert!(trace.velocity().iter().all(|v| *v >= -1e-12));
        prop_assert!(trace.displacement().windows(2).all(|w| w[1] >= w[0] - 1e-9));
    }

    /// Both axes share one grid, finish together, and respect their limits.
    #[test]
    fn prop_joint_synchronized(
        (d_a, v_a, a_a) in axis_inputs(),
        (d_b, v_b, a_b) in axis_inputs(),
        interval in 0.01..0.2f64,
    ) {
        let joint = joint_interpolation(d_a, 0.0, d_b, 0.0, interval, a_a, v_a, a_b, v_b).unwrap();
        let slack = 1.0 + 1e-9;

        prop_assert_eq!(joint.a.times(), &joint.times[..]);
        prop_assert_eq!(joint.b.times(), &joint.times[..]);
        prop_assert!((joint.a.final_displacement() - d_a).abs() <= 1e-6 * (1.0 + d_a.abs()));
        prop_assert!((joint.b.final_displacement() - d_b).abs() <= 1e-6 * (1.0 + d_b.abs()));
        prop_assert!(joint.times.windows(2).all(|w| w[1] - w[0] <= interval * (1.0 + 1e-6)));

        prop_assert!(joint.a.peak_velocity() <= v_a * slack);
        prop_assert!(joint.a.peak_acceleration() <= a_a * slack);
        prop_assert!(joint.b.peak_velocity() <= v_b * slack);
        prop_assert!(joint.b.peak_acceleration() <= a_b * slack);
    }

    /// The axis needing the most time runs against one of its limits.
    #[test]
    fn prop_joint_minimum_time(
        (d_a, v_a, a_a) in axis_inputs(),
        (d_b, v_b, a_b) in axis_inputs(),
    ) {
        prop_assume!(d_a.abs() > 1e-3 && d_b.abs() > 1e-3);

        let request = JointRequest {
            a: AxisMove::between(0.0, d_a, v_a, a_a),
            b: AxisMove::between(0.0, d_b, v_b, a_b),
            interval: 0.05,
        };
        let timing = request.timing().unwrap();

        let (axis, accel_time) = if request.a.min_duration().unwrap() >= request.b.min_duration().unwrap() {
            (request.a, timing.accel_time_a)
        } else {
            (request.b, timing.accel_time_b)
        };
        let plan = CosineProfile::new(axis.displacement, timing.total_time, accel_time).unwrap();

        let velocity_usage = plan.peak_velocity().abs() / axis.velocity_limit;
        let acceleration_usage = plan.peak_acceleration().abs() / axis.acceleration_limit;
        prop_assert!(velocity_usage.max(acceleration_usage) >= 1.0 - 1e-6);
        prop_assert!(velocity_usage <= 1.0 + 1e-9);
        prop_assert!(acceleration_usage <= 1.0 + 1e-9);
    }
}
