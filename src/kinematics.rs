//! Planar cylindrical arm kinematics.
//!
//! An arm with a radial (extension) joint and an angular (rotation) joint
//! reaches a point in the plane. Joint moves between two points are planned
//! in joint space, one axis per joint.

use libm::{atan2, cos, fmod, sin, sqrt};

use crate::config::units::Degrees;
use crate::error::ProfileError;
use crate::motion::{AxisMove, JointRequest, JointTrace};

/// Joint coordinates of a cylindrical arm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CylindricalPose {
    /// Radial extension.
    pub radius: f64,
    /// Rotation about the base, counter-clockwise from +x.
    pub theta: Degrees,
}

impl CylindricalPose {
    /// Inverse kinematics: joint coordinates reaching `(x, y)`.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            radius: sqrt(x * x + y * y),
            theta: Degrees::from_radians(atan2(y, x)),
        }
    }

    /// Forward kinematics: the `(x, y)` point these joint coordinates reach.
    pub fn to_cartesian(self) -> (f64, f64) {
        let angle = self.theta.to_radians();
        (self.radius * cos(angle), self.radius * sin(angle))
    }
}

/// Limits of the radial and angular joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmLimits {
    /// Radial velocity limit.
    pub radial_velocity: f64,
    /// Radial acceleration limit.
    pub radial_acceleration: f64,
    /// Angular velocity limit in degrees per second.
    pub angular_velocity: f64,
    /// Angular acceleration limit in degrees per second squared.
    pub angular_acceleration: f64,
}

/// The angle equivalent to `to` that is reached from `from` by the shorter
/// rotation. The signed turn lies in `(-180, 180]`.
pub fn shortest_turn(from: Degrees, to: Degrees) -> Degrees {
    let mut turn = fmod(to.value() - from.value(), 360.0);
    if turn > 180.0 {
        turn -= 360.0;
    } else if turn <= -180.0 {
        turn += 360.0;
    }
    Degrees(from.value() + turn)
}

/// Describe the joint move of the arm from `from` to `to`, both `(x, y)` points.
///
/// The angular axis turns the short way round, so its end angle may fall
/// outside `(-180, 180]`.
pub fn reach_request(
    from: (f64, f64),
    to: (f64, f64),
    limits: &ArmLimits,
    interval: f64,
) -> JointRequest {
    let start = CylindricalPose::from_cartesian(from.0, from.1);
    let end = CylindricalPose::from_cartesian(to.0, to.1);

    JointRequest {
        a: AxisMove::between(
            start.radius,
            end.radius,
            limits.radial_velocity,
            limits.radial_acceleration,
        ),
        b: AxisMove::between(
            start.theta.value(),
            shortest_turn(start.theta, end.theta).value(),
            limits.angular_velocity,
            limits.angular_acceleration,
        ),
        interval,
    }
}

/// Plan a joint move of the arm from `from` to `to`, both `(x, y)` points.
///
/// Axis `a` of the result is the radius, axis `b` the angle in degrees.
pub fn plan_reach(
    from: (f64, f64),
    to: (f64, f64),
    limits: &ArmLimits,
    interval: f64,
) -> Result<JointTrace, ProfileError> {
    reach_request(from, to, limits, interval).interpolate()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_inverse_kinematics() {
        let pose = CylindricalPose::from_cartesian(0.0, 100.0);
        assert!((pose.radius - 100.0).abs() < EPS);
        assert!((pose.theta.value() - 90.0).abs() < EPS);

        let pose = CylindricalPose::from_cartesian(-3.0, -4.0);
        assert!((pose.radius - 5.0).abs() < EPS);
        assert!(pose.theta.value() < -90.0);
    }

    #[test]
    fn test_forward_inverts_inverse() {
        for (x, y) in [(120.0, 35.0), (-80.0, 10.0), (5.0, -60.0)] {
            let (rx, ry) = CylindricalPose::from_cartesian(x, y).to_cartesian();
            assert!((rx - x).abs() < 1e-9);
            assert!((ry - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_plan_reach_ends_at_target() {
        let limits = ArmLimits {
            radial_velocity: 100.0,
            radial_acceleration: 200.0,
            angular_velocity: 90.0,
            angular_acceleration: 180.0,
        };

        let trace = plan_reach((100.0, 0.0), (0.0, 200.0), &limits, 0.02).unwrap();

        assert!((trace.a.final_position() - 200.0).abs() < 1e-6);
        assert!((trace.b.final_position() - 90.0).abs() < 1e-6);

        let last = trace.len() - 1;
        let (x, y) = CylindricalPose {
            radius: trace.a.position(last).unwrap(),
            theta: Degrees(trace.b.position(last).unwrap()),
        }
        .to_cartesian();
        assert!(x.abs() < 1e-4);
        assert!((y - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_shortest_turn() {
        assert_eq!(shortest_turn(Degrees(10.0), Degrees(100.0)), Degrees(100.0));
        assert_eq!(shortest_turn(Degrees(179.0), Degrees(-179.0)), Degrees(181.0));
        assert_eq!(shortest_turn(Degrees(-170.0), Degrees(170.0)), Degrees(-190.0));
        assert_eq!(shortest_turn(Degrees(0.0), Degrees(180.0)), Degrees(180.0));
        assert_eq!(shortest_turn(Degrees(0.0), Degrees(-180.0)), Degrees(180.0));
    }

    #[test]
    fn test_reach_across_seam_turns_short_way() {
        let limits = ArmLimits {
            radial_velocity: 100.0,
            radial_acceleration: 200.0,
            angular_velocity: 90.0,
            angular_acceleration: 180.0,
        };

        // Just above and just below the -x axis
        let request = reach_request((-100.0, 1.0), (-100.0, -1.0), &limits, 0.02);
        assert!(request.b.displacement.abs() < 2.0);

        let trace = plan_reach((-100.0, 1.0), (-100.0, -1.0), &limits, 0.02).unwrap();
        let last = trace.len() - 1;
        let (x, y) = CylindricalPose {
            radius: trace.a.position(last).unwrap(),
            theta: Degrees(trace.b.position(last).unwrap()),
        }
        .to_cartesian();
        assert!((x + 100.0).abs() < 1e-4);
        assert!((y + 1.0).abs() < 1e-4);
    }
}
