use crate::geometry::PathState;
use crate::math::{yaw_to_quaternion, Point3};
use crate::msgs::{Header, Point, Point32, Pose, PoseStamped, Quaternion};

/// Converts a planner point to its single-precision message form.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn point_to_msg(point: &Point3) -> Point32 {
    Point32 {
        x: point.x as f32,
        y: point.y as f32,
        z: point.z as f32,
    }
}

/// Converts a planner point to a double-precision message point.
#[must_use]
pub fn point_to_point_msg(point: &Point3) -> Point {
    Point {
        x: point.x,
        y: point.y,
        z: point.z,
    }
}

/// Widens a single-precision message point.
#[must_use]
pub fn point32_to_point(point: &Point32) -> Point {
    Point {
        x: f64::from(point.x),
        y: f64::from(point.y),
        z: f64::from(point.z),
    }
}

/// Converts a path state to a pose with heading `state.angle` about +Z.
///
/// The header is left empty; callers stamp it.
#[must_use]
pub fn path_state_to_pose(state: &PathState) -> PoseStamped {
    let q = yaw_to_quaternion(state.angle);
    PoseStamped {
        header: Header::default(),
        pose: Pose {
            position: point_to_point_msg(&state.point),
            orientation: Quaternion {
                x: q.i,
                y: q.j,
                z: q.k,
                w: q.w,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{normalize_angle, yaw_from_quaternion};

    fn yaw_of(pose: &PoseStamped) -> f64 {
        let q = pose.pose.orientation;
        yaw_from_quaternion(q.x, q.y, q.z, q.w)
    }

    #[test]
    fn point_copies_fields() {
        let out = point_to_msg(&Point3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(out.x, 1.0);
        assert_abs_diff_eq!(out.y, 2.0);
        assert_abs_diff_eq!(out.z, 3.0);
    }

    #[test]
    fn point_narrows_to_nearest_f32() {
        let out = point_to_msg(&Point3::new(0.1, -2.5, 1e-3));
        assert_eq!(out.x, 0.1_f32);
        assert_eq!(out.y, -2.5_f32);
        assert_eq!(out.z, 1e-3_f32);
        assert_abs_diff_eq!(f64::from(out.x), 0.1, epsilon = 1e-7);
    }

    #[test]
    fn point32_widens() {
        let out = point32_to_point(&Point32 {
            x: 1.0,
            y: 1.1,
            z: 1.2,
        });
        assert_abs_diff_eq!(out.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out.y, 1.1, epsilon = 1e-6);
        assert_abs_diff_eq!(out.z, 1.2, epsilon = 1e-6);
    }

    #[test]
    fn point_msg_is_lossless() {
        let p = Point3::new(0.1, -7.25, 1e9);
        let out = point_to_point_msg(&p);
        assert_abs_diff_eq!(out.x, p.x);
        assert_abs_diff_eq!(out.y, p.y);
        assert_abs_diff_eq!(out.z, p.z);
    }

    #[test]
    fn pose_keeps_position_and_heading() {
        let state = PathState {
            point: Point3::new(1.0, 2.0, 3.0),
            angle: PI,
            kind: None,
        };
        let pose = path_state_to_pose(&state);
        assert_abs_diff_eq!(pose.pose.position.x, 1.0);
        assert_abs_diff_eq!(pose.pose.position.y, 2.0);
        assert_abs_diff_eq!(pose.pose.position.z, 3.0);
        assert!(normalize_angle(yaw_of(&pose) - PI).abs() < 0.01);
    }

    #[test]
    fn pose_heading_sweep() {
        for i in -8..=8 {
            let angle = f64::from(i) * FRAC_PI_4 * 0.9;
            let pose = path_state_to_pose(&PathState {
                angle,
                ..PathState::default()
            });
            assert!(normalize_angle(yaw_of(&pose) - angle).abs() < 0.01, "angle {angle}");
            let q = pose.pose.orientation;
            assert_abs_diff_eq!(q.x, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-12);
        }
    }
}
