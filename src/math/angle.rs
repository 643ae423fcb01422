use std::f64::consts::{PI, TAU};

use super::UnitQuaternion;

/// Builds a rotation about +Z by `yaw` radians (roll and pitch are zero).
#[must_use]
pub fn yaw_to_quaternion(yaw: f64) -> UnitQuaternion {
    UnitQuaternion::from_euler_angles(0.0, 0.0, yaw)
}

/// Extracts the heading about +Z from a quaternion given as `(x, y, z, w)`.
///
/// The result lies in `(-pi, pi]`.
#[must_use]
pub fn yaw_from_quaternion(x: f64, y: f64, z: f64, w: f64) -> f64 {
    let (_, _, yaw) =
        UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(w, x, y, z)).euler_angles();
    yaw
}

/// Wraps an angle into `(-pi, pi]`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn roundtrip(yaw: f64) -> f64 {
        let q = yaw_to_quaternion(yaw);
        yaw_from_quaternion(q.i, q.j, q.k, q.w)
    }

    #[test]
    fn yaw_roundtrip_quarter_turn() {
        assert_abs_diff_eq!(roundtrip(FRAC_PI_2), FRAC_PI_2, epsilon = 1e-9);
        assert_abs_diff_eq!(roundtrip(-FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn yaw_roundtrip_half_turn() {
        let diff = normalize_angle(roundtrip(PI) - PI);
        assert!(diff.abs() < 0.01);
    }

    #[test]
    fn yaw_quaternion_is_planar() {
        let q = yaw_to_quaternion(1.2);
        assert_abs_diff_eq!(q.i, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.j, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn identity_has_zero_yaw() {
        assert_abs_diff_eq!(yaw_from_quaternion(0.0, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn yaw_ignores_quaternion_scale() {
        let q = yaw_to_quaternion(0.75);
        let yaw = yaw_from_quaternion(2.0 * q.i, 2.0 * q.j, 2.0 * q.k, 2.0 * q.w);
        assert_abs_diff_eq!(yaw, 0.75, epsilon = 1e-9);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_abs_diff_eq!(normalize_angle(3.0 * PI), PI, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(-PI), PI, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(TAU + 0.5), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(-0.25), -0.25, epsilon = 1e-12);
    }
}
