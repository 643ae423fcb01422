//! Default value functions for serde deserialization.

use crate::modes::{HeadlandMode, PathContinuity, PathType, RouteMode, SwathAngleMode, SwathObjective};

pub fn robot_width() -> f64 {
    2.1
}

pub fn operation_width() -> f64 {
    2.5
}

pub fn min_turning_radius() -> f64 {
    0.4
}

pub fn linear_curv_change() -> f64 {
    2.0
}

pub fn headland_mode() -> HeadlandMode {
    HeadlandMode::Constant
}

pub fn headland_width() -> f64 {
    2.0
}

pub fn swath_objective() -> SwathObjective {
    SwathObjective::Length
}

pub fn swath_angle_mode() -> SwathAngleMode {
    SwathAngleMode::BruteForce
}

pub fn step_angle() -> f64 {
    1.7e-2
}

pub fn route_mode() -> RouteMode {
    RouteMode::Boustrophedon
}

pub fn spiral_n() -> u16 {
    4
}

pub fn path_type() -> PathType {
    PathType::Dubin
}

pub fn path_continuity() -> PathContinuity {
    PathContinuity::Continuous
}

pub fn turn_point_distance() -> f64 {
    0.1
}

pub fn frame_id() -> String {
    "map".to_string()
}
