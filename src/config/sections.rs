//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::modes::{HeadlandMode, PathContinuity, PathType, RouteMode, SwathAngleMode, SwathObjective};

/// Vehicle geometry and kinematics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotSection {
    /// Physical width of the vehicle (meters)
    #[serde(default = "defaults::robot_width")]
    pub width: f64,

    /// Width of the working implement (meters)
    #[serde(default = "defaults::operation_width")]
    pub operation_width: f64,

    /// Minimum turning radius (meters)
    #[serde(default = "defaults::min_turning_radius")]
    pub min_turning_radius: f64,

    /// Maximum rate of curvature change (1/m^2)
    #[serde(default = "defaults::linear_curv_change")]
    pub linear_curv_change: f64,
}

impl Default for RobotSection {
    fn default() -> Self {
        Self {
            width: defaults::robot_width(),
            operation_width: defaults::operation_width(),
            min_turning_radius: defaults::min_turning_radius(),
            linear_curv_change: defaults::linear_curv_change(),
        }
    }
}

/// Headland settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadlandSection {
    #[serde(default = "defaults::headland_mode")]
    pub mode: HeadlandMode,

    /// Headland width (meters)
    #[serde(default = "defaults::headland_width")]
    pub width: f64,
}

impl Default for HeadlandSection {
    fn default() -> Self {
        Self {
            mode: defaults::headland_mode(),
            width: defaults::headland_width(),
        }
    }
}

/// Swath generation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwathSection {
    #[serde(default = "defaults::swath_objective")]
    pub objective: SwathObjective,

    #[serde(default = "defaults::swath_angle_mode")]
    pub mode: SwathAngleMode,

    /// Angle used by `SET_ANGLE` (radians)
    #[serde(default)]
    pub best_angle: f64,

    /// Search step used by `BRUTE_FORCE` (radians)
    #[serde(default = "defaults::step_angle")]
    pub step_angle: f64,
}

impl Default for SwathSection {
    fn default() -> Self {
        Self {
            objective: defaults::swath_objective(),
            mode: defaults::swath_angle_mode(),
            best_angle: 0.0,
            step_angle: defaults::step_angle(),
        }
    }
}

/// Route ordering settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSection {
    #[serde(default = "defaults::route_mode")]
    pub mode: RouteMode,

    /// Swaths per spiral group
    #[serde(default = "defaults::spiral_n")]
    pub spiral_n: u16,
}

impl Default for RouteSection {
    fn default() -> Self {
        Self {
            mode: defaults::route_mode(),
            spiral_n: defaults::spiral_n(),
        }
    }
}

/// Turn path settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSection {
    #[serde(default = "defaults::path_type")]
    pub mode: PathType,

    #[serde(default = "defaults::path_continuity")]
    pub continuity: PathContinuity,

    /// Spacing between output turn points (meters)
    #[serde(default = "defaults::turn_point_distance")]
    pub turn_point_distance: f64,
}

impl Default for PathSection {
    fn default() -> Self {
        Self {
            mode: defaults::path_type(),
            continuity: defaults::path_continuity(),
            turn_point_distance: defaults::turn_point_distance(),
        }
    }
}
