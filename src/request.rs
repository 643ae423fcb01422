//! Validated coverage planning request.

use tracing::{debug, warn};

use crate::config::{CoverageConfig, MIN_SPIRAL_N};
use crate::convert::field_from_goal;
use crate::error::{GoalError, Result};
use crate::geometry::Field;
use crate::modes::{
    parse_or, HeadlandMode, PathContinuity, PathType, RouteMode, SwathAngleMode, SwathObjective,
};
use crate::msgs::{CoverageGoal, Header, Time};

/// Resolved headland settings.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlandParams {
    pub mode: HeadlandMode,
    pub width: f64,
}

/// Resolved swath generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SwathParams {
    pub objective: SwathObjective,
    pub mode: SwathAngleMode,
    pub best_angle: f64,
    pub step_angle: f64,
}

/// Resolved route ordering settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteParams {
    pub mode: RouteMode,
    pub spiral_n: u16,
    /// Swath visit order; only populated for [`RouteMode::Custom`].
    pub custom_order: Vec<u16>,
}

/// Resolved turn path settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PathParams {
    pub mode: PathType,
    pub continuity: PathContinuity,
    pub turn_point_distance: f64,
}

/// Everything a planner needs to serve one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRequest {
    pub field: Field,
    pub frame_id: String,
    pub generate_headland: bool,
    pub generate_route: bool,
    pub generate_path: bool,
    pub headland: HeadlandParams,
    pub swath: SwathParams,
    pub route: RouteParams,
    pub path: PathParams,
}

impl CoverageRequest {
    /// Validates `goal` and fills unset fields from `config`.
    ///
    /// Blank mode strings and zero numeric fields in the goal select the
    /// configured value.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument [`CoverageError`](crate::CoverageError) if the
    /// goal's polygons are malformed, a mode string is unknown, a numeric
    /// override is out of range, or a custom route has no order.
    pub fn from_goal(goal: &CoverageGoal, config: &CoverageConfig) -> Result<Self> {
        let field = field_from_goal(goal)?;

        let headland = HeadlandParams {
            mode: parse_or(&goal.headland_mode.mode, config.headland.mode)?,
            width: length_or(
                "headland_mode.width",
                goal.headland_mode.width,
                config.headland.width,
            )?,
        };

        let swath = SwathParams {
            objective: parse_or(&goal.swath_mode.objective, config.swath.objective)?,
            mode: parse_or(&goal.swath_mode.mode, config.swath.mode)?,
            best_angle: angle_or(
                "swath_mode.best_angle",
                goal.swath_mode.best_angle,
                config.swath.best_angle,
            )?,
            step_angle: length_or(
                "swath_mode.step_angle",
                goal.swath_mode.step_angle,
                config.swath.step_angle,
            )?,
        };

        let route_mode = parse_or(&goal.route_mode.mode, config.route.mode)?;
        let custom_order = if route_mode == RouteMode::Custom {
            if goal.route_mode.custom_order.is_empty() {
                warn!("rejecting custom route without an order");
                return Err(GoalError::MissingCustomOrder.into());
            }
            goal.route_mode.custom_order.clone()
        } else {
            Vec::new()
        };
        let route = RouteParams {
            mode: route_mode,
            spiral_n: spiral_n_or(goal.route_mode.spiral_n, config.route.spiral_n)?,
            custom_order,
        };

        let path = PathParams {
            mode: parse_or(&goal.path_mode.mode, config.path.mode)?,
            continuity: parse_or(&goal.path_mode.continuity_mode, config.path.continuity)?,
            turn_point_distance: length_or(
                "path_mode.turn_point_distance",
                goal.path_mode.turn_point_distance,
                config.path.turn_point_distance,
            )?,
        };

        let frame_id = if goal.frame_id.trim().is_empty() {
            config.default_frame_id.clone()
        } else {
            goal.frame_id.clone()
        };

        debug!(
            %frame_id,
            rings = field.cell().ring_count(),
            route = %route.mode,
            path = %path.mode,
            "accepted coverage goal"
        );

        Ok(Self {
            field,
            frame_id,
            generate_headland: goal.generate_headland,
            generate_route: goal.generate_route,
            generate_path: goal.generate_path,
            headland,
            swath,
            route,
            path,
        })
    }

    /// Header for messages answering this request.
    #[must_use]
    pub fn header(&self, stamp: Time) -> Header {
        Header::new(self.frame_id.clone()).with_stamp(stamp)
    }
}

type Override<T> = std::result::Result<T, GoalError>;

fn out_of_range(field: &'static str, value: f64) -> GoalError {
    warn!(field, value, "rejecting out-of-range goal override");
    GoalError::OutOfRange { field, value }
}

/// Zero selects `fallback`; anything else must be finite and positive.
fn length_or(field: &'static str, value: f32, fallback: f64) -> Override<f64> {
    let value = f64::from(value);
    if value == 0.0 {
        Ok(fallback)
    } else if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(out_of_range(field, value))
    }
}

/// Zero selects `fallback`; any other finite angle is kept, sign included.
fn angle_or(field: &'static str, value: f32, fallback: f64) -> Override<f64> {
    let value = f64::from(value);
    if value == 0.0 {
        Ok(fallback)
    } else if value.is_finite() {
        Ok(value)
    } else {
        Err(out_of_range(field, value))
    }
}

fn spiral_n_or(value: u16, fallback: u16) -> Override<u16> {
    match value {
        0 => Ok(fallback),
        n if n < MIN_SPIRAL_N => Err(out_of_range("route_mode.spiral_n", f64::from(n))),
        n => Ok(n),
    }
}
