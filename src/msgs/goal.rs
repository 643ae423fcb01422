use serde::{Deserialize, Serialize};

/// A planar coordinate pair. Axes are interpreted in the goal's frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinate {
    pub axis1: f64,
    pub axis2: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(axis1: f64, axis2: f64) -> Self {
        Self { axis1, axis2 }
    }
}

/// Vertices of one polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub coordinates: Vec<Coordinate>,
}

impl Coordinates {
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

impl FromIterator<(f64, f64)> for Coordinates {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(axis1, axis2)| Coordinate::new(axis1, axis2))
                .collect(),
        )
    }
}

/// Headland selection. Empty `mode` and zero `width` defer to configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlandModeMsg {
    pub mode: String,
    pub width: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwathModeMsg {
    pub objective: String,
    pub mode: String,
    pub best_angle: f32,
    pub step_angle: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteModeMsg {
    pub mode: String,
    pub spiral_n: u16,
    pub custom_order: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathModeMsg {
    pub mode: String,
    pub continuity_mode: String,
    pub turn_point_distance: f32,
}

/// A coverage planning request.
///
/// `polygons[0]` is the field boundary, every further polygon is a hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageGoal {
    pub generate_headland: bool,
    pub generate_route: bool,
    pub generate_path: bool,
    pub polygons: Vec<Coordinates>,
    pub frame_id: String,
    pub headland_mode: HeadlandModeMsg,
    pub swath_mode: SwathModeMsg,
    pub route_mode: RouteModeMsg,
    pub path_mode: PathModeMsg,
}

impl Default for CoverageGoal {
    fn default() -> Self {
        Self {
            generate_headland: true,
            generate_route: true,
            generate_path: true,
            polygons: Vec::new(),
            frame_id: String::new(),
            headland_mode: HeadlandModeMsg::default(),
            swath_mode: SwathModeMsg::default(),
            route_mode: RouteModeMsg::default(),
            path_mode: PathModeMsg::default(),
        }
    }
}
