//! Conversions between planner types and navigation messages, and goal validation.

mod field;
mod path;
mod point;
mod text;

pub use field::{field_from_goal, MIN_POLYGON_COORDINATES};
pub use path::{
    split_sections, swath_to_msg, swaths_to_coverage_path_msg, to_coverage_path_msg,
    to_nav_path_msg, Section,
};
pub use point::{path_state_to_pose, point32_to_point, point_to_msg, point_to_point_msg};
pub use text::{to_upper, to_uppercase};
