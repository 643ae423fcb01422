//! Message schema exchanged with the navigation stack.
//!
//! These are plain data mirrors of the transport types; nothing here sends
//! or receives them.

pub mod geometry;
pub mod goal;
pub mod path;

pub use geometry::{Point, Point32, Pose, PoseStamped, Quaternion};
pub use goal::{
    Coordinate, Coordinates, CoverageGoal, HeadlandModeMsg, PathModeMsg, RouteModeMsg,
    SwathModeMsg,
};
pub use path::{CoveragePath, NavPath, SwathMsg};

use serde::{Deserialize, Serialize};

/// Wall-clock or simulated time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

/// Common metadata carried by stamped messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

impl Header {
    /// Creates a header for `frame_id` with a zero stamp.
    #[must_use]
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            stamp: Time::default(),
            frame_id: frame_id.into(),
        }
    }

    #[must_use]
    pub fn with_stamp(mut self, stamp: Time) -> Self {
        self.stamp = stamp;
        self
    }
}
