use serde::{Deserialize, Serialize};

use super::{Header, Point32, PoseStamped};

/// A sequence of stamped poses for a controller to follow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavPath {
    pub header: Header,
    pub poses: Vec<PoseStamped>,
}

/// Endpoints of one coverage pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwathMsg {
    pub start: Point32,
    pub end: Point32,
}

/// Result of a coverage plan: swaths, optionally interleaved with turns.
///
/// When `contains_turns` is set, swaths and turns alternate in travel order
/// and `turns[i]` connects the swaths around it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoveragePath {
    pub header: Header,
    pub swaths: Vec<SwathMsg>,
    pub swaths_ordered: bool,
    pub turns: Vec<NavPath>,
    pub contains_turns: bool,
}
