//! Plain-data types produced and consumed by the coverage planner.

pub mod field;
pub mod path;
pub mod swath;

pub use field::{Cell, Field, LinearRing};
pub use path::{Path, PathSectionType, PathState};
pub use swath::{Swath, Swaths};
