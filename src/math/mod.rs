pub mod angle;

pub use angle::{normalize_angle, yaw_from_quaternion, yaw_to_quaternion};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Unit quaternion used for planar headings.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
