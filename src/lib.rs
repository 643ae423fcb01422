pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod math;
pub mod modes;
pub mod msgs;
pub mod request;

pub use config::CoverageConfig;
pub use error::{ConfigError, CoverageError, GoalError, PathError, Result};
pub use request::CoverageRequest;
