use thiserror::Error;

/// Top-level error type for coverage conversions.
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error(transparent)]
    Goal(#[from] GoalError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoverageError {
    /// Returns `true` if the caller supplied a malformed request.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Goal(_))
    }

    /// Returns `true` if a planner result could not be converted.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

/// Errors raised while validating a coverage goal.
#[derive(Debug, Error, PartialEq)]
pub enum GoalError {
    #[error("goal does not contain any polygons")]
    MissingPolygons,

    #[error("polygon {index} has {count} coordinates, at least 3 are required")]
    TooFewCoordinates { index: usize, count: usize },

    #[error("polygon {index} is not closed")]
    NotClosed { index: usize },

    #[error("unknown {kind} mode: {value:?}")]
    UnknownMode { kind: &'static str, value: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("custom route mode requires a non-empty custom order")]
    MissingCustomOrder,
}

/// Errors raised while converting a planned path.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("invalid path state at index {index}: section type is neither swath nor turn")]
    InvalidState { index: usize },
}

/// Errors raised while loading planner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`CoverageError`].
pub type Result<T> = std::result::Result<T, CoverageError>;
