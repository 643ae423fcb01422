//! Planner defaults, loaded from a single YAML file.
//!
//! Goal fields left blank or zero fall back to these values.

mod defaults;
mod sections;

pub use sections::{HeadlandSection, PathSection, RobotSection, RouteSection, SwathSection};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Smallest number of swaths a spiral route can group.
pub const MIN_SPIRAL_N: u16 = 2;

/// Full coverage planner configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageConfig {
    #[serde(default)]
    pub robot: RobotSection,

    #[serde(default)]
    pub headland: HeadlandSection,

    #[serde(default)]
    pub swath: SwathSection,

    #[serde(default)]
    pub route: RouteSection,

    #[serde(default)]
    pub path: PathSection,

    /// Frame used when a goal does not name one
    #[serde(default = "defaults::frame_id")]
    pub default_frame_id: String,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            robot: RobotSection::default(),
            headland: HeadlandSection::default(),
            swath: SwathSection::default(),
            route: RouteSection::default(),
            path: PathSection::default(),
            default_frame_id: defaults::frame_id(),
        }
    }
}

impl CoverageConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        debug!(path = %path.display(), "loaded coverage config");
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("robot.width", self.robot.width),
            ("robot.operation_width", self.robot.operation_width),
            ("robot.min_turning_radius", self.robot.min_turning_radius),
            ("robot.linear_curv_change", self.robot.linear_curv_change),
            ("swath.step_angle", self.swath.step_angle),
            ("path.turn_point_distance", self.path.turn_point_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.headland.width.is_finite() && self.headland.width >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "headland.width must be non-negative, got {}",
                self.headland.width
            )));
        }
        if self.route.spiral_n < MIN_SPIRAL_N {
            return Err(ConfigError::Invalid(format!(
                "route.spiral_n must be at least {MIN_SPIRAL_N}, got {}",
                self.route.spiral_n
            )));
        }
        if self.default_frame_id.trim().is_empty() {
            return Err(ConfigError::Invalid("default_frame_id must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::modes::{PathType, RouteMode, SwathAngleMode};

    #[test]
    fn defaults_are_valid() {
        let config = CoverageConfig::default();
        config.validate().unwrap();
        assert_eq!(config.route.mode, RouteMode::Boustrophedon);
        assert_eq!(config.default_frame_id, "map");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = r"
robot:
  operation_width: 3.0
route:
  mode: snake
path:
  mode: reeds_shepp
";
        let config = CoverageConfig::from_yaml(yaml).unwrap();
        assert_abs_diff_eq!(config.robot.operation_width, 3.0);
        assert_abs_diff_eq!(config.robot.width, 2.1);
        assert_eq!(config.route.mode, RouteMode::Snake);
        assert_eq!(config.route.spiral_n, 4);
        assert_eq!(config.path.mode, PathType::ReedsShepp);
        assert_eq!(config.swath.mode, SwathAngleMode::BruteForce);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CoverageConfig::from_yaml("{}").unwrap(), CoverageConfig::default());
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = CoverageConfig::default();
        config.route.mode = RouteMode::Spiral;
        config.swath.best_angle = 0.5;
        let yaml = config.to_yaml().unwrap();
        assert_eq!(CoverageConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = CoverageConfig::from_yaml("route:\n  mode: zigzag\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = CoverageConfig::from_yaml("robot:\n  width: -1.0\n").unwrap_err();
        assert!(err.to_string().contains("robot.width"));

        let err = CoverageConfig::from_yaml("route:\n  spiral_n: 1\n").unwrap_err();
        assert!(err.to_string().contains("spiral_n"));

        let err = CoverageConfig::from_yaml("default_frame_id: ''\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "headland:\n  width: 4.5").unwrap();
        let config = CoverageConfig::load(file.path()).unwrap();
        assert_abs_diff_eq!(config.headland.width, 4.5);
    }

    #[test]
    fn load_missing_file() {
        let err = CoverageConfig::load(Path::new("/nonexistent/coverage.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
