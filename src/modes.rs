//! Planner mode selectors.
//!
//! Goals carry modes as free-form strings. Parsing is case-insensitive and
//! `Display` always prints the canonical upper-case name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::to_uppercase;
use crate::error::GoalError;

macro_rules! mode_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical upper-case name.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = GoalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match to_uppercase(s.trim()).as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(GoalError::UnknownMode {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = GoalError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(mode: $name) -> Self {
                mode.as_str().to_string()
            }
        }
    };
}

mode_enum! {
    /// How the headland ring is generated.
    HeadlandMode, "headland" {
        /// Fixed-width offset from the field boundary.
        Constant => "CONSTANT",
    }
}

mode_enum! {
    /// Cost the swath generator optimises.
    SwathObjective, "swath objective" {
        /// Total swath length.
        Length => "LENGTH",
        /// Number of swaths.
        Number => "NUMBER",
        /// Covered area.
        Coverage => "COVERAGE",
    }
}

mode_enum! {
    /// How the swath angle is chosen.
    SwathAngleMode, "swath" {
        /// Use the requested angle as is.
        SetAngle => "SET_ANGLE",
        /// Search angles in fixed steps for the best objective.
        BruteForce => "BRUTE_FORCE",
    }
}

mode_enum! {
    /// Order in which swaths are visited.
    RouteMode, "route" {
        Boustrophedon => "BOUSTROPHEDON",
        Snake => "SNAKE",
        Spiral => "SPIRAL",
        /// Caller-supplied order.
        Custom => "CUSTOM",
    }
}

mode_enum! {
    /// Curve family used for turns.
    PathType, "path" {
        Dubin => "DUBIN",
        ReedsShepp => "REEDS_SHEPP",
    }
}

mode_enum! {
    /// Whether turn curvature is continuous.
    PathContinuity, "path continuity" {
        Continuous => "CONTINUOUS",
        Discontinuous => "DISCONTINUOUS",
    }
}

/// Parses `value`, or returns `default` when `value` is blank.
///
/// # Errors
///
/// Returns [`GoalError::UnknownMode`] if `value` is non-blank and not a valid mode.
pub fn parse_or<T>(value: &str, default: T) -> Result<T, GoalError>
where
    T: FromStr<Err = GoalError>,
{
    if value.trim().is_empty() {
        Ok(default)
    } else {
        value.parse()
    }
}
