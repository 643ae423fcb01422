use crate::math::Point3;

/// Kind of path section a state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSectionType {
    /// Working pass over the field.
    Swath,
    /// Manoeuvre connecting two swaths.
    Turn,
}

/// One pose along a planned path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathState {
    /// Position of the robot.
    pub point: Point3,
    /// Heading about +Z in radians.
    pub angle: f64,
    /// Section this state belongs to. `None` means the planner never tagged it.
    pub kind: Option<PathSectionType>,
}

impl PathState {
    /// Creates a tagged path state.
    #[must_use]
    pub fn new(point: Point3, angle: f64, kind: PathSectionType) -> Self {
        Self {
            point,
            angle,
            kind: Some(kind),
        }
    }

    /// Creates a state belonging to a swath.
    #[must_use]
    pub fn swath(point: Point3, angle: f64) -> Self {
        Self::new(point, angle, PathSectionType::Swath)
    }

    /// Creates a state belonging to a turn.
    #[must_use]
    pub fn turn(point: Point3, angle: f64) -> Self {
        Self::new(point, angle, PathSectionType::Turn)
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            point: Point3::origin(),
            angle: 0.0,
            kind: None,
        }
    }
}

/// An ordered sequence of path states produced by the planner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub states: Vec<PathState>,
}

impl Path {
    /// Creates a path from its states.
    #[must_use]
    pub fn new(states: Vec<PathState>) -> Self {
        Self { states }
    }

    /// Creates a path of `n` default (untagged) states.
    #[must_use]
    pub fn with_len(n: usize) -> Self {
        Self {
            states: vec![PathState::default(); n],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<PathState> for Path {
    fn from_iter<I: IntoIterator<Item = PathState>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_untagged_origin() {
        let state = PathState::default();
        assert_eq!(state.point, Point3::origin());
        assert!(state.kind.is_none());
    }

    #[test]
    fn with_len_fills_default_states() {
        let path = Path::with_len(4);
        assert_eq!(path.len(), 4);
        assert!(path.states.iter().all(|s| s.kind.is_none()));
        assert!(Path::default().is_empty());
    }

    #[test]
    fn constructors_set_kind() {
        let p = Point3::new(1.0, 2.0, 0.0);
        assert_eq!(PathState::swath(p, 0.0).kind, Some(PathSectionType::Swath));
        assert_eq!(PathState::turn(p, 0.0).kind, Some(PathSectionType::Turn));
    }
}
