use tracing::{debug, warn};

use crate::error::PathError;
use crate::geometry::{Path, PathSectionType, PathState, Swath};
use crate::msgs::{CoveragePath, Header, NavPath, Point32, SwathMsg};

use super::point::{path_state_to_pose, point_to_msg};

/// A maximal run of consecutive path states sharing one section type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section<'a> {
    pub kind: PathSectionType,
    pub states: &'a [PathState],
}

/// Splits a path into contiguous runs of swath and turn states, in travel order.
///
/// # Errors
///
/// Returns [`PathError::InvalidState`] for the first state without a section type.
pub fn split_sections(path: &Path) -> Result<Vec<Section<'_>>, PathError> {
    let states = path.states.as_slice();
    let mut sections = Vec::new();
    let mut run: Option<(PathSectionType, usize)> = None;

    for (index, state) in states.iter().enumerate() {
        let Some(kind) = state.kind else {
            warn!(index, "path state has no section type");
            return Err(PathError::InvalidState { index });
        };
        match run {
            Some((current, _)) if current == kind => {}
            Some((current, start)) => {
                sections.push(Section {
                    kind: current,
                    states: &states[start..index],
                });
                run = Some((kind, index));
            }
            None => run = Some((kind, index)),
        }
    }

    if let Some((kind, start)) = run {
        sections.push(Section {
            kind,
            states: &states[start..],
        });
    }
    Ok(sections)
}

/// Builds a coverage path message from bare swaths, without turns.
#[must_use]
pub fn swaths_to_coverage_path_msg(swaths: &[Swath], ordered: bool, header: &Header) -> CoveragePath {
    debug!(swaths = swaths.len(), ordered, "building swath-only coverage path");
    CoveragePath {
        header: header.clone(),
        swaths: swaths.iter().map(swath_to_msg).collect(),
        swaths_ordered: ordered,
        turns: Vec::new(),
        contains_turns: false,
    }
}

/// Builds a coverage path message from a full path, splitting it into
/// alternating swaths and turns.
///
/// The result always reports ordered swaths and `contains_turns`, even for an
/// empty path.
///
/// # Errors
///
/// Returns [`PathError::InvalidState`] if any state is neither swath nor turn.
pub fn to_coverage_path_msg(path: &Path, header: &Header) -> Result<CoveragePath, PathError> {
    let mut msg = CoveragePath {
        header: header.clone(),
        swaths: Vec::new(),
        swaths_ordered: true,
        turns: Vec::new(),
        contains_turns: true,
    };

    for section in split_sections(path)? {
        match section.kind {
            PathSectionType::Swath => msg.swaths.push(section_to_swath_msg(section.states)),
            PathSectionType::Turn => msg.turns.push(states_to_nav_path(section.states, header)),
        }
    }

    debug!(
        states = path.len(),
        swaths = msg.swaths.len(),
        turns = msg.turns.len(),
        "built coverage path"
    );
    Ok(msg)
}

/// Converts every state of a path into a stamped pose. Section types are ignored.
#[must_use]
pub fn to_nav_path_msg(path: &Path, header: &Header) -> NavPath {
    states_to_nav_path(&path.states, header)
}

/// Converts a swath to its endpoint message. Empty swaths map to the origin.
#[must_use]
pub fn swath_to_msg(swath: &Swath) -> SwathMsg {
    SwathMsg {
        start: swath.start_point().map_or_else(Point32::default, |p| point_to_msg(&p)),
        end: swath.end_point().map_or_else(Point32::default, |p| point_to_msg(&p)),
    }
}

fn section_to_swath_msg(states: &[PathState]) -> SwathMsg {
    SwathMsg {
        start: states.first().map_or_else(Point32::default, |s| point_to_msg(&s.point)),
        end: states.last().map_or_else(Point32::default, |s| point_to_msg(&s.point)),
    }
}

fn states_to_nav_path(states: &[PathState], header: &Header) -> NavPath {
    NavPath {
        header: header.clone(),
        poses: states
            .iter()
            .map(|state| {
                let mut pose = path_state_to_pose(state);
                pose.header = header.clone();
                pose
            })
            .collect(),
    }
}
