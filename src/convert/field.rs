use tracing::{debug, warn};

use crate::error::GoalError;
use crate::geometry::{Cell, Field, LinearRing};
use crate::math::Point3;
use crate::msgs::{Coordinates, CoverageGoal};

/// Minimum number of coordinates a goal polygon must carry.
pub const MIN_POLYGON_COORDINATES: usize = 3;

/// Builds the field described by a goal's polygons.
///
/// The first polygon is the outer boundary; every following polygon becomes a
/// hole. All polygons are validated before the field is returned, so a single
/// malformed ring rejects the whole goal.
///
/// # Errors
///
/// - [`GoalError::MissingPolygons`] if the goal has no polygons.
/// - [`GoalError::TooFewCoordinates`] if a polygon has fewer than three coordinates.
/// - [`GoalError::NotClosed`] if a polygon's last coordinate differs from its first.
pub fn field_from_goal(goal: &CoverageGoal) -> Result<Field, GoalError> {
    let Some((outer, inner)) = goal.polygons.split_first() else {
        warn!("rejecting goal without polygons");
        return Err(GoalError::MissingPolygons);
    };

    let mut cell = Cell::new(polygon_to_ring(0, outer)?);
    for (i, polygon) in inner.iter().enumerate() {
        cell.add_inner_ring(polygon_to_ring(i + 1, polygon)?);
    }

    debug!(
        rings = cell.ring_count(),
        outer_vertices = cell.outer().len(),
        "extracted field from goal"
    );
    Ok(Field::new(cell))
}

fn polygon_to_ring(index: usize, polygon: &Coordinates) -> Result<LinearRing, GoalError> {
    let count = polygon.coordinates.len();
    if count < MIN_POLYGON_COORDINATES {
        warn!(index, count, "rejecting polygon with too few coordinates");
        return Err(GoalError::TooFewCoordinates { index, count });
    }

    let ring = LinearRing::new(
        polygon
            .coordinates
            .iter()
            .map(|c| Point3::new(c.axis1, c.axis2, 0.0))
            .collect(),
    );
    if !ring.is_closed() {
        warn!(index, "rejecting open polygon");
        return Err(GoalError::NotClosed { index });
    }
    Ok(ring)
}
