use crate::math::{Point3, TOLERANCE};

/// An ordered ring of vertices. Closed rings repeat the first vertex at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRing {
    pub points: Vec<Point3>,
}

impl LinearRing {
    /// Creates a ring from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Number of stored vertices, including a repeated closing vertex.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the first and last vertices coincide.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first - last).norm() < TOLERANCE,
            _ => false,
        }
    }
}

/// A polygonal area: an outer boundary followed by zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    rings: Vec<LinearRing>,
}

impl Cell {
    /// Creates a cell bounded by `outer`.
    #[must_use]
    pub fn new(outer: LinearRing) -> Self {
        Self { rings: vec![outer] }
    }

    /// Adds a hole.
    pub fn add_inner_ring(&mut self, ring: LinearRing) {
        self.rings.push(ring);
    }

    /// The outer boundary.
    #[must_use]
    pub fn outer(&self) -> &LinearRing {
        &self.rings[0]
    }

    /// The holes, in insertion order.
    #[must_use]
    pub fn inner(&self) -> &[LinearRing] {
        &self.rings[1..]
    }

    /// Ring `index`, where 0 is the outer boundary.
    #[must_use]
    pub fn ring(&self, index: usize) -> Option<&LinearRing> {
        self.rings.get(index)
    }

    /// Total number of rings, outer included.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }
}

/// Validated planning input.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    cell: Cell,
}

impl Field {
    #[must_use]
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }

    #[must_use]
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Ring `index` of the field geometry; 0 is the outer boundary,
    /// `i >= 1` is hole `i`.
    #[must_use]
    pub fn geometry(&self, index: usize) -> Option<&LinearRing> {
        self.cell.ring(index)
    }
}
