use crate::math::Point3;

/// A single coverage pass: the polyline the implement follows plus its width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Swath {
    pub points: Vec<Point3>,
    /// Working width covered by the pass.
    pub width: f64,
}

/// Ordered collection of swaths.
pub type Swaths = Vec<Swath>;

impl Swath {
    /// Creates a swath along the given points.
    #[must_use]
    pub fn new(points: Vec<Point3>, width: f64) -> Self {
        Self { points, width }
    }

    /// Creates a straight swath between two points.
    #[must_use]
    pub fn from_segment(start: Point3, end: Point3, width: f64) -> Self {
        Self::new(vec![start, end], width)
    }

    /// Returns the first point of the swath, if any.
    #[must_use]
    pub fn start_point(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// Returns the last point of the swath, if any.
    #[must_use]
    pub fn end_point(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
