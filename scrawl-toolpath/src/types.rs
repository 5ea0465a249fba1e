//! Core geometry types for the toolpath pipeline.

pub use kurbo::Point;

/// Convenience alias. All physical coordinates are f64 millimeters.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

/// An ordered sequence of points forming one pen-down stroke.
///
/// Insertion order defines the stroke direction. A polyline is closed
/// when its last point equals its first (the source contour was closed).
/// Polylines are produced once by layout and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    /// Create an empty polyline.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polyline from a point sequence.
    #[must_use]
    pub const fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the last point equals the first (closed contour).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => self.points.len() > 1 && a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_requires_matching_endpoints() {
        let open = Polyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert!(!open.is_closed());

        let closed = Polyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        assert!(closed.is_closed());
    }

    #[test]
    fn single_point_is_not_closed() {
        let p = Polyline::from_points(vec![Point::new(2.0, 3.0)]);
        assert!(!p.is_closed());
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn empty_polyline() {
        let p = Polyline::new();
        assert!(p.is_empty());
        assert_eq!(p.first(), None);
        assert_eq!(p.last(), None);
    }
}
