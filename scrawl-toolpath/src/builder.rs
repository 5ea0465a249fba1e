//! Glyph outline to polyline conversion.
//!
//! [`PathBuilder`] receives outline commands through
//! [`scrawl_fonts::OutlineSink`] and accumulates flattened contours as
//! [`Polyline`]s in physical units. The builder is an explicit state
//! object: the active contour, the completed list, and the running
//! horizontal offset in font design units.

use scrawl_fonts::OutlineSink;

use crate::bezier::{CubicSegment, QuadSegment};
use crate::types::{Point, Polyline, Scalar};

/// Accumulates glyph outline commands into flattened polylines.
///
/// Incoming coordinates are font design units. Each point is translated
/// by the running x offset and scaled uniformly into physical units, so
/// curve flattening decisions are made on the scaled curve and the chord
/// tolerance is in physical units directly.
#[derive(Debug)]
pub struct PathBuilder {
    /// Uniform scale factor (`text_height / units_per_em`).
    scale: Scalar,
    /// Maximum chord length for curve flattening, physical units.
    max_chord: Scalar,
    /// Running horizontal offset in font design units.
    x_offset: Scalar,
    /// The contour currently being built.
    current: Vec<Point>,
    /// Completed contours, in decode order.
    finished: Vec<Polyline>,
}

impl PathBuilder {
    /// Create a builder with the given uniform scale and chord tolerance.
    #[must_use]
    pub const fn new(scale: Scalar, max_chord: Scalar) -> Self {
        Self {
            scale,
            max_chord,
            x_offset: 0.0,
            current: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// The running horizontal offset, in font design units.
    #[must_use]
    pub const fn x_offset(&self) -> Scalar {
        self.x_offset
    }

    /// Advance the horizontal offset by a raw (unscaled) advance width.
    pub fn advance(&mut self, width: Scalar) {
        self.x_offset += width;
    }

    /// Finish building and return the completed contours, flushing any
    /// open contour.
    #[must_use]
    pub fn finish(mut self) -> Vec<Polyline> {
        self.flush();
        self.finished
    }

    /// Translate by the running offset, then scale into physical units.
    fn transform(&self, x: Scalar, y: Scalar) -> Point {
        Point::new((x + self.x_offset) * self.scale, y * self.scale)
    }

    /// Move the active contour (if any) to the completed list.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            let points = std::mem::take(&mut self.current);
            self.finished.push(Polyline::from_points(points));
        }
    }
}

impl OutlineSink for PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.flush();
        let p = self.transform(x, y);
        self.current.push(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.transform(x, y);
        self.current.push(p);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let Some(&p0) = self.current.last() else {
            return;
        };
        let seg = QuadSegment::new(p0, self.transform(x1, y1), self.transform(x, y));
        let points = seg.flatten(self.max_chord);
        // First flattened point duplicates the current position.
        self.current.extend_from_slice(&points[1..]);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let Some(&p0) = self.current.last() else {
            return;
        };
        let seg = CubicSegment::new(
            p0,
            self.transform(x1, y1),
            self.transform(x2, y2),
            self.transform(x, y),
        );
        let points = seg.flatten(self.max_chord);
        self.current.extend_from_slice(&points[1..]);
    }

    fn close(&mut self) {
        let Some(&first) = self.current.first() else {
            return;
        };
        // Append the closing point only when the contour does not already
        // end at its start; avoids a zero-length final segment.
        if self.current.last() != Some(&first) {
            self.current.push(first);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    #[test]
    fn square_contour_closes_back_to_start() {
        let mut b = PathBuilder::new(1.0, 2.0);
        b.move_to(0.0, 0.0);
        b.line_to(10.0, 0.0);
        b.line_to(10.0, 10.0);
        b.line_to(0.0, 10.0);
        b.close();
        let paths = b.finish();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 5);
        assert!(paths[0].is_closed());
    }

    #[test]
    fn close_is_a_no_op_when_already_at_start() {
        let mut b = PathBuilder::new(1.0, 2.0);
        b.move_to(0.0, 0.0);
        b.line_to(10.0, 0.0);
        b.line_to(0.0, 0.0);
        b.close();
        let paths = b.finish();

        assert_eq!(paths[0].len(), 3, "no duplicate closing point");
    }

    #[test]
    fn move_starts_a_new_contour() {
        let mut b = PathBuilder::new(1.0, 2.0);
        b.move_to(0.0, 0.0);
        b.line_to(1.0, 0.0);
        b.move_to(5.0, 5.0);
        b.line_to(6.0, 5.0);
        let paths = b.finish();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 2);
        assert_eq!(paths[1].len(), 2);
    }

    #[test]
    fn offset_and_scale_apply_per_point() {
        let mut b = PathBuilder::new(0.5, 2.0);
        b.advance(100.0);
        b.move_to(10.0, 20.0);
        let paths = b.finish();

        // (10 + 100) * 0.5, 20 * 0.5
        let p = paths[0].points[0];
        assert!((p.x - 55.0).abs() < EPSILON);
        assert!((p.y - 10.0).abs() < EPSILON);
    }

    #[test]
    fn quad_expansion_skips_duplicate_start() {
        let mut b = PathBuilder::new(1.0, 2.0);
        b.move_to(0.0, 0.0);
        b.quad_to(5.0, 10.0, 10.0, 0.0);
        let paths = b.finish();

        let points = &paths[0].points;
        // Start appears exactly once.
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_ne!(points[1], Point::new(0.0, 0.0));
        // Curve end is exact.
        assert_eq!(*points.last().unwrap_or(&Point::ZERO), Point::new(10.0, 0.0));
        assert!(points.len() >= 3);
    }

    #[test]
    fn cubic_expansion_lands_on_endpoint() {
        let mut b = PathBuilder::new(1.0, 0.5);
        b.move_to(0.0, 0.0);
        b.curve_to(1.0, 2.0, 3.0, 2.0, 4.0, 0.0);
        let paths = b.finish();

        let points = &paths[0].points;
        assert_eq!(*points.last().unwrap_or(&Point::ZERO), Point::new(4.0, 0.0));
    }

    #[test]
    fn curve_without_current_point_is_ignored() {
        let mut b = PathBuilder::new(1.0, 2.0);
        b.quad_to(5.0, 10.0, 10.0, 0.0);
        b.close();
        assert!(b.finish().is_empty());
    }

    #[test]
    fn unterminated_contour_is_flushed_on_finish() {
        let mut b = PathBuilder::new(1.0, 2.0);
        b.move_to(0.0, 0.0);
        b.line_to(3.0, 4.0);
        let paths = b.finish();
        assert_eq!(paths.len(), 1);
        assert!(!paths[0].is_closed());
    }
}
