//! Quadratic and cubic Bezier segments and their flattening.
//!
//! Curves are flattened by uniform parameter sampling: the arc length is
//! approximated by the control-polygon length (a deliberate fast
//! overestimate, not a true arc length), the segment count is derived
//! from the maximum chord length, and the curve is evaluated at equally
//! spaced parameters with the standard Bernstein forms.

use crate::types::{Point, Scalar};

/// Minimum number of line segments per flattened curve.
const MIN_SEGMENTS: usize = 2;

/// Three control points of a quadratic Bezier segment (TrueType-style).
#[derive(Debug, Clone, Copy)]
pub struct QuadSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadSegment {
    /// Create a new quadratic segment from three control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the point at parameter `t` in [0, 1].
    ///
    /// B(t) = (1−t)²P0 + 2(1−t)tP1 + t²P2
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Point {
        let s = 1.0 - t;
        let a = s * s;
        let b = 2.0 * s * t;
        let c = t * t;
        Point::new(
            c.mul_add(self.p2.x, a.mul_add(self.p0.x, b * self.p1.x)),
            c.mul_add(self.p2.y, a.mul_add(self.p0.y, b * self.p1.y)),
        )
    }

    /// Sum of control-polygon edge lengths (arc-length upper bound).
    #[must_use]
    pub fn control_polygon_length(&self) -> Scalar {
        self.p0.distance(self.p1) + self.p1.distance(self.p2)
    }

    /// Flatten into a polyline whose chords are at most `max_chord` long.
    ///
    /// The first output point duplicates the curve start so that callers
    /// concatenating onto an existing path can skip it. At least 3 points
    /// are produced.
    #[must_use]
    pub fn flatten(&self, max_chord: Scalar) -> Vec<Point> {
        sample(self.control_polygon_length(), max_chord, |t| self.eval(t))
    }
}

/// Four control points of a cubic Bezier segment (CFF/OpenType-style).
#[derive(Debug, Clone, Copy)]
pub struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicSegment {
    /// Create a new cubic segment from four control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the point at parameter `t` in [0, 1].
    ///
    /// B(t) = (1−t)³P0 + 3(1−t)²tP1 + 3(1−t)t²P2 + t³P3
    #[expect(
        clippy::many_single_char_names,
        reason = "standard Bezier math variable names (a, b, c, d, s, t)"
    )]
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Point {
        let s = 1.0 - t;
        let a = s * s * s;
        let b = 3.0 * s * s * t;
        let c = 3.0 * s * t * t;
        let d = t * t * t;
        Point::new(
            d.mul_add(
                self.p3.x,
                a.mul_add(self.p0.x, b.mul_add(self.p1.x, c * self.p2.x)),
            ),
            d.mul_add(
                self.p3.y,
                a.mul_add(self.p0.y, b.mul_add(self.p1.y, c * self.p2.y)),
            ),
        )
    }

    /// Sum of control-polygon edge lengths (arc-length upper bound).
    #[must_use]
    pub fn control_polygon_length(&self) -> Scalar {
        self.p0.distance(self.p1) + self.p1.distance(self.p2) + self.p2.distance(self.p3)
    }

    /// Flatten into a polyline whose chords are at most `max_chord` long.
    ///
    /// Same contract as [`QuadSegment::flatten`].
    #[must_use]
    pub fn flatten(&self, max_chord: Scalar) -> Vec<Point> {
        sample(self.control_polygon_length(), max_chord, |t| self.eval(t))
    }
}

/// Number of chords for a curve of the given approximate length.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "length and chord are positive and finite"
)]
fn segment_count(approx_length: Scalar, max_chord: Scalar) -> usize {
    let n = (approx_length / max_chord).floor() as usize;
    n.max(MIN_SEGMENTS)
}

/// Evaluate `eval` at `segment_count + 1` uniform parameters in [0, 1].
#[expect(
    clippy::cast_precision_loss,
    reason = "segment counts are far below 2^52"
)]
fn sample(approx_length: Scalar, max_chord: Scalar, eval: impl Fn(Scalar) -> Point) -> Vec<Point> {
    let n = segment_count(approx_length, max_chord);
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        points.push(eval(i as Scalar / n as Scalar));
    }
    points
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
