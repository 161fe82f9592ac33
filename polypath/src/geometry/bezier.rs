//! Quadratic and cubic Bézier segments.
//!
//! Paths never store these: they are built on demand from an anchor pair
//! and its control fields (see `Path::segments`).

use super::point::Point;

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Point, // Start point
    pub p1: Point, // First control point
    pub p2: Point, // Second control point
    pub p3: Point, // End point
}

impl CubicBezier {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    /// Split the curve at parameter t using de Casteljau subdivision.
    ///
    /// Returns two cubic curves: the first from 0..t, the second from t..1.
    pub fn split_at(&self, t: f64) -> (CubicBezier, CubicBezier) {
        let p01 = self.p0.lerp(&self.p1, t);
        let p12 = self.p1.lerp(&self.p2, t);
        let p23 = self.p2.lerp(&self.p3, t);

        let p012 = p01.lerp(&p12, t);
        let p123 = p12.lerp(&p23, t);

        let p0123 = p012.lerp(&p123, t); // The split point

        (
            CubicBezier::new(self.p0, p01, p012, p0123),
            CubicBezier::new(p0123, p123, p23, self.p3),
        )
    }

    /// Interior points of one midpoint subdivision. Together with the
    /// endpoints they span both halves' control polygons, so their
    /// bounding box contains the whole curve.
    pub fn hull_points(&self) -> [Point; 5] {
        let (a, b) = self.split_at(0.5);
        [a.p1, a.p2, a.p3, b.p1, b.p2]
    }
}

/// Control points of a quadratic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBezier {
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        Point {
            x: mt * mt * self.p0.x + 2.0 * mt * t * self.p1.x + t * t * self.p2.x,
            y: mt * mt * self.p0.y + 2.0 * mt * t * self.p1.y + t * t * self.p2.y,
        }
    }

    pub fn split_at(&self, t: f64) -> (QuadBezier, QuadBezier) {
        let p01 = self.p0.lerp(&self.p1, t);
        let p12 = self.p1.lerp(&self.p2, t);
        let mid = p01.lerp(&p12, t);
        (QuadBezier::new(self.p0, p01, mid), QuadBezier::new(mid, p12, self.p2))
    }

    /// See [`CubicBezier::hull_points`].
    pub fn hull_points(&self) -> [Point; 3] {
        let (a, b) = self.split_at(0.5);
        [a.p1, a.p2, b.p1]
    }
}
