use crate::geometry::bezier::{CubicBezier, QuadBezier};
use crate::geometry::matrix::Matrix;
use crate::geometry::point::Point;
use crate::geometry::rect::Rect;
use crate::shape::Shape;
use crate::{json, svg, PathError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

fn is_false(v: &bool) -> bool {
    !*v
}

/// A path vertex: the position the outline passes through plus optional
/// control points for the segments entering (`prev`) and leaving (`next`)
/// it.
///
/// One control on a junction makes that segment quadratic, two make it
/// cubic, none makes it a straight line. `move_to` marks the start of a
/// subpath: the anchor is not joined to its predecessor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    #[serde(flatten)]
    pub pt: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Point>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub move_to: bool,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { pt: Point::new(x, y), ..Self::default() }
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        Self { move_to: true, ..Self::new(x, y) }
    }

    pub fn with_prev(mut self, x: f64, y: f64) -> Self {
        self.prev = Some(Point::new(x, y));
        self
    }

    pub fn with_next(mut self, x: f64, y: f64) -> Self {
        self.next = Some(Point::new(x, y));
        self
    }

    /// The anchor position followed by whichever controls are present.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        std::iter::once(self.pt).chain(self.prev).chain(self.next)
    }

    /// Mutable access to the position and its controls, so a transform
    /// applied through this moves all of them rigidly.
    pub fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        std::iter::once(&mut self.pt)
            .chain(self.prev.as_mut())
            .chain(self.next.as_mut())
    }
}

impl From<Point> for Anchor {
    fn from(pt: Point) -> Self {
        Anchor { pt, ..Anchor::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentKind {
    Line,
    Quadratic(Point),
    Cubic(Point, Point),
}

impl SegmentKind {
    /// Curve type between two anchors, read off their control fields.
    pub fn between(a: &Anchor, b: &Anchor) -> SegmentKind {
        match (a.next, b.prev) {
            (Some(c1), Some(c2)) => SegmentKind::Cubic(c1, c2),
            (Some(c), None) | (None, Some(c)) => SegmentKind::Quadratic(c),
            (None, None) => SegmentKind::Line,
        }
    }
}

/// A drawn piece of a path between two anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn eval(&self, t: f64) -> Point {
        match self.kind {
            SegmentKind::Line => self.from.lerp(&self.to, t),
            SegmentKind::Quadratic(c) => QuadBezier::new(self.from, c, self.to).eval(t),
            SegmentKind::Cubic(c1, c2) => CubicBezier::new(self.from, c1, c2, self.to).eval(t),
        }
    }

    /// Extra points, beyond the two anchors, whose bounding box still
    /// contains the curve. Empty for straight segments.
    fn hull_points(&self) -> Vec<Point> {
        match self.kind {
            SegmentKind::Line => Vec::new(),
            SegmentKind::Quadratic(c) => QuadBezier::new(self.from, c, self.to).hull_points().to_vec(),
            SegmentKind::Cubic(c1, c2) => {
                CubicBezier::new(self.from, c1, c2, self.to).hull_points().to_vec()
            }
        }
    }
}

/// Ordered anchors forming one or more open or closed polylines whose
/// segments may be straight, quadratic or cubic.
///
/// Anchor order is segment order. When `closed` is set, an implicit
/// segment joins the last anchor back to the start of its subpath.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub(crate) points: Vec<Anchor>,
    pub closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Anchor>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Closed four-anchor polygon tracing `rect` from its `from` corner.
    pub fn from_rect(rect: &Rect) -> Self {
        let (a, b) = (rect.from, rect.to);
        Self::from_points(
            vec![
                Anchor::new(a.x, a.y),
                Anchor::new(b.x, a.y),
                Anchor::new(b.x, b.y),
                Anchor::new(a.x, b.y),
            ],
            true,
        )
    }

    /// Four-cubic approximation of an ellipse. `r1` is the vertical
    /// radius, `r2` the horizontal one; anchors start at the top and run
    /// clockwise in screen coordinates.
    pub fn ellipse(c: Point, r1: f64, r2: f64) -> Self {
        let (x, y) = (c.x, c.y);
        let (qr1, qr2) = (r1 / 2.0, r2 / 2.0);
        Self::from_points(
            vec![
                Anchor::new(x, y - r1).with_prev(x - qr2, y - r1).with_next(x + qr2, y - r1),
                Anchor::new(x + r2, y).with_prev(x + r2, y - qr1).with_next(x + r2, y + qr1),
                Anchor::new(x, y + r1).with_prev(x + qr2, y + r1).with_next(x - qr2, y + r1),
                Anchor::new(x - r2, y).with_prev(x - r2, y + qr1).with_next(x - r2, y - qr1),
            ],
            true,
        )
    }

    /// Star with `num_vertices` outer tips: `2 * num_vertices` straight
    /// anchors alternating between radius `r1` and `r2`, the `r2` ones
    /// turned by an extra `offset` radians.
    pub fn star(c: Point, r1: f64, r2: f64, num_vertices: usize, offset: f64) -> Self {
        let count = num_vertices * 2;
        let step = 2.0 * PI / count as f64;
        let points = (0..count)
            .map(|i| {
                let alfa = step * i as f64;
                let (r, ang) = if i % 2 == 0 { (r1, alfa) } else { (r2, alfa + offset) };
                Anchor::new(c.x + r * ang.sin(), c.y + r * ang.cos())
            })
            .collect();
        Self::from_points(points, true)
    }

    pub fn points(&self) -> &[Anchor] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Anchor] {
        &mut self.points
    }

    pub fn push(&mut self, anchor: Anchor) -> &mut Self {
        self.points.push(anchor);
        self
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.closed = false;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of subpaths (runs between move-to anchors).
    pub fn subpath_count(&self) -> usize {
        self.points
            .iter()
            .enumerate()
            .filter(|(i, a)| *i == 0 || a.move_to)
            .count()
    }

    /// Drawn segments in storage order, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let pts = &self.points;
        let open = pts.windows(2).filter(|w| !w[1].move_to).map(|w| Segment {
            from: w[0].pt,
            to: w[1].pt,
            kind: SegmentKind::between(&w[0], &w[1]),
        });
        let closing = if self.closed && pts.len() > 1 {
            let start = pts.iter().rposition(|a| a.move_to).unwrap_or(0);
            let (last, first) = (&pts[pts.len() - 1], &pts[start]);
            (start != pts.len() - 1).then(|| Segment {
                from: last.pt,
                to: first.pt,
                kind: SegmentKind::between(last, first),
            })
        } else {
            None
        };
        open.chain(closing)
    }

    fn for_each_point_mut(&mut self, mut f: impl FnMut(&mut Point)) {
        for anchor in self.points.iter_mut() {
            anchor.points_mut().for_each(&mut f);
        }
    }

    /// Serialize to SVG path data (`d` attribute syntax).
    pub fn to_svg(&self) -> String {
        svg::write::to_svg_impl(self)
    }

    /// Replace this path's contents with parsed SVG path data. On error
    /// the path is left untouched.
    pub fn set_svg(&mut self, d: &str) -> Result<&mut Self, PathError> {
        *self = svg::parse::parse_impl(d)?;
        Ok(self)
    }

    pub fn from_svg(d: &str) -> Result<Self, PathError> {
        svg::parse::parse_impl(d)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Self, PathError> {
        json::from_json_impl(v)
    }
}

impl Shape for Path {
    /// Curve-aware bounds: anchors plus, for every curved segment, the
    /// points of one midpoint subdivision of its control polygon. The
    /// result is conservative, never tight-fitted to curve extrema.
    fn bound_rect(&self) -> Option<Rect> {
        let anchors = self.points.iter().map(|a| a.pt);
        let corrections = self.segments().flat_map(|s| s.hull_points());
        Rect::from_points(anchors.chain(corrections))
    }

    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.for_each_point_mut(|p| {
            p.move_by(dx, dy);
        });
        self
    }

    fn move_dir(&mut self, dist: f64, angle: f64) -> &mut Self {
        self.for_each_point_mut(|p| {
            p.move_dir(dist, angle);
        });
        self
    }

    fn rotate(&mut self, angle: f64, pivot: Point) -> &mut Self {
        self.for_each_point_mut(|p| {
            p.rotate(angle, pivot);
        });
        self
    }

    fn scale(&mut self, sx: f64, sy: f64, pivot: Point) -> &mut Self {
        self.for_each_point_mut(|p| {
            p.scale(sx, sy, pivot);
        });
        self
    }

    fn matrix_transform(&mut self, m: &Matrix) -> &mut Self {
        self.for_each_point_mut(|p| {
            p.matrix_transform(m);
        });
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::from_svg(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_kind_from_controls() {
        let a = Anchor::new(0.0, 0.0);
        let b = Anchor::new(5.0, 5.0);
        assert_eq!(SegmentKind::between(&a, &b), SegmentKind::Line);
        let qa = a.with_next(1.0, 0.0);
        assert_eq!(SegmentKind::between(&qa, &b), SegmentKind::Quadratic(Point::new(1.0, 0.0)));
        let qb = b.with_prev(4.0, 5.0);
        assert_eq!(SegmentKind::between(&a, &qb), SegmentKind::Quadratic(Point::new(4.0, 5.0)));
        assert_eq!(
            SegmentKind::between(&qa, &qb),
            SegmentKind::Cubic(Point::new(1.0, 0.0), Point::new(4.0, 5.0))
        );
    }

    #[test]
    fn segments_skip_moves_and_close_last_subpath() {
        let p = Path::from_points(
            vec![
                Anchor::move_to(0.0, 0.0),
                Anchor::new(1.0, 0.0),
                Anchor::move_to(5.0, 5.0),
                Anchor::new(6.0, 5.0),
                Anchor::new(6.0, 6.0),
            ],
            true,
        );
        let segs: Vec<_> = p.segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0].to, Point::new(1.0, 0.0));
        assert_eq!(segs[1].from, Point::new(5.0, 5.0));
        let closing = segs[3];
        assert_eq!(closing.from, Point::new(6.0, 6.0));
        assert_eq!(closing.to, Point::new(5.0, 5.0));
        assert_eq!(p.subpath_count(), 2);
    }

    #[test]
    fn single_anchor_has_no_segments() {
        let p = Path::from_points(vec![Anchor::new(1.0, 1.0)], true);
        assert_eq!(p.segments().count(), 0);
        assert_eq!(p.bound_rect(), Some(Rect::from_coords(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn anchor_points_mut_reaches_controls() {
        let mut a = Anchor::new(1.0, 1.0).with_prev(0.0, 0.0).with_next(2.0, 2.0);
        a.points_mut().for_each(|p| {
            p.move_by(10.0, 0.0);
        });
        assert_eq!(a.pt, Point::new(11.0, 1.0));
        assert_eq!(a.prev, Some(Point::new(10.0, 0.0)));
        assert_eq!(a.next, Some(Point::new(12.0, 2.0)));
        assert_eq!(a.points().count(), 3);
    }
}
