//! Axis-aligned rectangle described by two corners.
//!
//! Corners are not kept ordered: a rectangle whose `from` lies right of
//! (or below) its `to` expresses a flip on that axis. Call
//! [`Rect::normalize`] before treating `from` as the top-left corner.

use super::point::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub from: Point,
    pub to: Point,
}

impl Rect {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Square rectangle centered on `pt`, `dist` from center to each side.
    pub fn around_point(pt: Point, dist: f64) -> Self {
        let mut r = Rect::default();
        r.place_around_point(pt, dist);
        r
    }

    /// Smallest rectangle containing every point; `None` when empty.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Rect> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in it {
            if p.x < min_x { min_x = p.x; }
            if p.y < min_y { min_y = p.y; }
            if p.x > max_x { max_x = p.x; }
            if p.y > max_y { max_y = p.y; }
        }
        Some(Rect::from_coords(min_x, min_y, max_x, max_y))
    }

    /// Reorder corners per axis so `from` holds the minimum.
    pub fn normalize(&mut self) -> &mut Self {
        if self.from.x > self.to.x {
            std::mem::swap(&mut self.from.x, &mut self.to.x);
        }
        if self.from.y > self.to.y {
            std::mem::swap(&mut self.from.y, &mut self.to.y);
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn is_right_to(&self, other: &Rect) -> bool {
        self.from.is_right_to(&other.from)
    }

    pub fn is_down_to(&self, other: &Rect) -> bool {
        self.from.is_down_to(&other.from)
    }

    /// True when `from` lies right of `to`.
    pub fn is_flipped_x(&self) -> bool {
        self.from.is_right_to(&self.to)
    }

    /// True when `from` lies below `to`.
    pub fn is_flipped_y(&self) -> bool {
        self.from.is_down_to(&self.to)
    }

    pub fn width(&self) -> f64 {
        (self.to.x - self.from.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.to.y - self.from.y).abs()
    }

    pub fn center(&self) -> Point {
        self.from.lerp(&self.to, 0.5)
    }

    pub fn place_around_point(&mut self, pt: Point, dist: f64) -> &mut Self {
        self.from = Point::new(pt.x - dist, pt.y - dist);
        self.to = Point::new(pt.x + dist, pt.y + dist);
        self
    }

    /// Inclusive containment; corner order does not matter.
    pub fn contains(&self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.from.x && p.x <= r.to.x && p.y >= r.from.y && p.y <= r.to.y
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        Rect::from_coords(
            a.from.x.min(b.from.x),
            a.from.y.min(b.from.y),
            a.to.x.max(b.to.x),
            a.to.y.max(b.to.y),
        )
    }
}
