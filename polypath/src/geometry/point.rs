//! 2D coordinate with in-place transform operations.

use super::matrix::Matrix;
use super::tolerance::{approx_eq, EPS_POS};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move by x/y deltas.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Move by `dist` in direction `angle` (radians).
    pub fn move_dir(&mut self, dist: f64, angle: f64) -> &mut Self {
        self.x += dist * angle.cos();
        self.y += dist * angle.sin();
        self
    }

    /// Rotate around `pivot` by `angle` (radians).
    pub fn rotate(&mut self, angle: f64, pivot: Point) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        self.x = pivot.x + dx * cos - dy * sin;
        self.y = pivot.y + dx * sin + dy * cos;
        self
    }

    /// Scale away from `pivot` by independent x/y factors.
    pub fn scale(&mut self, sx: f64, sy: f64, pivot: Point) -> &mut Self {
        self.x = pivot.x + (self.x - pivot.x) * sx;
        self.y = pivot.y + (self.y - pivot.y) * sy;
        self
    }

    pub fn matrix_transform(&mut self, m: &Matrix) -> &mut Self {
        *self = m.apply(*self);
        self
    }

    /// Angle of the vector from `other` to this point, `atan2` convention.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (self.y - other.y).atan2(self.x - other.x)
    }

    /// Component-wise `(dx, dy)` from this point to `other`.
    pub fn delta_to(&self, other: &Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let (dx, dy) = self.delta_to(other);
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    /// Mirror image of this point through `center`.
    #[inline]
    pub fn reflect_through(&self, center: &Point) -> Point {
        Point {
            x: 2.0 * center.x - self.x,
            y: 2.0 * center.y - self.y,
        }
    }

    pub fn is_right_to(&self, other: &Point) -> bool {
        self.x > other.x
    }

    pub fn is_down_to(&self, other: &Point) -> bool {
        self.y > other.y
    }

    /// Coincidence within [`EPS_POS`] on both axes.
    pub fn approx_eq(&self, other: &Point) -> bool {
        approx_eq(self.x, other.x, EPS_POS) && approx_eq(self.y, other.y, EPS_POS)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}
