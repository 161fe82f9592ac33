//! Behavior shared by anything that can be measured and transformed as a
//! whole: a single [`Path`] or a group of them.

use crate::geometry::matrix::Matrix;
use crate::geometry::point::Point;
use crate::geometry::rect::Rect;
use crate::geometry::tolerance::fit_ratio;
use crate::path::Path;
use crate::PathError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horiz" | "horizontal" => Ok(Orientation::Horizontal),
            "vert" | "vertical" => Ok(Orientation::Vertical),
            _ => Err(PathError::InvalidArgument(format!("unknown orientation '{}'", s))),
        }
    }
}

/// Edge or axis of the target rectangle a shape is aligned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignBase {
    Left,
    Right,
    /// Horizontal center.
    Center,
    Top,
    Bottom,
    /// Vertical center.
    Middle,
}

impl FromStr for AlignBase {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(AlignBase::Left),
            "right" => Ok(AlignBase::Right),
            "center" => Ok(AlignBase::Center),
            "top" => Ok(AlignBase::Top),
            "bottom" => Ok(AlignBase::Bottom),
            "vert" | "middle" => Ok(AlignBase::Middle),
            _ => Err(PathError::InvalidArgument(format!("unknown align base '{}'", s))),
        }
    }
}

pub trait Shape {
    /// Bounding rectangle with `from` as the minimum corner, or `None`
    /// for an empty shape.
    fn bound_rect(&self) -> Option<Rect>;
    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self;
    fn move_dir(&mut self, dist: f64, angle: f64) -> &mut Self;
    fn rotate(&mut self, angle: f64, pivot: Point) -> &mut Self;
    fn scale(&mut self, sx: f64, sy: f64, pivot: Point) -> &mut Self;
    fn matrix_transform(&mut self, m: &Matrix) -> &mut Self;

    fn center(&self) -> Option<Point> {
        self.bound_rect().map(|r| r.center())
    }

    /// Flip about the bounding-box center.
    fn mirror(&mut self, orientation: Orientation) -> &mut Self {
        if let Some(c) = self.center() {
            match orientation {
                Orientation::Horizontal => self.scale(-1.0, 1.0, c),
                Orientation::Vertical => self.scale(1.0, -1.0, c),
            };
        }
        self
    }

    /// Translate so the bounding box touches an edge of `rect`, or
    /// centers on one of its axes.
    fn align(&mut self, base: AlignBase, rect: &Rect) -> &mut Self {
        let Some(own) = self.bound_rect() else {
            return self;
        };
        let target = rect.normalized();
        let (dx, dy) = match base {
            AlignBase::Left => (target.from.x - own.from.x, 0.0),
            AlignBase::Right => (target.to.x - own.to.x, 0.0),
            AlignBase::Center => (target.center().x - own.center().x, 0.0),
            AlignBase::Top => (0.0, target.from.y - own.from.y),
            AlignBase::Bottom => (0.0, target.to.y - own.to.y),
            AlignBase::Middle => (0.0, target.center().y - own.center().y),
        };
        self.move_by(dx, dy)
    }

    /// Map the bounding box onto `target`, scaling each axis on its own.
    ///
    /// A target whose `from` lies right of (below) its `to` mirrors the
    /// shape horizontally (vertically) first. Zero extents on either side
    /// leave that axis at 1:1.
    fn place_into_rect(&mut self, target: &Rect) -> &mut Self {
        if target.is_flipped_x() {
            self.mirror(Orientation::Horizontal);
        }
        if target.is_flipped_y() {
            self.mirror(Orientation::Vertical);
        }
        let target = target.normalized();
        let Some(own) = self.bound_rect() else {
            return self;
        };

        let (dx, dy) = own.from.delta_to(&target.from);
        self.move_by(dx, dy);

        if own.width() == 0.0 || own.height() == 0.0 || target.width() == 0.0 || target.height() == 0.0 {
            log::debug!(
                "degenerate fit: {}x{} into {}x{}, zero extents scale 1:1",
                own.width(),
                own.height(),
                target.width(),
                target.height()
            );
        }
        let sx = fit_ratio(target.width(), own.width());
        let sy = fit_ratio(target.height(), own.height());
        self.scale(sx, sy, target.from)
    }

    /// Fit into the square of half-side `dist` centered on `pt`.
    fn place_around_point(&mut self, pt: Point, dist: f64) -> &mut Self {
        self.place_into_rect(&Rect::around_point(pt, dist))
    }
}

/// A group of paths behaves as one shape: bounds are the union of the
/// members' bounds and transforms reach every member.
impl Shape for [Path] {
    fn bound_rect(&self) -> Option<Rect> {
        self.iter()
            .filter_map(|p| p.bound_rect())
            .reduce(|acc, r| acc.union(&r))
    }

    fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        for p in self.iter_mut() {
            p.move_by(dx, dy);
        }
        self
    }

    fn move_dir(&mut self, dist: f64, angle: f64) -> &mut Self {
        for p in self.iter_mut() {
            p.move_dir(dist, angle);
        }
        self
    }

    fn rotate(&mut self, angle: f64, pivot: Point) -> &mut Self {
        for p in self.iter_mut() {
            p.rotate(angle, pivot);
        }
        self
    }

    fn scale(&mut self, sx: f64, sy: f64, pivot: Point) -> &mut Self {
        for p in self.iter_mut() {
            p.scale(sx, sy, pivot);
        }
        self
    }

    fn matrix_transform(&mut self, m: &Matrix) -> &mut Self {
        for p in self.iter_mut() {
            p.matrix_transform(m);
        }
        self
    }
}
