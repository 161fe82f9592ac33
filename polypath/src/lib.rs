//! 2D path geometry: open or closed polylines whose segments may be
//! straight, quadratic or cubic, with affine transforms, curve-aware
//! bounds, shape fitting, shape generators and an SVG path data codec.

pub mod geometry {
    pub mod bezier;
    pub mod limits;
    pub mod matrix;
    pub mod point;
    pub mod rect;
    pub mod tolerance;
}
pub mod path;
pub mod shape;
pub mod svg;
mod error;
mod json;

pub use error::PathError;
pub use geometry::matrix::Matrix;
pub use geometry::point::Point;
pub use geometry::rect::Rect;
pub use path::{Anchor, Path, Segment, SegmentKind};
pub use shape::{AlignBase, Orientation, Shape};
