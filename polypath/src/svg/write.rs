//! Path to SVG path data.
//!
//! Output is fixed: one command letter per anchor, comma-joined pairs
//! with three decimals, `Z` appended directly when closed.

use crate::path::{Path, SegmentKind};
use std::fmt::Write;

const DECIMALS: usize = 3;

fn push_pair(out: &mut String, x: f64, y: f64) {
    // -0 would print as "-0.000"
    let x = if x == 0.0 { 0.0 } else { x };
    let y = if y == 0.0 { 0.0 } else { y };
    let _ = write!(out, "{:.*},{:.*}", DECIMALS, x, DECIMALS, y);
}

pub fn to_svg_impl(path: &Path) -> String {
    let pts = path.points();
    let mut out = String::new();
    for (i, anchor) in pts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if i == 0 || anchor.move_to {
            out.push('M');
        } else {
            match SegmentKind::between(&pts[i - 1], anchor) {
                SegmentKind::Line => out.push('L'),
                SegmentKind::Quadratic(c) => {
                    out.push('Q');
                    push_pair(&mut out, c.x, c.y);
                    out.push(' ');
                }
                SegmentKind::Cubic(c1, c2) => {
                    out.push('C');
                    push_pair(&mut out, c1.x, c1.y);
                    out.push(' ');
                    push_pair(&mut out, c2.x, c2.y);
                    out.push(' ');
                }
            }
        }
        push_pair(&mut out, anchor.pt.x, anchor.pt.y);
    }
    if path.closed && !pts.is_empty() {
        out.push('Z');
    }
    out
}
