// Centralized ingestion limits to harden against untrusted input (JSON/SVG)

// Path size caps
pub const MAX_PATH_POINTS: usize = 200_000;

// SVG caps
pub const MAX_SVG_LEN: usize = 8 * 1024 * 1024; // 8 MB worth of characters in the 'd' string
pub const MAX_SVG_COMMANDS: usize = 500_000;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e12;
pub const COORD_MAX: f64 =  1.0e12;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }
