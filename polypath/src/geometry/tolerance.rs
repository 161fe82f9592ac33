// Centralized tolerances and helpers for path geometry

pub const EPS_POS: f64 = 1e-9; // point coincidence threshold

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

/// Ratio used by shape fitting: a zero extent on either side counts as 1,
/// which leaves that axis at a 1:1 scale.
#[inline]
pub fn fit_ratio(target: f64, source: f64) -> f64 {
    let t = if target == 0.0 { 1.0 } else { target };
    let s = if source == 0.0 { 1.0 } else { source };
    t / s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extents_fit_one_to_one() {
        assert_eq!(fit_ratio(10.0, 5.0), 2.0);
        assert_eq!(fit_ratio(0.0, 5.0), 0.2);
        assert_eq!(fit_ratio(10.0, 0.0), 10.0);
        assert_eq!(fit_ratio(0.0, 0.0), 1.0);
    }
}
