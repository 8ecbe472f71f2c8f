//! Cartesian ↔ polar conversions.
//!
//! Angles are in radians, measured counter-clockwise from the +x axis.

/// Converts `(x, y)` to `(r, theta)`, with `theta` in `(-π, π]`.
#[must_use]
pub fn xy_to_polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

/// Converts `(r, theta)` to `(x, y)`.
#[must_use]
pub fn polar_to_xy(r: f64, theta: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (r * cos, r * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-10;

    #[test]
    fn unit_axes() {
        let (r, t) = xy_to_polar(0.0, 2.0);
        assert!((r - 2.0).abs() < TOL);
        assert!((t - FRAC_PI_2).abs() < TOL);

        let (r, t) = xy_to_polar(-3.0, 0.0);
        assert!((r - 3.0).abs() < TOL);
        assert!((t - PI).abs() < TOL);
    }

    #[test]
    fn origin_has_zero_radius() {
        let (r, t) = xy_to_polar(0.0, 0.0);
        assert!(r.abs() < TOL);
        assert!(t.abs() < TOL);
    }

    #[test]
    fn polar_back_to_xy() {
        let (x, y) = polar_to_xy(2.0, FRAC_PI_2);
        assert!(x.abs() < TOL, "x={x}");
        assert!((y - 2.0).abs() < TOL, "y={y}");
    }

    #[test]
    fn third_quadrant_inverts() {
        let (r, t) = xy_to_polar(-1.0, -1.0);
        assert!(t < -FRAC_PI_2);
        let (x, y) = polar_to_xy(r, t);
        assert!((x + 1.0).abs() < TOL && (y + 1.0).abs() < TOL, "({x}, {y})");
    }
}
