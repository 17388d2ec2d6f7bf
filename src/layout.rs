use crate::geometry::{point, Triangle};

/// Share of the shorter side used as the square drawing area.
pub const CANVAS_RATIO: f64 = 0.9;
/// Triangle side as a share of the drawing area.
pub const TRIANGLE_RATIO: f64 = 0.6;

/// Base triangle for a `width` x `height` surface with its origin at
/// `(left, top)`, centered and apex up.
pub fn fit(left: f64, top: f64, width: f64, height: f64) -> Triangle {
    let size = width.min(height).max(0.0) * CANVAS_RATIO;
    let side = size * TRIANGLE_RATIO;
    let center = point(left + width / 2.0, top + height / 2.0);
    Triangle::equilateral(center, side / 3.0_f64.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_the_shorter_side() {
        let triangle = fit(0.0, 0.0, 1000.0, 500.0);
        for side in triangle.side_lengths() {
            assert!((side - 500.0 * 0.9 * 0.6).abs() < 1e-9);
        }
        assert!(triangle.centroid().approx_eq(point(500.0, 250.0), 1e-9));
    }

    #[test]
    fn follows_the_origin() {
        let a = fit(0.0, 0.0, 400.0, 400.0);
        let b = fit(50.0, 20.0, 400.0, 400.0);
        for (p, q) in a.vertices().iter().zip(b.vertices()) {
            assert!((q - *p).approx_eq(point(50.0, 20.0), 1e-9));
        }
    }

    #[test]
    fn empty_surface_collapses() {
        let triangle = fit(10.0, 10.0, 0.0, 300.0);
        assert!(triangle.side_lengths().iter().all(|&s| s == 0.0));
    }
}
