//! Sierpiński gasket: every triangle keeps its three corner halves and
//! drops the inverted middle one.

use crate::geometry::{Point, Triangle};

/// Lazily yields the `3^depth` triangles of the gasket over `(p1, p2, p3)`.
pub fn sierpinski_triangles(p1: Point, p2: Point, p3: Point, depth: u32) -> SierpinskiTriangles {
    SierpinskiTriangles {
        stack: vec![(Triangle::new(p1, p2, p3), depth)],
        remaining: 3usize.checked_pow(depth),
    }
}

//        p1
//       /  \
//     m1----m3
//     / \  / \
//   p2---m2---p3
fn corners(triangle: Triangle) -> [Triangle; 3] {
    let [p1, p2, p3] = triangle.vertices();
    let [m1, m2, m3] = triangle.midpoints();
    [
        Triangle::new(p1, m1, m3),
        Triangle::new(m1, p2, m2),
        Triangle::new(m3, m2, p3),
    ]
}

#[derive(Clone, Debug)]
pub struct SierpinskiTriangles {
    stack: Vec<(Triangle, u32)>,
    remaining: Option<usize>,
}

impl Iterator for SierpinskiTriangles {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        while let Some((triangle, depth)) = self.stack.pop() {
            if depth == 0 {
                self.remaining = self.remaining.map(|n| n - 1);
                return Some(triangle);
            }
            self.stack
                .extend(corners(triangle).into_iter().rev().map(|t| (t, depth - 1)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;

    fn base() -> (Point, Point, Point) {
        (point(0.0, -100.0), point(-86.6, 50.0), point(86.6, 50.0))
    }

    #[test]
    fn depth_zero_is_the_input_triangle() {
        let (a, b, c) = base();
        let triangles: Vec<_> = sierpinski_triangles(a, b, c, 0).collect();
        assert_eq!(triangles, vec![Triangle::new(a, b, c)]);
    }

    #[test]
    fn triangle_count_is_a_power_of_three() {
        let (a, b, c) = base();
        for depth in 0..=6 {
            let iter = sierpinski_triangles(a, b, c, depth);
            assert_eq!(iter.size_hint(), (3usize.pow(depth), Some(3usize.pow(depth))));
            assert_eq!(iter.count(), 3usize.pow(depth));
        }
    }

    #[test]
    fn sides_halve_each_level() {
        let a = point(0.0, 0.0);
        let b = point(120.0, 10.0);
        let c = point(30.0, 90.0);
        let original = Triangle::new(a, b, c).side_lengths();
        for depth in 0..=4 {
            let scale = 0.5_f64.powi(depth as i32);
            for triangle in sierpinski_triangles(a, b, c, depth) {
                for (side, full) in triangle.side_lengths().iter().zip(original) {
                    assert!((side - full * scale).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn depth_two_has_nine_quarter_size_triangles() {
        let (a, b, c) = base();
        let original = Triangle::new(a, b, c).side_lengths();
        let triangles: Vec<_> = sierpinski_triangles(a, b, c, 2).collect();
        assert_eq!(triangles.len(), 9);
        for triangle in &triangles {
            for (side, full) in triangle.side_lengths().iter().zip(original) {
                assert!((side - full / 4.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn corner_order_is_stable() {
        let (a, b, c) = base();
        let triangles: Vec<_> = sierpinski_triangles(a, b, c, 1).collect();
        let [m1, m2, m3] = Triangle::new(a, b, c).midpoints();
        assert_eq!(
            triangles,
            vec![
                Triangle::new(a, m1, m3),
                Triangle::new(m1, b, m2),
                Triangle::new(m3, m2, c),
            ]
        );
        let again: Vec<_> = sierpinski_triangles(a, b, c, 1).collect();
        assert_eq!(triangles, again);
    }

    #[test]
    fn center_hole_is_left_out() {
        let (a, b, c) = base();
        let hole = Triangle::new(a, b, c).midpoints();
        for triangle in sierpinski_triangles(a, b, c, 1) {
            assert_ne!(triangle, Triangle(hole));
        }
    }
}
