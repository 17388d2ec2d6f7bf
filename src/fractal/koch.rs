//! Koch curve: every segment is replaced by four, the middle third
//! becoming two sides of an equilateral bump.

use crate::geometry::{Point, Segment, Triangle};
use std::f64::consts::FRAC_PI_3;

/// Turn applied to the middle third to find the apex of the bump.
///
/// For `(0, 0) -> (300, 0)` the apex lands at `(150, -86.6)`.
const APEX_TURN: f64 = -FRAC_PI_3;

/// Lazily yields the `4^depth` segments of the Koch curve from `a` to `b`.
pub fn koch_segments(a: Point, b: Point, depth: u32) -> KochSegments {
    KochSegments {
        stack: vec![(Segment::new(a, b), depth)],
        remaining: 4usize.checked_pow(depth),
    }
}

/// The Koch curve from `a` to `b` as a polyline: `a` followed by every
/// segment end.
pub fn koch_points(a: Point, b: Point, depth: u32) -> Vec<Point> {
    let segments = koch_segments(a, b, depth);
    let mut points = Vec::with_capacity(segments.size_hint().1.unwrap_or(0).saturating_add(1));
    points.push(a);
    points.extend(segments.map(|s| s.end));
    points
}

/// Closed snowflake path over the edges `(a, b)`, `(b, c)`, `(c, a)`.
///
/// The first vertex is repeated at the end.
pub fn snowflake(triangle: &Triangle, depth: u32) -> Vec<Point> {
    let [a, ..] = triangle.vertices();
    let per_edge = 4usize.checked_pow(depth).unwrap_or(0);
    let mut points = Vec::with_capacity(per_edge.saturating_mul(3).saturating_add(1));
    points.push(a);
    for edge in triangle.edges() {
        points.extend(koch_segments(edge.start, edge.end, depth).map(|s| s.end));
    }
    tracing::debug!(depth, len = points.len(), "koch snowflake");
    points
}

//   s---l\   /r---e
//         \ /
//          m
fn subdivide(segment: Segment) -> [Segment; 4] {
    let Segment { start, end } = segment;
    let l = start.lerp(end, 1.0 / 3.0);
    let r = start.lerp(end, 2.0 / 3.0);
    let m = l + (r - l).rotate(APEX_TURN);
    [
        Segment::new(start, l),
        Segment::new(l, m),
        Segment::new(m, r),
        Segment::new(r, end),
    ]
}

/// Depth-first iterator over a Koch curve.
///
/// Pending work lives on an explicit stack of `(segment, remaining depth)`,
/// so deep curves never grow the call stack.
#[derive(Clone, Debug)]
pub struct KochSegments {
    stack: Vec<(Segment, u32)>,
    // `None` once the count no longer fits in a usize.
    remaining: Option<usize>,
}

impl Iterator for KochSegments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while let Some((segment, depth)) = self.stack.pop() {
            if depth == 0 {
                self.remaining = self.remaining.map(|n| n - 1);
                return Some(segment);
            }
            // reversed, so (start, l) is popped first
            self.stack
                .extend(subdivide(segment).into_iter().rev().map(|s| (s, depth - 1)));
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
