//! Plain 2D value types shared by the generators and the renderer.

use std::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub const fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

impl Point {
    /// Rotate around the origin by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        point(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    pub fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        point(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        point(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        point(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    /// Equilateral triangle around `center`, apex up in y-down coordinates.
    ///
    /// Vertices run top, bottom-right, bottom-left. With the Koch rotation
    /// convention this winding makes every bump point away from the center.
    pub fn equilateral(center: Point, circumradius: f64) -> Self {
        let half_side = circumradius * 3.0_f64.sqrt() / 2.0;
        let below = circumradius / 2.0;
        Self([
            center + point(0.0, -circumradius),
            center + point(half_side, below),
            center + point(-half_side, below),
        ])
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.0
    }

    /// Edges in cyclic order: (a, b), (b, c), (c, a).
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.0;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Midpoints of (a, b), (b, c), (c, a).
    pub fn midpoints(&self) -> [Point; 3] {
        let [a, b, c] = self.0;
        [a.midpoint(b), b.midpoint(c), c.midpoint(a)]
    }

    pub fn side_lengths(&self) -> [f64; 3] {
        let [ab, bc, ca] = self.edges();
        [ab.length(), bc.length(), ca.length()]
    }

    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.0;
        (a + b + c) / 3.0
    }
}
