mod koch;
mod sierpinski;

use crate::geometry::{Point, Triangle};
use std::{fmt, str::FromStr};

pub use koch::{koch_points, koch_segments, snowflake, KochSegments};
pub use sierpinski::{sierpinski_triangles, SierpinskiTriangles};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FractalKind {
    Koch,
    Sierpinski,
}

impl FractalKind {
    pub const ALL: [FractalKind; 2] = [FractalKind::Koch, FractalKind::Sierpinski];

    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Koch => "Koch Snowflake",
            FractalKind::Sierpinski => "Sierpinski Triangle",
        }
    }

    /// Number of primitives painted at `depth`: segments for the
    /// snowflake, triangles for the gasket.
    pub fn primitive_count(self, depth: u32) -> usize {
        match self {
            FractalKind::Koch => 4usize.saturating_pow(depth).saturating_mul(3),
            FractalKind::Sierpinski => 3usize.saturating_pow(depth),
        }
    }
}

impl Default for FractalKind {
    fn default() -> Self {
        FractalKind::Koch
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FractalKind::Koch => "koch",
            FractalKind::Sierpinski => "sierpinski",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal kind {:?}, expected \"koch\" or \"sierpinski\"", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for FractalKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "koch" => Ok(FractalKind::Koch),
            "sierpinski" => Ok(FractalKind::Sierpinski),
            _ => Err(ParseKindError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubPath {
    pub points: Vec<Point>,
    /// Joins the last point back to the first.
    pub closed: bool,
}

impl SubPath {
    pub fn edge_count(&self) -> usize {
        match (self.closed, self.points.len()) {
            (_, 0 | 1) => 0,
            (true, n) => n,
            (false, n) => n - 1,
        }
    }
}

/// Everything one fractal paints, as a list of sub-paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    pub paths: Vec<SubPath>,
}

impl Curve {
    pub fn generate(kind: FractalKind, base: &Triangle, depth: u32) -> Self {
        let paths = match kind {
            FractalKind::Koch => {
                let mut points = snowflake(base, depth);
                // the repeated start vertex becomes the closing edge
                points.pop();
                vec![SubPath {
                    points,
                    closed: true,
                }]
            }
            FractalKind::Sierpinski => {
                let [a, b, c] = base.vertices();
                sierpinski_triangles(a, b, c, depth)
                    .map(|t| SubPath {
                        points: t.vertices().to_vec(),
                        closed: true,
                    })
                    .collect()
            }
        };
        tracing::debug!(%kind, depth, paths = paths.len(), "generated curve");
        Self { paths }
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.paths.iter().flat_map(|p| p.points.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.paths.iter().map(SubPath::edge_count).sum()
    }
}
