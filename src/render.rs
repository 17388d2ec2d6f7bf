//! The drawing-surface contract and the routine that feeds a curve into it.

use crate::{
    controller::FractalState,
    fractal::Curve,
    geometry::{Point, Triangle},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(l: u8) -> Self {
        Self::rgba(l, l, l, 255)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub stroke: Color,
    pub stroke_width: f32,
    pub fill: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::gray(0),
            stroke_width: 1.0,
            // rgba(0, 150, 255, 0.3)
            fill: Color::rgba(0, 150, 255, 77),
        }
    }
}

/// An immediate-mode path surface.
///
/// A path is built with `move_to`/`line_to`, may hold several sub-paths,
/// and is painted by `fill` and `stroke`. `begin_path` discards it.
pub trait Canvas {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Joins the current sub-path back to its first point.
    fn close_path(&mut self);
    fn fill(&mut self, color: Color);
    fn stroke(&mut self, color: Color, width: f32);
}

/// Traces `curve` as the current path of `canvas`.
pub fn trace(curve: &Curve, canvas: &mut dyn Canvas) {
    canvas.begin_path();
    for path in &curve.paths {
        let mut points = path.points.iter();
        if let Some(&first) = points.next() {
            canvas.move_to(first);
            points.for_each(|&p| canvas.line_to(p));
            if path.closed {
                canvas.close_path();
            }
        }
    }
}

/// Generates the fractal selected by `state` over `base` and paints it.
pub fn draw(state: &FractalState, base: &Triangle, canvas: &mut dyn Canvas, style: &Style) {
    let curve = Curve::generate(state.kind, base, state.depth);
    paint(&curve, state.fill, canvas, style);
}

/// Paints an already generated curve, filling first so the outline stays
/// on top.
pub fn paint(curve: &Curve, fill: bool, canvas: &mut dyn Canvas, style: &Style) {
    trace(curve, canvas);
    if fill {
        canvas.fill(style.fill);
    }
    canvas.stroke(style.stroke, style.stroke_width);
}
