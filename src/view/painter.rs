use crate::{
    geometry::Point,
    render::{Canvas, Color},
};
use agg_rust::{
    basics::FillingRule,
    color::Rgba8,
    pixfmt_rgba::PixfmtRgba32,
    rasterizer_scanline_aa::RasterizerScanlineAa,
    renderer_base::RendererBase,
    renderer_scanline::render_scanlines_aa_solid,
    rendering_buffer::RowAccessor,
    scanline_u::ScanlineU8,
};
use eframe::egui::{pos2, Color32, ColorImage, Pos2, Rect, Shape, Stroke};

const BPP: usize = 4;

#[derive(Debug, Default)]
struct Contour {
    points: Vec<Point>,
    closed: bool,
}

/// RGBA buffer the fills are rasterized into, in device pixels.
#[derive(Debug)]
struct Layer {
    width: usize,
    height: usize,
    // transparent black, so blended pixels come out premultiplied
    buf: Vec<u8>,
}

impl Layer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buf: vec![0; width * height * BPP],
        }
    }

    fn into_image(self) -> ColorImage {
        ColorImage {
            size: [self.width, self.height],
            pixels: self
                .buf
                .chunks_exact(BPP)
                .map(|p| Color32::from_rgba_premultiplied(p[0], p[1], p[2], p[3]))
                .collect(),
        }
    }
}

/// [`Canvas`] that records egui shapes for `rect`.
///
/// Strokes become line shapes. Fills are rasterized with anti-aliasing and
/// the non-zero winding rule into one image covering `rect`, returned by
/// [`PainterCanvas::finish`] for the caller to upload as a texture.
#[derive(Debug)]
pub struct PainterCanvas {
    rect: Rect,
    pixels_per_point: f32,
    contours: Vec<Contour>,
    shapes: Vec<Shape>,
    layer: Option<Layer>,
}

fn to_pos2(p: Point) -> Pos2 {
    pos2(p.x as f32, p.y as f32)
}

fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl PainterCanvas {
    pub fn new(rect: Rect, pixels_per_point: f32) -> Self {
        Self {
            rect,
            pixels_per_point,
            contours: Vec::new(),
            shapes: Vec::new(),
            layer: None,
        }
    }

    /// The fill image (if anything was filled) and the stroke shapes.
    pub fn finish(self) -> (Option<ColorImage>, Vec<Shape>) {
        (self.layer.map(Layer::into_image), self.shapes)
    }

    fn current(&mut self) -> Option<&mut Contour> {
        self.contours.last_mut().filter(|c| !c.closed)
    }

    fn layer(&mut self) -> Option<&mut Layer> {
        let width = (self.rect.width() * self.pixels_per_point).round();
        let height = (self.rect.height() * self.pixels_per_point).round();
        if !(width >= 1.0 && height >= 1.0) {
            return None;
        }
        Some(
            self.layer
                .get_or_insert_with(|| Layer::new(width as usize, height as usize)),
        )
    }
}

impl Canvas for PainterCanvas {
    fn begin_path(&mut self) {
        self.contours.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.contours.push(Contour {
            points: vec![p],
            closed: false,
        });
    }

    fn line_to(&mut self, p: Point) {
        if let Some(contour) = self.current() {
            contour.points.push(p);
            return;
        }
        // after close_path a new sub-path starts where the last one began
        let start = self.contours.last().and_then(|c| c.points.first().copied());
        self.contours.push(Contour {
            points: start.into_iter().chain([p]).collect(),
            closed: false,
        });
    }

    fn close_path(&mut self) {
        if let Some(contour) = self.current() {
            contour.closed = true;
        }
    }

    fn fill(&mut self, color: Color) {
        let origin = self.rect.min;
        let scale = f64::from(self.pixels_per_point);
        let to_pixels = |p: Point| {
            (
                (p.x - f64::from(origin.x)) * scale,
                (p.y - f64::from(origin.y)) * scale,
            )
        };

        let (width, height) = match self.layer() {
            Some(layer) => (layer.width as u32, layer.height as u32),
            None => return,
        };

        let mut ras = RasterizerScanlineAa::new();
        ras.filling_rule(FillingRule::NonZero);
        ras.clip_box(0.0, 0.0, f64::from(width), f64::from(height));
        for contour in &self.contours {
            let mut points = contour.points.iter().map(|&p| to_pixels(p));
            if let Some((x, y)) = points.next() {
                ras.move_to_d(x, y);
                points.for_each(|(x, y)| ras.line_to_d(x, y));
                ras.close_polygon();
            }
        }

        let layer = match self.layer.as_mut() {
            Some(layer) => layer,
            None => return,
        };
        let mut rbuf = RowAccessor::new();
        // SAFETY: `buf` holds `height` rows of `width * BPP` bytes, is not
        // resized, and outlives `rbuf`, which is dropped at the end of this
        // function.
        unsafe {
            rbuf.attach(
                layer.buf.as_mut_ptr(),
                width,
                height,
                (width as usize * BPP) as i32,
            );
        }
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut rbuf));
        let mut sl = ScanlineU8::new();
        let color = Rgba8::new(
            u32::from(color.r),
            u32::from(color.g),
            u32::from(color.b),
            u32::from(color.a),
        );
        render_scanlines_aa_solid(&mut ras, &mut sl, &mut ren, &color);
        tracing::debug!(width, height, contours = self.contours.len(), "rasterized fill");
    }

    fn stroke(&mut self, color: Color, width: f32) {
        let stroke = Stroke::new(width, to_color32(color));
        for contour in &self.contours {
            let points: Vec<Pos2> = contour.points.iter().copied().map(to_pos2).collect();
            if points.len() < 2 {
                continue;
            }
            self.shapes.push(if contour.closed {
                Shape::closed_line(points, stroke)
            } else {
                Shape::line(points, stroke)
            });
        }
    }
}
