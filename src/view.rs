mod painter;

use crate::{
    controller::{Controller, FractalState},
    fractal::{Curve, FractalKind},
    layout,
    render::{self, Color, Style},
};
use derivative::Derivative;
use eframe::egui::{containers::*, epaint::Mesh, *};
pub use painter::PainterCanvas;

/// Inputs the painted shapes depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Key {
    state: FractalState,
    rect: Rect,
    style: Style,
    pixels_per_point: f32,
}

/// Shapes of the last painted frame, regenerated only when the key changes.
#[derive(Debug, Default)]
struct ShapeCache {
    key: Option<Key>,
    shapes: Vec<Shape>,
}

impl ShapeCache {
    /// `upload` receives the rasterized fill and returns the texture to
    /// draw it with.
    fn shapes(&mut self, key: Key, upload: impl FnOnce(ColorImage) -> TextureId) -> &[Shape] {
        if self.key == Some(key) {
            return &self.shapes;
        }
        let base = layout::fit(
            f64::from(key.rect.left()),
            f64::from(key.rect.top()),
            f64::from(key.rect.width()),
            f64::from(key.rect.height()),
        );
        let curve = Curve::generate(key.state.kind, &base, key.state.depth);
        let mut canvas = PainterCanvas::new(key.rect, key.pixels_per_point);
        render::paint(&curve, key.state.fill, &mut canvas, &key.style);
        let (fill, strokes) = canvas.finish();

        self.shapes.clear();
        if let Some(image) = fill {
            let mut mesh = Mesh::with_texture(upload(image));
            mesh.add_rect_with_uv(
                key.rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
            self.shapes.push(Shape::mesh(mesh));
        }
        self.shapes.extend(strokes);
        tracing::debug!(state = ?key.state, shapes = self.shapes.len(), "repainted fractal");
        self.key = Some(key);
        &self.shapes
    }
}

/// Paints the controller's fractal into the available rect, with a
/// settings popup in the corner.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct FractalView {
    cache: ShapeCache,
    #[derivative(Debug = "ignore")]
    texture: Option<TextureHandle>,
}

impl FractalView {
    pub fn ui(&mut self, ui: &mut Ui, controller: &mut Controller) {
        let painter = Painter::new(
            ui.ctx().clone(),
            ui.layer_id(),
            ui.available_rect_before_wrap(),
        );
        let rect = painter.clip_rect();
        ui.expand_to_include_rect(rect);

        Frame::popup(ui.style())
            .stroke(Stroke::none())
            .show(ui, |ui| {
                ui.set_max_width(250.0);
                CollapsingHeader::new("Settings")
                    .default_open(true)
                    .show(ui, |ui| Self::options_ui(ui, controller));
            });

        let key = Key {
            state: *controller.state(),
            rect,
            style: Style {
                stroke: if ui.visuals().dark_mode {
                    Color::gray(180)
                } else {
                    Color::gray(0)
                },
                ..Style::default()
            },
            pixels_per_point: ui.ctx().pixels_per_point(),
        };
        let ctx = ui.ctx().clone();
        let texture = &mut self.texture;
        let shapes = self.cache.shapes(key, |image| {
            if let Some(handle) = texture.as_mut() {
                handle.set(image);
                return handle.id();
            }
            let handle = ctx.load_texture("fractal-fill", image);
            let id = handle.id();
            *texture = Some(handle);
            id
        });
        painter.extend(shapes.to_vec());
    }

    fn options_ui(ui: &mut Ui, controller: &mut Controller) {
        let state = *controller.state();
        ui.label(controller.level_text());
        ui.label(match state.kind {
            FractalKind::Koch => format!("Painted line count: {}", state.primitive_count()),
            FractalKind::Sierpinski => {
                format!("Painted triangle count: {}", state.primitive_count())
            }
        });
        ui.horizontal(|ui| {
            ui.label("Depth :");
            if ui.button("+").clicked() {
                controller.increase();
            }
            if ui.button("-").clicked() {
                controller.decrease();
            }
        });
        if ui.button(controller.fill_text()).clicked() {
            controller.toggle_fill();
        }
        if ui.button("reset").clicked() {
            controller.reset();
        }
    }
}
