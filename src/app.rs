//! This module define main app logic

use crate::{controller::Controller, fractal::FractalKind, view::FractalView};
use eframe::{egui, epi};

#[derive(Debug, Default)]
pub struct FractalApp {
    controller: Controller,
    view: FractalView,
}

impl FractalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        tracing::info!("fractal viewer started");
        Self::default()
    }
}

impl epi::App for FractalApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_dark_light_mode_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        frame.quit();
                    }
                });
                let selected = self.controller.state().kind;
                for kind in FractalKind::ALL {
                    if ui.selectable_label(kind == selected, kind.name()).clicked() {
                        self.controller.set_kind(kind);
                    }
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::dark_canvas(ui.style())
                .show(ui, |ui| self.view.ui(ui, &mut self.controller));
        });
        if self.controller.take_redraw() {
            ctx.request_repaint();
        }
    }
}
