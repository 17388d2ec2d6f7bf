#![warn(clippy::all, rust_2018_idioms)]

//! Koch snowflake and Sierpiński triangle generators, and an egui viewer
//! for them.
//!
//! The generators in [`fractal`] are plain iterators over [`geometry`]
//! values and do not touch the GUI; [`render::draw`] feeds their output
//! into any [`render::Canvas`].

mod app;
pub mod controller;
pub mod fractal;
pub mod geometry;
pub mod layout;
pub mod render;
mod view;

pub use app::FractalApp;

/// Installs the global `tracing` subscriber for the current platform.
pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        } else {
            // already installed, e.g. by a test harness
            let _ = tracing_subscriber::fmt::try_init();
        }
    }
}

// ----------------------------------------------------------------------------
// When compiling for web:

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::{self, prelude::*};

/// This is the entry-point for all the web-assembly.
/// This is called once from the HTML.
/// It loads the app, installs some callbacks, then returns.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), eframe::wasm_bindgen::JsValue> {
    init_logging();
    eframe::start_web(canvas_id, Box::new(|cc| Box::new(FractalApp::new(cc))))
}
