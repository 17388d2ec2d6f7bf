//! Depth, kind and fill selection driven by the UI.

use crate::fractal::FractalKind;
use derivative::Derivative;

pub const DEFAULT_DEPTH: u32 = 0;
/// 4^6 segments per snowflake edge.
pub const MAX_DEPTH: u32 = 6;

#[derive(Derivative, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derivative(Default)]
pub struct FractalState {
    #[derivative(Default(value = "DEFAULT_DEPTH"))]
    pub depth: u32,
    pub kind: FractalKind,
    pub fill: bool,
}

impl FractalState {
    pub fn primitive_count(&self) -> usize {
        self.kind.primitive_count(self.depth)
    }
}

/// Owns the [`FractalState`] and remembers whether it needs repainting.
#[derive(Derivative, Clone, Debug)]
#[derivative(Default)]
pub struct Controller {
    state: FractalState,
    // the first frame always draws
    #[derivative(Default(value = "true"))]
    redraw: bool,
}

impl Controller {
    pub fn state(&self) -> &FractalState {
        &self.state
    }

    pub fn increase(&mut self) {
        if self.state.depth < MAX_DEPTH {
            self.state.depth += 1;
        }
        self.request_redraw();
    }

    pub fn decrease(&mut self) {
        self.state.depth = self.state.depth.saturating_sub(1);
        self.request_redraw();
    }

    pub fn set_kind(&mut self, kind: FractalKind) {
        self.state.kind = kind;
        self.request_redraw();
    }

    pub fn toggle_fill(&mut self) {
        self.state.fill = !self.state.fill;
        self.request_redraw();
    }

    pub fn reset(&mut self) {
        self.state = FractalState::default();
        self.request_redraw();
    }

    /// Returns the pending redraw request and clears it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    fn request_redraw(&mut self) {
        tracing::debug!(state = ?self.state, "state changed");
        self.redraw = true;
    }

    pub fn level_text(&self) -> String {
        format!("Level: {}", self.state.depth)
    }

    pub fn fill_text(&self) -> String {
        format!("Toggle Fill: {}", if self.state.fill { "ON" } else { "OFF" })
    }
}
