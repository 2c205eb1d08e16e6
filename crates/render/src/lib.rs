//! Rendering Adapter: renderer-agnostic frame description.
//!
//! # Invariants
//! - Renderers consume a [`RenderCommand`] and never mutate scene state.
//! - A command is self-contained: camera, transform and uniforms are copies.
//!
//! The GPU backend lives in `wavefield-render-wgpu`; [`DebugTextRenderer`]
//! gives the same frame a textual form for the CLI and for tests.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderCommand, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "wavefield-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
