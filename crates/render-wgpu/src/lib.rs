//! wgpu render backend for the wave surface.
//!
//! Draws the background (texture or clear color) and the displaced plane
//! into an offscreen target sized by the capped pixel ratio, then blits
//! that target onto the swapchain.
//!
//! # Invariants
//! - Renderer never mutates scene state; it only reads `RenderCommand`s.
//! - The WGSL wave function matches `wavefield_scene::wave` term for term.
//! - Uniform structs match WGSL layout rules byte for byte.

mod background;
mod gpu;
mod shaders;
mod uniforms;

pub use background::{BackgroundImage, RenderError};
pub use gpu::WgpuRenderer;
pub use uniforms::{CameraUniforms, SurfaceVertex, WaveUniforms, surface_vertices};

pub fn crate_info() -> &'static str {
    "wavefield-render-wgpu v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("wgpu"));
    }
}
