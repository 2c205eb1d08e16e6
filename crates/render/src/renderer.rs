use glam::{Mat4, Vec2, Vec3};
use std::fmt::Write;
use std::path::PathBuf;
use wavefield_common::Color;
use wavefield_scene::{PerspectiveCamera, SurfaceUniforms, wave};

/// Camera/view configuration for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderView {
    pub camera: PerspectiveCamera,
}

impl RenderView {
    pub fn eye(&self) -> Vec3 {
        self.camera.position
    }

    pub fn target(&self) -> Vec3 {
        self.camera.target
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.view_projection()
    }
}

/// Everything a backend needs to draw one frame of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    /// Frames produced so far, starting at 1 for the first tick.
    pub frame: u64,
    pub elapsed: f32,
    pub view: RenderView,
    /// Model transform of the surface mesh.
    pub model: Mat4,
    pub uniforms: SurfaceUniforms,
    /// Output size in physical pixels (pixel-ratio capped).
    pub render_size: (u32, u32),
    pub clear_color: Color,
    pub background: Option<PathBuf>,
}

/// Renderer-agnostic interface.
///
/// The renderer reads a frame command and produces output. It never writes
/// back into the scene.
pub trait Renderer {
    type Output;

    fn render(&self, frame: &RenderCommand) -> Self::Output;
}

/// Produces a human-readable description of a frame.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Also list every uniform, not just the time.
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &RenderCommand) -> String {
        let mut out = String::new();
        let eye = frame.view.eye();
        let target = frame.view.target();
        let center = wave::elevation(Vec2::ZERO, &frame.uniforms);

        let _ = writeln!(
            out,
            "=== Frame {} (t={:.3}s, {}x{}) ===",
            frame.frame, frame.elapsed, frame.render_size.0, frame.render_size.1
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.3}, {:.3}, {:.3}) target=({:.3}, {:.3}, {:.3}) aspect={:.3}",
            eye.x, eye.y, eye.z, target.x, target.y, target.z, frame.view.camera.aspect
        );
        let _ = writeln!(
            out,
            "Surface: center elevation={:.4} color={}",
            center,
            wave::surface_color(center, &frame.uniforms)
        );
        if let Some(bg) = &frame.background {
            let _ = writeln!(out, "Background: {}", bg.display());
        }
        if self.verbose {
            for (name, value) in frame.uniforms.entries() {
                let _ = writeln!(out, "  {name} = {value}");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> RenderCommand {
        RenderCommand {
            frame: 3,
            elapsed: 1.5,
            view: RenderView::default(),
            model: Mat4::IDENTITY,
            uniforms: SurfaceUniforms::default(),
            render_size: (800, 600),
            clear_color: Color::BLACK,
            background: None,
        }
    }

    #[test]
    fn debug_renderer_reports_frame() {
        let output = DebugTextRenderer::new().render(&command());
        assert!(output.contains("Frame 3"));
        assert!(output.contains("t=1.500s"));
        assert!(output.contains("800x600"));
        assert!(!output.contains("color_offset"));
    }

    #[test]
    fn verbose_lists_uniforms_and_background() {
        let mut cmd = command();
        cmd.background = Some(PathBuf::from("sky.png"));
        let output = DebugTextRenderer::verbose().render(&cmd);
        assert!(output.contains("color_offset = 0.080"));
        assert!(output.contains("Background: sky.png"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.target(), Vec3::ZERO);
        assert!(!view.view_proj().col(0).x.is_nan());
    }
}
