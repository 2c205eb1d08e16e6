use crate::bindings::{self, SurfacePanel};
use crate::rig::CameraRig;
use wavefield_common::{Color, Viewport};
use wavefield_input::PointerAction;
use wavefield_panel::PanelError;
use wavefield_render::{RenderCommand, RenderView};
use wavefield_scene::{PerspectiveCamera, Preset, PresetKind, Scene, SurfaceUniforms};

/// Errors raised while assembling an application context.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("panel binding failed: {0}")]
    Panel(#[from] PanelError),
}

/// Application state owned by the entry point and lent to the frame loop,
/// the panel and the resize handler.
#[derive(Debug)]
pub struct AppContext {
    preset: PresetKind,
    scene: Scene,
    rig: CameraRig,
    panel: SurfacePanel,
    viewport: Viewport,
    frame: u64,
}

impl AppContext {
    pub fn from_preset(preset: &Preset, viewport: Viewport) -> Result<Self, KernelError> {
        let scene = preset.build_scene();
        let rig = CameraRig::from_mode(preset.camera_mode, &scene.camera);
        let mut panel = bindings::surface_panel(preset.kind)?;
        panel.set_visible(preset.panel_visible);

        let mut ctx = Self {
            preset: preset.kind,
            scene,
            rig,
            panel,
            viewport,
            frame: 0,
        };
        ctx.resize(viewport);
        tracing::info!(
            "context ready: preset={} camera={} panel_visible={}",
            ctx.preset,
            ctx.rig.name(),
            ctx.panel.visible()
        );
        Ok(ctx)
    }

    /// One display-refresh step: publish `elapsed` to the time uniform,
    /// advance the camera, and describe the frame to draw.
    pub fn tick(&mut self, elapsed: f32) -> RenderCommand {
        self.scene.mesh.uniforms.time = elapsed;
        self.rig.step(elapsed, &mut self.scene.camera);
        self.frame += 1;

        RenderCommand {
            frame: self.frame,
            elapsed,
            view: RenderView {
                camera: self.scene.camera,
            },
            model: self.scene.mesh.transform(),
            uniforms: self.scene.mesh.uniforms,
            render_size: self.viewport.render_size(),
            clear_color: self.scene.clear_color,
            background: self.scene.background.clone(),
        }
    }

    /// Sync the camera projection to a new viewport and return the render
    /// target size in physical pixels. Safe to call redundantly.
    pub fn resize(&mut self, viewport: Viewport) -> (u32, u32) {
        self.viewport = viewport;
        self.scene.camera.set_aspect(viewport.aspect());
        let size = viewport.render_size();
        tracing::debug!(
            "resize: {}x{} @ {:.2} -> render {}x{} (pixel ratio {:.2})",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio,
            size.0,
            size.1,
            viewport.pixel_ratio()
        );
        size
    }

    /// Route pointer input to the camera rig. Returns false if ignored.
    pub fn pointer(&mut self, action: PointerAction) -> bool {
        self.rig.handle(action, self.viewport.height)
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel.toggle()
    }

    /// Apply a slider edit through the panel's clamp.
    pub fn edit(&mut self, id: &str, value: f32) -> Result<f32, PanelError> {
        self.panel
            .edit_scalar(id, value, &mut self.scene.mesh.uniforms)
    }

    /// Apply a color-string edit through the panel.
    pub fn edit_color(&mut self, id: &str, text: &str) -> Result<Color, PanelError> {
        self.panel
            .edit_color(id, text, &mut self.scene.mesh.uniforms)
    }

    pub fn draw_panel(&mut self, ctx: &egui::Context) {
        self.panel.show(ctx, &mut self.scene.mesh.uniforms);
    }

    pub fn preset(&self) -> PresetKind {
        self.preset
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.scene.camera
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn panel(&self) -> &SurfacePanel {
        &self.panel
    }

    pub fn uniforms(&self) -> &SurfaceUniforms {
        &self.scene.mesh.uniforms
    }

    /// Direct uniform access, bypassing the panel's clamps.
    pub fn uniforms_mut(&mut self) -> &mut SurfaceUniforms {
        &mut self.scene.mesh.uniforms
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::PI;

    fn water() -> AppContext {
        AppContext::from_preset(&Preset::water(), Viewport::new(800, 600, 1.0)).unwrap()
    }

    fn orbit() -> AppContext {
        AppContext::from_preset(&Preset::orbit(), Viewport::new(800, 600, 1.0)).unwrap()
    }

    #[test]
    fn tick_writes_time_and_counts_frames() {
        let mut ctx = water();
        let cmd = ctx.tick(2.5);
        assert_eq!(cmd.frame, 1);
        assert_eq!(cmd.uniforms.time, 2.5);
        assert_eq!(ctx.uniforms().time, 2.5);
        assert_eq!(ctx.tick(2.6).frame, 2);
        assert_eq!(ctx.frame_count(), 2);
    }

    #[test]
    fn scripted_camera_follows_path_over_a_period() {
        let mut ctx = water();
        let start = ctx.tick(0.0).view.eye();
        let path = wavefield_scene::ScriptedPath::default();
        assert_eq!(start, Vec3::new(0.0, path.height, path.radius));

        let half = ctx.tick(PI / 0.17).view.eye();
        assert!((half - Vec3::new(0.0, path.height, -path.radius)).length() < 1e-4);

        let full = ctx.tick(2.0 * PI / 0.17).view.eye();
        assert!((full - start).length() < 1e-4);
    }

    #[test]
    fn scripted_target_matches_closed_form() {
        let mut ctx = water();
        for t in [0.0, PI / 2.0, PI] {
            let target = ctx.tick(t).view.target();
            let expected = Vec3::new(t.cos(), 0.5 * t.sin(), t.sin());
            assert_eq!(target, expected);
        }
    }

    #[test]
    fn resize_updates_aspect_and_caps_pixel_ratio() {
        let mut ctx = orbit();
        assert!((ctx.camera().aspect - 800.0 / 600.0).abs() < 1e-6);

        let size = ctx.resize(Viewport::new(1200, 900, 3.0));
        assert!((ctx.camera().aspect - 1200.0 / 900.0).abs() < 1e-6);
        assert_eq!(ctx.viewport().pixel_ratio(), 2.0);
        assert_eq!(size, (2400, 1800));

        // Idempotent
        let again = ctx.resize(Viewport::new(1200, 900, 3.0));
        assert_eq!(again, size);
        assert!((ctx.camera().aspect - 1200.0 / 900.0).abs() < 1e-6);
        assert_eq!(ctx.tick(0.0).render_size, (2400, 1800));
    }

    #[test]
    fn resize_leaves_uniforms_alone() {
        let mut ctx = water();
        let before = *ctx.uniforms();
        ctx.resize(Viewport::new(320, 200, 2.0));
        assert_eq!(*ctx.uniforms(), before);
    }

    #[test]
    fn drawing_the_panel_leaves_uniforms_alone() {
        let mut ctx = orbit();
        assert!(ctx.panel().visible());
        let before = *ctx.uniforms();
        let egui_ctx = egui::Context::default();
        for _ in 0..3 {
            let _ = egui_ctx.run(egui::RawInput::default(), |c| ctx.draw_panel(c));
        }
        assert_eq!(*ctx.uniforms(), before);
    }

    #[test]
    fn edit_on_the_grid_is_exact() {
        let mut ctx = orbit();
        assert_eq!(ctx.edit("big_waves_elevation", 0.2).unwrap(), 0.2);
        assert_eq!(ctx.uniforms().big_waves_elevation, 0.2);
    }

    #[test]
    fn panel_edit_out_of_range_is_clamped() {
        let mut ctx = orbit();
        assert_eq!(ctx.edit("big_waves_elevation", 3.0).unwrap(), 1.0);
        assert_eq!(ctx.uniforms().big_waves_elevation, 1.0);
        assert_eq!(ctx.edit("big_waves_speed", -1.0).unwrap(), 0.0);
        assert_eq!(ctx.uniforms().big_waves_speed, 0.0);
    }

    #[test]
    fn color_edit_reaches_uniforms() {
        let mut ctx = water();
        ctx.edit_color("surface_color", "#ffffff").unwrap();
        assert_eq!(ctx.uniforms().surface_color, Color::WHITE);
        assert!(ctx.edit_color("surface_color", "#gg0000").is_err());
    }

    #[test]
    fn toggling_panel_keeps_uniforms() {
        let mut ctx = water();
        assert!(!ctx.panel().visible());
        let before = *ctx.uniforms();
        assert!(ctx.toggle_panel());
        assert!(!ctx.toggle_panel());
        assert_eq!(*ctx.uniforms(), before);
    }

    #[test]
    fn orbit_context_accepts_pointer_and_scripted_does_not() {
        let mut o = orbit();
        let start = o.camera().position;
        assert!(o.pointer(PointerAction::Rotate { dx: 40.0, dy: 0.0 }));
        o.tick(0.016);
        assert_ne!(o.camera().position, start);

        let mut w = water();
        assert!(!w.pointer(PointerAction::Zoom { delta: 1.0 }));
    }

    #[test]
    fn orbit_camera_is_still_without_input() {
        let mut ctx = orbit();
        let start = ctx.camera().position;
        for i in 0..10 {
            ctx.tick(i as f32 * 0.016);
        }
        assert_eq!(ctx.camera().position, start);
        assert_eq!(ctx.camera().target, Vec3::ZERO);
    }

    #[test]
    fn direct_edits_survive_tick_except_time() {
        let mut ctx = water();
        ctx.uniforms_mut().small_waves_speed = 9.0;
        ctx.uniforms_mut().time = 100.0;
        let cmd = ctx.tick(1.0);
        assert_eq!(cmd.uniforms.small_waves_speed, 9.0);
        assert_eq!(cmd.uniforms.time, 1.0);
    }

    #[test]
    fn identical_inputs_give_identical_frames() {
        let mut a = water();
        let mut b = water();
        for t in [0.0, 0.5, 7.25] {
            assert_eq!(a.tick(t), b.tick(t));
        }
    }
}
