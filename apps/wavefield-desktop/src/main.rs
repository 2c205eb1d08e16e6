use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wavefield_common::Viewport;
use wavefield_input::PointerAction;
use wavefield_kernel::{AppContext, Clock};
use wavefield_render_wgpu::WgpuRenderer;
use wavefield_scene::{Preset, PresetKind};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "wavefield-desktop", about = "Animated wave surface viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene preset to show
    #[arg(short, long, default_value = "water")]
    preset: PresetKind,

    /// Image drawn behind the surface
    #[arg(short, long)]
    background: Option<PathBuf>,
}

/// Window, device and the two renderers. Present once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

/// Logical viewport for a physical window size.
fn viewport_for(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical: LogicalSize<u32> = size.to_logical(scale_factor);
    Viewport::new(logical.width, logical.height, scale_factor as f32)
}

#[derive(Default)]
struct DragState {
    dragging: bool,
    last: Option<(f64, f64)>,
}

impl DragState {
    /// A press only starts a drag off the panel. A release always ends it.
    fn left_button(&mut self, state: ElementState, over_panel: bool) {
        match state {
            ElementState::Pressed if !over_panel => self.dragging = true,
            ElementState::Pressed => {}
            ElementState::Released => {
                self.dragging = false;
                self.last = None;
            }
        }
    }
}

struct GpuApp {
    ctx: AppContext,
    clock: Clock,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    drag: DragState,
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            clock: Clock::start(),
            gpu: None,
            egui_ctx: EguiContext::default(),
            drag: DragState::default(),
            error: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let attrs = Window::default_attributes()
            .with_title(format!("Wavefield ({})", self.ctx.preset()))
            .with_inner_size(LogicalSize::new(1280u32, 720));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no compatible GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("wavefield_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("surface reports no supported formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let render_size = self
            .ctx
            .resize(viewport_for(size, window.scale_factor()));
        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            render_size,
            self.ctx.scene(),
        )?;

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend, surface {:?}",
            adapter.get_info().backend.to_str(),
            surface_format
        );

        Ok(Gpu {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.config.width = new_size.width.max(1);
        gpu.config.height = new_size.height.max(1);
        gpu.surface.configure(&gpu.device, &gpu.config);

        let render_size = self
            .ctx
            .resize(viewport_for(new_size, gpu.window.scale_factor()));
        gpu.renderer.resize(&gpu.device, render_size);
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::KeyH => {
                let visible = self.ctx.toggle_panel();
                tracing::info!("panel {}", if visible { "shown" } else { "hidden" });
            }
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }

    fn cursor_moved(&mut self, x: f64, y: f64) {
        let scale = self
            .gpu
            .as_ref()
            .map_or(1.0, |gpu| gpu.window.scale_factor());
        let pos = (x / scale, y / scale);
        if self.drag.dragging {
            if let Some((lx, ly)) = self.drag.last {
                self.ctx.pointer(PointerAction::Rotate {
                    dx: (pos.0 - lx) as f32,
                    dy: (pos.1 - ly) as f32,
                });
            }
        }
        self.drag.last = Some(pos);
    }

    fn redraw(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let frame = self.ctx.tick(self.clock.elapsed_secs());

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.renderer.render(&gpu.device, &gpu.queue, &view, &frame);

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.ctx.draw_panel(ctx);
        });
        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match self.init_gpu(event_loop) {
            Ok(gpu) => {
                gpu.window.request_redraw();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let consumed = match &mut self.gpu {
            Some(gpu) => gpu.egui_winit.on_window_event(&gpu.window, &event).consumed,
            None => false,
        };
        if let WindowEvent::MouseInput {
            button: MouseButton::Left,
            state,
            ..
        } = event
        {
            self.drag.left_button(state, consumed);
        }
        if consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, key);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.drag = DragState::default();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // Wheel up moves the camera toward the target
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                self.ctx.pointer(PointerAction::Zoom { delta: -lines });
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    tracing::info!("wavefield-desktop starting with preset {}", cli.preset);

    let mut preset = Preset::from_kind(cli.preset);
    if let Some(path) = cli.background {
        preset = preset.with_background(path);
    }
    let ctx = AppContext::from_preset(&preset, Viewport::default())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(ctx);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_over_panel_ends_drag() {
        let mut drag = DragState::default();
        drag.left_button(ElementState::Pressed, false);
        drag.last = Some((10.0, 10.0));
        assert!(drag.dragging);

        drag.left_button(ElementState::Released, true);
        assert!(!drag.dragging);
        assert!(drag.last.is_none());
    }

    #[test]
    fn press_over_panel_does_not_start_drag() {
        let mut drag = DragState::default();
        drag.left_button(ElementState::Pressed, true);
        assert!(!drag.dragging);
    }

    #[test]
    fn viewport_uses_logical_size() {
        let viewport = viewport_for(PhysicalSize::new(1600, 1200), 2.0);
        assert_eq!(viewport, Viewport::new(800, 600, 2.0));
    }
}
