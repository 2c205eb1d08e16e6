use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use glam::Vec2;
use tracing_subscriber::EnvFilter;
use wavefield_common::{Color, Viewport};
use wavefield_kernel::{AppContext, bindings, fixed_timesteps, run_headless};
use wavefield_panel::Control;
use wavefield_render::DebugTextRenderer;
use wavefield_scene::{Preset, PresetKind, SurfaceUniforms, UniformValue, wave};

#[derive(Parser)]
#[command(name = "wavefield-cli", about = "Inspect and simulate wavefield presets")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// List the available presets
    Presets,
    /// Print a preset's scene parameters and panel fields
    Dump {
        #[arg(short, long, default_value = "water")]
        preset: PresetKind,
        /// Emit the preset as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the wave function at one point
    Sample {
        #[arg(short, long, default_value = "water")]
        preset: PresetKind,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: f32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        z: f32,
        #[arg(long, default_value = "0")]
        time: f32,
        /// Override a uniform, e.g. `small_waves_iterations=2` or
        /// `big_waves_frequency=3,1.5` or `surface_color=#ffffff`
        #[arg(long = "set", value_name = "NAME=VALUE")]
        overrides: Vec<String>,
    },
    /// Drive the frame loop headlessly and print each frame
    Simulate {
        #[arg(short, long, default_value = "water")]
        preset: PresetKind,
        #[arg(short, long, default_value = "5")]
        frames: u32,
        #[arg(long, default_value = "60")]
        fps: f32,
        #[arg(long, default_value = "1280")]
        width: u32,
        #[arg(long, default_value = "720")]
        height: u32,
        /// Reported device pixel ratio
        #[arg(long, default_value = "1")]
        dpr: f32,
        /// Include every uniform in the frame output
        #[arg(long)]
        detail: bool,
    },
}

/// Parse `name=value` into a uniform assignment. The value's shape picks
/// the kind: `#rrggbb` is a color, `a,b` a vec2, anything else a scalar.
fn parse_override(text: &str) -> anyhow::Result<(String, UniformValue)> {
    let Some((name, raw)) = text.split_once('=') else {
        bail!("override `{text}` is not NAME=VALUE");
    };
    let raw = raw.trim();
    let value = if raw.starts_with('#') {
        UniformValue::Color(Color::parse(raw)?)
    } else if let Some((a, b)) = raw.split_once(',') {
        UniformValue::Vec2(Vec2::new(
            a.trim().parse().with_context(|| format!("bad vec2 `{raw}`"))?,
            b.trim().parse().with_context(|| format!("bad vec2 `{raw}`"))?,
        ))
    } else {
        UniformValue::Scalar(raw.parse().with_context(|| format!("bad number `{raw}`"))?)
    };
    Ok((name.trim().to_string(), value))
}

fn print_preset(preset: &Preset) -> anyhow::Result<()> {
    println!("Preset: {}", preset.kind);
    println!(
        "Plane: {}x{} with {}x{} segments",
        preset.plane.width, preset.plane.height, preset.plane.segments_x, preset.plane.segments_y
    );
    println!(
        "Camera: pos=({:.2}, {:.2}, {:.2}) fov={} near={} far={}",
        preset.camera.position.x,
        preset.camera.position.y,
        preset.camera.position.z,
        preset.camera.fov_degrees,
        preset.camera.near,
        preset.camera.far
    );
    println!("Camera mode: {:?}", preset.camera_mode);
    println!("Clear color: {}", preset.clear_color);
    println!("Uniforms:");
    for (name, value) in preset.uniforms.entries() {
        println!("  {name} = {value}");
    }

    let panel = bindings::surface_panel(preset.kind)?;
    println!(
        "Panel \"{}\" ({}):",
        panel.title(),
        if preset.panel_visible { "visible" } else { "hidden" }
    );
    for field in panel.fields() {
        let current = panel.read(field.id, &preset.uniforms)?;
        match field.control {
            Control::Slider { spec, .. } => println!(
                "  {:<24} {:<24} [{}, {}] step {} = {current}",
                field.id, field.label, spec.min, spec.max, spec.step
            ),
            Control::Color { .. } => {
                println!("  {:<24} {:<24} color = {current}", field.id, field.label)
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("wavefield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", wavefield_common::crate_info());
            println!("scene: {}", wavefield_scene::crate_info());
            println!("input: {}", wavefield_input::crate_info());
            println!("panel: {}", wavefield_panel::crate_info());
            println!("render: {}", wavefield_render::crate_info());
            println!("kernel: {}", wavefield_kernel::crate_info());
        }
        Commands::Presets => {
            for kind in PresetKind::ALL {
                let preset = Preset::from_kind(kind);
                println!(
                    "{:<6} {}x{} segments, {} camera, panel {}",
                    kind.name(),
                    preset.plane.segments_x,
                    preset.plane.segments_y,
                    match preset.camera_mode {
                        wavefield_scene::CameraMode::Orbit { .. } => "orbit",
                        wavefield_scene::CameraMode::Scripted(_) => "scripted",
                    },
                    if preset.panel_visible { "shown" } else { "hidden" }
                );
            }
        }
        Commands::Dump { preset, json } => {
            let preset = Preset::from_kind(preset);
            if json {
                println!("{}", serde_json::to_string_pretty(&preset)?);
            } else {
                print_preset(&preset)?;
            }
        }
        Commands::Sample {
            preset,
            x,
            z,
            time,
            overrides,
        } => {
            let mut uniforms: SurfaceUniforms = Preset::from_kind(preset).uniforms;
            for text in &overrides {
                let (name, value) = parse_override(text)?;
                uniforms.set(&name, value)?;
            }
            uniforms.time = time;

            let pos = Vec2::new(x, z);
            let elevation = wave::elevation(pos, &uniforms);
            println!("Position: ({x}, {z}) at t={time}");
            println!("Elevation: {elevation:.6}");
            println!("Mix strength: {:.6}", wave::mix_strength(elevation, &uniforms));
            println!("Color: {}", wave::surface_color(elevation, &uniforms));
        }
        Commands::Simulate {
            preset,
            frames,
            fps,
            width,
            height,
            dpr,
            detail,
        } => {
            let preset = Preset::from_kind(preset);
            let mut ctx = AppContext::from_preset(&preset, Viewport::new(width, height, dpr))?;
            let renderer = if detail {
                DebugTextRenderer::verbose()
            } else {
                DebugTextRenderer::new()
            };
            for frame in run_headless(&mut ctx, &renderer, fixed_timesteps(frames, fps)) {
                println!("{frame}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_pick_kind_from_shape() {
        assert_eq!(
            parse_override("small_waves_iterations=2").unwrap(),
            ("small_waves_iterations".to_string(), UniformValue::Scalar(2.0))
        );
        assert_eq!(
            parse_override("big_waves_frequency = 3, 1.5").unwrap().1,
            UniformValue::Vec2(Vec2::new(3.0, 1.5))
        );
        assert_eq!(
            parse_override("surface_color=#ffffff").unwrap().1,
            UniformValue::Color(Color::WHITE)
        );
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(parse_override("speed").is_err());
        assert!(parse_override("speed=fast").is_err());
        assert!(parse_override("surface_color=#zzzzzz").is_err());
    }

    #[test]
    fn every_preset_prints() {
        for kind in PresetKind::ALL {
            print_preset(&Preset::from_kind(kind)).unwrap();
        }
    }
}
