//! CPU mirror of the surface shader pair.
//!
//! The WGSL in the wgpu backend evaluates exactly these formulas. Keep the
//! two in sync when changing either.

use crate::uniforms::SurfaceUniforms;
use glam::{Vec2, Vec3};
use wavefield_common::Color;

/// Upper bound on small-wave octaves, matching the shader's clamp.
pub const MAX_SMALL_ITERATIONS: u32 = 8;

/// Integer octave count for the small waves.
pub fn small_iterations(u: &SurfaceUniforms) -> u32 {
    let n = u.small_waves_iterations;
    if n.is_finite() && n > 0.0 {
        (n.min(MAX_SMALL_ITERATIONS as f32)) as u32
    } else {
        0
    }
}

/// Height offset at model-space `(x, z)`: one large slow wave plus a
/// sum of small fast ripples that only ever push the surface down.
pub fn elevation(pos: Vec2, u: &SurfaceUniforms) -> f32 {
    let t = u.time;
    let big = (pos.x * u.big_waves_frequency.x + t * u.big_waves_speed).sin()
        * (pos.y * u.big_waves_frequency.y + t * u.big_waves_speed).sin()
        * u.big_waves_elevation;

    let mut small = 0.0;
    for i in 1..=small_iterations(u) {
        let fi = i as f32;
        let a = (pos.x * u.small_waves_frequency * fi + t * u.small_waves_speed).sin();
        let b = (pos.y * u.small_waves_frequency * fi * 1.3 + t * u.small_waves_speed * 0.7).sin();
        small -= (a * b).abs() * u.small_waves_elevation / fi;
    }

    big + small
}

/// Fragment mix factor between depth and surface color.
pub fn mix_strength(elevation: f32, u: &SurfaceUniforms) -> f32 {
    ((elevation + u.color_offset) * u.color_multiplier).clamp(0.0, 1.0)
}

pub fn surface_color(elevation: f32, u: &SurfaceUniforms) -> Color {
    u.depth_color.lerp(u.surface_color, mix_strength(elevation, u))
}

/// Displace a model-space vertex of the flat plane along its normal (+Y).
pub fn displace(model_pos: Vec3, u: &SurfaceUniforms) -> Vec3 {
    let e = elevation(Vec2::new(model_pos.x, model_pos.z), u);
    model_pos + Vec3::Y * e
}
