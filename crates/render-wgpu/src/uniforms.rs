//! GPU-side mirrors of the scene data. Field order and padding follow WGSL
//! uniform layout rules; see the `Camera` and `Wave` structs in `shaders.rs`.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wavefield_common::Color;
use wavefield_scene::{PlaneGeometry, SurfaceUniforms};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

impl CameraUniforms {
    pub fn new(view_proj: Mat4, model: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// Surface uniforms as uploaded. Colors stay in sRGB; the fragment shader
/// mixes them there and converts the result once.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct WaveUniforms {
    pub big_waves_frequency: [f32; 2],
    pub big_waves_elevation: f32,
    pub big_waves_speed: f32,
    pub small_waves_elevation: f32,
    pub small_waves_frequency: f32,
    pub small_waves_speed: f32,
    pub small_waves_iterations: f32,
    pub depth_color: [f32; 4],
    pub surface_color: [f32; 4],
    pub color_offset: f32,
    pub color_multiplier: f32,
    pub time: f32,
    pub _pad: f32,
}

fn rgba(c: Color) -> [f32; 4] {
    let [r, g, b] = c.to_array();
    [r, g, b, 1.0]
}

impl From<&SurfaceUniforms> for WaveUniforms {
    fn from(u: &SurfaceUniforms) -> Self {
        Self {
            big_waves_frequency: u.big_waves_frequency.to_array(),
            big_waves_elevation: u.big_waves_elevation,
            big_waves_speed: u.big_waves_speed,
            small_waves_elevation: u.small_waves_elevation,
            small_waves_frequency: u.small_waves_frequency,
            small_waves_speed: u.small_waves_speed,
            small_waves_iterations: u.small_waves_iterations,
            depth_color: rgba(u.depth_color),
            surface_color: rgba(u.surface_color),
            color_offset: u.color_offset,
            color_multiplier: u.color_multiplier,
            time: u.time,
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Interleave plane positions and UVs into a vertex buffer payload.
pub fn surface_vertices(geometry: &PlaneGeometry) -> Vec<SurfaceVertex> {
    geometry
        .positions
        .iter()
        .zip(&geometry.uvs)
        .map(|(p, uv)| SurfaceVertex {
            position: p.to_array(),
            uv: uv.to_array(),
        })
        .collect()
}
