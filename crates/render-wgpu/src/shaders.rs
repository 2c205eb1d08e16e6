/// Displaced wave surface. `elevation_at` matches `wavefield_scene::wave`.
pub const SURFACE_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
};

struct Wave {
    big_waves_frequency: vec2<f32>,
    big_waves_elevation: f32,
    big_waves_speed: f32,
    small_waves_elevation: f32,
    small_waves_frequency: f32,
    small_waves_speed: f32,
    small_waves_iterations: f32,
    depth_color: vec4<f32>,
    surface_color: vec4<f32>,
    color_offset: f32,
    color_multiplier: f32,
    time: f32,
    _pad: f32,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(0) @binding(1)
var<uniform> wave: Wave;

const MAX_SMALL_ITERATIONS: f32 = 8.0;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) elevation: f32,
    @location(1) uv: vec2<f32>,
};

fn elevation_at(p: vec2<f32>) -> f32 {
    let t = wave.time;
    var elevation = sin(p.x * wave.big_waves_frequency.x + t * wave.big_waves_speed)
        * sin(p.y * wave.big_waves_frequency.y + t * wave.big_waves_speed)
        * wave.big_waves_elevation;

    let iterations = u32(clamp(wave.small_waves_iterations, 0.0, MAX_SMALL_ITERATIONS));
    for (var i = 1u; i <= iterations; i = i + 1u) {
        let fi = f32(i);
        let a = sin(p.x * wave.small_waves_frequency * fi + t * wave.small_waves_speed);
        let b = sin(p.y * wave.small_waves_frequency * fi * 1.3 + t * wave.small_waves_speed * 0.7);
        elevation -= abs(a * b) * wave.small_waves_elevation / fi;
    }
    return elevation;
}

fn srgb_to_linear(c: vec3<f32>) -> vec3<f32> {
    let lo = c / 12.92;
    let hi = pow((c + vec3<f32>(0.055)) / 1.055, vec3<f32>(2.4));
    return select(hi, lo, c <= vec3<f32>(0.04045));
}

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var world_pos = camera.model * vec4<f32>(vertex.position, 1.0);
    let e = elevation_at(world_pos.xz);
    world_pos.y += e;

    var out: VertexOutput;
    out.clip_position = camera.view_proj * world_pos;
    out.elevation = e;
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let strength = clamp((in.elevation + wave.color_offset) * wave.color_multiplier, 0.0, 1.0);
    let color = mix(wave.depth_color.rgb, wave.surface_color.rgb, strength);
    return vec4<f32>(srgb_to_linear(color), 1.0);
}
"#;

/// Fullscreen triangle sampling one texture. Used for the background image
/// and for the final blit onto the swapchain.
pub const FULLSCREEN_SHADER: &str = r#"
@group(0) @binding(0)
var source_texture: texture_2d<f32>;

@group(0) @binding(1)
var source_sampler: sampler;

struct FullscreenOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_fullscreen(@builtin(vertex_index) index: u32) -> FullscreenOutput {
    let x = f32((index << 1u) & 2u);
    let y = f32(index & 2u);

    var out: FullscreenOutput;
    out.clip_position = vec4<f32>(x * 2.0 - 1.0, 1.0 - y * 2.0, 0.0, 1.0);
    out.uv = vec2<f32>(x, y);
    return out;
}

@fragment
fn fs_fullscreen(in: FullscreenOutput) -> @location(0) vec4<f32> {
    return textureSample(source_texture, source_sampler, in.uv);
}
"#;
