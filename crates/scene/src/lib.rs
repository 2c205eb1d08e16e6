//! Scene object graph: one animated surface mesh, one camera, an optional
//! background image.
//!
//! The surface is shaded by a vertex/fragment shader pair that lives in the
//! GPU backend. [`wave`] mirrors that pair on the CPU with the same formula
//! so that elevation and color can be checked without a device.
//!
//! # Invariants
//! - Plane geometry is immutable after creation; only uniform values change.
//! - Wave evaluation is a pure function of position and uniforms.
//! - A preset selects exactly one camera control mode.

pub mod camera;
pub mod geometry;
pub mod path;
pub mod preset;
pub mod scene;
pub mod uniforms;
pub mod wave;

pub use camera::PerspectiveCamera;
pub use geometry::PlaneGeometry;
pub use path::ScriptedPath;
pub use preset::{CameraMode, PlaneSpec, Preset, PresetError, PresetKind};
pub use scene::{Mesh, Scene};
pub use uniforms::{SurfaceUniforms, UniformError, UniformValue};

pub fn crate_info() -> &'static str {
    "wavefield-scene v0.1.0"
}
