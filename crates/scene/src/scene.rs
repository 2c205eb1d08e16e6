use crate::camera::PerspectiveCamera;
use crate::geometry::PlaneGeometry;
use crate::uniforms::SurfaceUniforms;
use glam::Mat4;
use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;
use wavefield_common::Color;

/// The animated surface: immutable plane geometry laid flat by its model
/// transform, plus the mutable uniform set of its shader material.
#[derive(Debug, Clone)]
pub struct Mesh {
    geometry: PlaneGeometry,
    transform: Mat4,
    pub uniforms: SurfaceUniforms,
}

impl Mesh {
    /// Wrap `geometry` rotated -90 degrees about X so the plane faces +Y.
    pub fn flat(geometry: PlaneGeometry, uniforms: SurfaceUniforms) -> Self {
        Self {
            geometry,
            transform: Mat4::from_rotation_x(-FRAC_PI_2),
            uniforms,
        }
    }

    pub fn geometry(&self) -> &PlaneGeometry {
        &self.geometry
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }
}

/// Everything that is drawn: one mesh, one camera, optional background.
#[derive(Debug, Clone)]
pub struct Scene {
    pub mesh: Mesh,
    pub camera: PerspectiveCamera,
    pub background: Option<PathBuf>,
    pub clear_color: Color,
}

impl Scene {
    pub fn new(mesh: Mesh, camera: PerspectiveCamera) -> Self {
        Self {
            mesh,
            camera,
            background: None,
            clear_color: Color::BLACK,
        }
    }
}
