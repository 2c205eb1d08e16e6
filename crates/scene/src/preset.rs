//! Compiled-in configurations: the user-orbited demo and the scripted
//! "water" demo. Both drive the same core; they differ only in uniform
//! values, plane resolution, camera control and initial panel visibility.

use crate::camera::PerspectiveCamera;
use crate::geometry::PlaneGeometry;
use crate::path::ScriptedPath;
use crate::scene::{Mesh, Scene};
use crate::uniforms::SurfaceUniforms;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use wavefield_common::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Orbit,
    Water,
}

impl PresetKind {
    pub const ALL: [PresetKind; 2] = [PresetKind::Orbit, PresetKind::Water];

    pub fn name(self) -> &'static str {
        match self {
            PresetKind::Orbit => "orbit",
            PresetKind::Water => "water",
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    #[error("unknown preset {0:?} (expected one of: orbit, water)")]
    Unknown(String),
}

impl FromStr for PresetKind {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orbit" => Ok(PresetKind::Orbit),
            "water" => Ok(PresetKind::Water),
            _ => Err(PresetError::Unknown(s.to_string())),
        }
    }
}

/// How the camera is driven. Exactly one mode per preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CameraMode {
    /// User-dragged orbit around the camera target with damping.
    Orbit { damping_factor: f32 },
    /// Closed-form function of elapsed time.
    Scripted(ScriptedPath),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneSpec {
    pub width: f32,
    pub height: f32,
    pub segments_x: u32,
    pub segments_y: u32,
}

impl PlaneSpec {
    pub fn build(&self) -> PlaneGeometry {
        PlaneGeometry::new(self.width, self.height, self.segments_x, self.segments_y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub kind: PresetKind,
    pub plane: PlaneSpec,
    pub uniforms: SurfaceUniforms,
    pub camera: PerspectiveCamera,
    pub camera_mode: CameraMode,
    pub panel_visible: bool,
    pub clear_color: Color,
    pub background: Option<PathBuf>,
}

impl Preset {
    pub fn from_kind(kind: PresetKind) -> Self {
        match kind {
            PresetKind::Orbit => Self::orbit(),
            PresetKind::Water => Self::water(),
        }
    }

    pub fn orbit() -> Self {
        Self {
            kind: PresetKind::Orbit,
            plane: PlaneSpec {
                width: 1.0,
                height: 1.0,
                segments_x: 32,
                segments_y: 32,
            },
            uniforms: SurfaceUniforms {
                big_waves_elevation: 0.2,
                big_waves_frequency: Vec2::new(5.0, 2.5),
                big_waves_speed: 0.2,
                small_waves_elevation: 0.0,
                small_waves_iterations: 0.0,
                color_offset: 0.2,
                color_multiplier: 2.5,
                ..SurfaceUniforms::default()
            },
            camera: PerspectiveCamera {
                position: Vec3::new(0.2, 0.7, 0.7),
                target: Vec3::ZERO,
                ..PerspectiveCamera::default()
            },
            camera_mode: CameraMode::Orbit {
                damping_factor: 0.05,
            },
            panel_visible: true,
            clear_color: Color::BLACK,
            background: None,
        }
    }

    pub fn water() -> Self {
        let path = ScriptedPath::default();
        Self {
            kind: PresetKind::Water,
            plane: PlaneSpec {
                width: 2.0,
                height: 2.0,
                segments_x: 256,
                segments_y: 256,
            },
            uniforms: SurfaceUniforms::default(),
            camera: PerspectiveCamera {
                position: path.position(0.0),
                target: path.target(0.0),
                ..PerspectiveCamera::default()
            },
            camera_mode: CameraMode::Scripted(path),
            panel_visible: false,
            clear_color: Color::from_rgb8(0x0c, 0x1f, 0x2e),
            background: None,
        }
    }

    pub fn with_background(mut self, path: impl Into<PathBuf>) -> Self {
        self.background = Some(path.into());
        self
    }

    /// Instantiate the scene graph. Geometry is generated here, once.
    pub fn build_scene(&self) -> Scene {
        let mesh = Mesh::flat(self.plane.build(), self.uniforms);
        let mut scene = Scene::new(mesh, self.camera);
        scene.background = self.background.clone();
        scene.clear_color = self.clear_color;
        tracing::info!(
            "built {} scene: {} vertices, background={}",
            self.kind,
            scene.mesh.geometry().vertex_count(),
            scene
                .background
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".into())
        );
        scene
    }
}
