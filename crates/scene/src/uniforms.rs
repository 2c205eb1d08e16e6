use glam::Vec2;
use serde::{Deserialize, Serialize};
use wavefield_common::Color;

/// The uniform block shared by the surface vertex and fragment stages.
///
/// Only two writers exist: the parameter panel (user edits) and the frame
/// tick (which owns `time`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceUniforms {
    /// Elapsed seconds since the frame loop started.
    pub time: f32,
    pub big_waves_elevation: f32,
    pub big_waves_frequency: Vec2,
    pub big_waves_speed: f32,
    pub small_waves_elevation: f32,
    pub small_waves_frequency: f32,
    pub small_waves_speed: f32,
    /// Number of small-wave octaves. Truncated to an integer when evaluated.
    pub small_waves_iterations: f32,
    pub depth_color: Color,
    pub surface_color: Color,
    pub color_offset: f32,
    pub color_multiplier: f32,
}

impl Default for SurfaceUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            big_waves_elevation: 0.2,
            big_waves_frequency: Vec2::new(4.0, 1.5),
            big_waves_speed: 0.75,
            small_waves_elevation: 0.15,
            small_waves_frequency: 3.0,
            small_waves_speed: 0.2,
            small_waves_iterations: 4.0,
            depth_color: Color::from_rgb8(0x18, 0x66, 0x91),
            surface_color: Color::from_rgb8(0x9b, 0xd8, 0xff),
            color_offset: 0.08,
            color_multiplier: 5.0,
        }
    }
}

/// A single uniform value addressed by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UniformValue {
    Scalar(f32),
    Vec2(Vec2),
    Color(Color),
}

impl UniformValue {
    pub fn kind(&self) -> &'static str {
        match self {
            UniformValue::Scalar(_) => "scalar",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Color(_) => "color",
        }
    }
}

impl std::fmt::Display for UniformValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniformValue::Scalar(v) => write!(f, "{v:.3}"),
            UniformValue::Vec2(v) => write!(f, "({:.3}, {:.3})", v.x, v.y),
            UniformValue::Color(c) => write!(f, "{c}"),
        }
    }
}

/// Errors from name-keyed uniform access.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UniformError {
    #[error("unknown uniform: {0}")]
    Unknown(String),
    #[error("uniform {name} expects a {expected} value, got {found}")]
    KindMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Uniform names in declaration order.
pub const UNIFORM_NAMES: [&str; 12] = [
    "time",
    "big_waves_elevation",
    "big_waves_frequency",
    "big_waves_speed",
    "small_waves_elevation",
    "small_waves_frequency",
    "small_waves_speed",
    "small_waves_iterations",
    "depth_color",
    "surface_color",
    "color_offset",
    "color_multiplier",
];

impl SurfaceUniforms {
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        use UniformValue as V;
        let value = match name {
            "time" => V::Scalar(self.time),
            "big_waves_elevation" => V::Scalar(self.big_waves_elevation),
            "big_waves_frequency" => V::Vec2(self.big_waves_frequency),
            "big_waves_speed" => V::Scalar(self.big_waves_speed),
            "small_waves_elevation" => V::Scalar(self.small_waves_elevation),
            "small_waves_frequency" => V::Scalar(self.small_waves_frequency),
            "small_waves_speed" => V::Scalar(self.small_waves_speed),
            "small_waves_iterations" => V::Scalar(self.small_waves_iterations),
            "depth_color" => V::Color(self.depth_color),
            "surface_color" => V::Color(self.surface_color),
            "color_offset" => V::Scalar(self.color_offset),
            "color_multiplier" => V::Scalar(self.color_multiplier),
            _ => return None,
        };
        Some(value)
    }

    /// Write a uniform by name. The value kind must match the uniform's kind.
    pub fn set(&mut self, name: &str, value: UniformValue) -> Result<(), UniformError> {
        match (name, value) {
            ("time", UniformValue::Scalar(v)) => self.time = v,
            ("big_waves_elevation", UniformValue::Scalar(v)) => self.big_waves_elevation = v,
            ("big_waves_frequency", UniformValue::Vec2(v)) => self.big_waves_frequency = v,
            ("big_waves_speed", UniformValue::Scalar(v)) => self.big_waves_speed = v,
            ("small_waves_elevation", UniformValue::Scalar(v)) => self.small_waves_elevation = v,
            ("small_waves_frequency", UniformValue::Scalar(v)) => self.small_waves_frequency = v,
            ("small_waves_speed", UniformValue::Scalar(v)) => self.small_waves_speed = v,
            ("small_waves_iterations", UniformValue::Scalar(v)) => {
                self.small_waves_iterations = v
            }
            ("depth_color", UniformValue::Color(c)) => self.depth_color = c,
            ("surface_color", UniformValue::Color(c)) => self.surface_color = c,
            ("color_offset", UniformValue::Scalar(v)) => self.color_offset = v,
            ("color_multiplier", UniformValue::Scalar(v)) => self.color_multiplier = v,
            _ => {
                return Err(match self.get(name) {
                    None => UniformError::Unknown(name.to_string()),
                    Some(current) => UniformError::KindMismatch {
                        name: name.to_string(),
                        expected: current.kind(),
                        found: value.kind(),
                    },
                });
            }
        }
        tracing::trace!("uniform {name} = {value}");
        Ok(())
    }

    /// All uniforms as `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, UniformValue)> {
        UNIFORM_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|v| (*name, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        let u = SurfaceUniforms::default();
        for name in UNIFORM_NAMES {
            assert!(u.get(name).is_some(), "{name} missing");
        }
        assert_eq!(u.entries().len(), UNIFORM_NAMES.len());
    }

    #[test]
    fn set_by_name_updates_field() {
        let mut u = SurfaceUniforms::default();
        u.set("color_offset", UniformValue::Scalar(0.5)).unwrap();
        assert_eq!(u.color_offset, 0.5);

        u.set("big_waves_frequency", UniformValue::Vec2(Vec2::new(1.0, 2.0)))
            .unwrap();
        assert_eq!(u.big_waves_frequency, Vec2::new(1.0, 2.0));

        u.set("surface_color", UniformValue::Color(Color::WHITE))
            .unwrap();
        assert_eq!(u.surface_color, Color::WHITE);
    }

    #[test]
    fn set_rejects_unknown_and_mismatched() {
        let mut u = SurfaceUniforms::default();
        let before = u;
        assert_eq!(
            u.set("uNope", UniformValue::Scalar(1.0)),
            Err(UniformError::Unknown("uNope".into()))
        );
        assert!(matches!(
            u.set("depth_color", UniformValue::Scalar(1.0)),
            Err(UniformError::KindMismatch { expected: "color", .. })
        ));
        assert_eq!(u, before);
    }
}
