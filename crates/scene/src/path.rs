use crate::camera::PerspectiveCamera;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Time-driven camera: circles the origin at a fixed height while its
/// look-at point wanders on a separate, faster loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedPath {
    pub radius: f32,
    pub height: f32,
    /// Orbit speed in radians per second.
    pub angular_speed: f32,
}

impl Default for ScriptedPath {
    fn default() -> Self {
        Self {
            radius: 1.5,
            height: 1.0,
            angular_speed: 0.17,
        }
    }
}

impl ScriptedPath {
    pub fn position(&self, t: f32) -> Vec3 {
        let angle = self.angular_speed * t;
        Vec3::new(self.radius * angle.sin(), self.height, self.radius * angle.cos())
    }

    pub fn target(&self, t: f32) -> Vec3 {
        Vec3::new(t.cos(), 0.5 * t.sin(), t.sin())
    }

    pub fn apply(&self, t: f32, camera: &mut PerspectiveCamera) {
        camera.position = self.position(t);
        camera.look_at(self.target(t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn position_at_start_half_and_full_period() {
        let path = ScriptedPath {
            radius: 2.0,
            height: 0.8,
            angular_speed: 0.17,
        };
        let start = path.position(0.0);
        assert!(approx(start, Vec3::new(0.0, 0.8, 2.0)));

        let half = path.position(PI / 0.17);
        assert!(approx(half, Vec3::new(0.0, 0.8, -2.0)));

        let full = path.position(2.0 * PI / 0.17);
        assert!(approx(full, start));
    }

    #[test]
    fn height_never_changes() {
        let path = ScriptedPath::default();
        for i in 0..50 {
            assert_eq!(path.position(i as f32 * 0.73).y, path.height);
        }
    }

    #[test]
    fn target_follows_closed_form() {
        let path = ScriptedPath::default();
        assert_eq!(path.target(0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(path.target(PI / 2.0), Vec3::new(0.0, 0.5, 1.0)));
        assert!(approx(path.target(PI), Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn apply_moves_camera() {
        let path = ScriptedPath::default();
        let mut cam = PerspectiveCamera::default();
        path.apply(3.0, &mut cam);
        assert_eq!(cam.position, path.position(3.0));
        assert_eq!(cam.target, path.target(3.0));
    }
}
