use crate::action::PointerAction;
use glam::Vec3;
use std::f32::consts::{PI, TAU};
use wavefield_scene::PerspectiveCamera;

const POLAR_EPSILON: f32 = 1e-6;
const MIN_DELTA: f32 = 1e-6;

/// Damped orbit controller: pointer drags accumulate a spherical delta that
/// is bled into the camera over subsequent updates.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    // Pending azimuth / polar deltas in radians
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.05,
            max_distance: 50.0,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn new(target: Vec3, damping_factor: f32) -> Self {
        Self {
            target,
            damping_factor: damping_factor.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    /// Queue a pointer action. `viewport_height` converts pixels to angle:
    /// dragging the full height turns the camera by one full revolution.
    pub fn handle(&mut self, action: PointerAction, viewport_height: u32) {
        if action.is_noop() {
            return;
        }
        let height = viewport_height.max(1) as f32;
        match action {
            PointerAction::Rotate { dx, dy } => {
                self.delta_theta -= TAU * dx / height * self.rotate_speed;
                self.delta_phi -= TAU * dy / height * self.rotate_speed;
            }
            PointerAction::Zoom { delta } => {
                let step = 0.95_f32.powf(self.zoom_speed);
                if delta > 0.0 {
                    self.scale /= step;
                } else {
                    self.scale *= step;
                }
            }
        }
    }

    pub fn has_pending_motion(&self) -> bool {
        self.delta_theta.abs() > MIN_DELTA
            || self.delta_phi.abs() > MIN_DELTA
            || (self.scale - 1.0).abs() > MIN_DELTA
    }

    /// Advance one frame. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        camera.target = self.target;
        if !self.has_pending_motion() {
            return false;
        }

        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            tracing::warn!("orbit camera sits on its target, motion ignored");
            return false;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let factor = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        theta += self.delta_theta * factor;
        phi += self.delta_phi * factor;
        phi = phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        let wanted = radius * self.scale;
        let new_radius = wanted.clamp(self.min_distance, self.max_distance);
        if new_radius != wanted {
            tracing::debug!(wanted, new_radius, "orbit distance clamped");
        }

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            new_radius * sin_phi * theta.sin(),
            new_radius * phi.cos(),
            new_radius * sin_phi * theta.cos(),
        );
        camera.position = self.target + new_offset;

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
            if self.delta_theta.abs() < MIN_DELTA {
                self.delta_theta = 0.0;
            }
            if self.delta_phi.abs() < MIN_DELTA {
                self.delta_phi = 0.0;
            }
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::default()
    }

    #[test]
    fn idle_update_keeps_camera() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let start = cam.position;
        assert!(!controls.update(&mut cam));
        assert_eq!(cam.position, start);
    }

    #[test]
    fn rotation_preserves_distance() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let dist = cam.distance();
        controls.handle(PointerAction::Rotate { dx: 120.0, dy: 30.0 }, 600);
        for _ in 0..10 {
            controls.update(&mut cam);
        }
        assert!((cam.distance() - dist).abs() < 1e-4);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn damping_spreads_motion_and_decays() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        controls.handle(PointerAction::Rotate { dx: 60.0, dy: 0.0 }, 600);

        assert!(controls.update(&mut cam));
        assert!(controls.has_pending_motion());

        for _ in 0..1000 {
            controls.update(&mut cam);
        }
        assert!(!controls.has_pending_motion());
        assert!(!controls.update(&mut cam));
    }

    #[test]
    fn damped_motion_converges_to_full_delta() {
        let mut controls = OrbitControls::default();
        let mut cam = PerspectiveCamera {
            position: Vec3::new(0.0, 0.0, 1.0),
            ..camera()
        };
        // A quarter revolution of azimuth: drag a quarter of the height left.
        controls.handle(PointerAction::Rotate { dx: -150.0, dy: 0.0 }, 600);
        for _ in 0..2000 {
            controls.update(&mut cam);
        }
        assert!((cam.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-2);
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let mut controls = OrbitControls {
            enable_damping: false,
            ..OrbitControls::default()
        };
        let mut cam = PerspectiveCamera {
            position: Vec3::new(0.0, 0.0, 1.0),
            ..camera()
        };
        controls.handle(PointerAction::Rotate { dx: -150.0, dy: 0.0 }, 600);
        controls.update(&mut cam);
        assert!((cam.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);
        assert!(!controls.has_pending_motion());
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut controls = OrbitControls {
            enable_damping: false,
            ..OrbitControls::default()
        };
        let mut cam = camera();
        controls.handle(PointerAction::Rotate { dx: 0.0, dy: 10_000.0 }, 100);
        controls.update(&mut cam);
        assert!(cam.position.y > 0.0);
        assert!(cam.position.x.is_finite() && cam.position.z.is_finite());
    }

    #[test]
    fn zoom_changes_distance_within_bounds() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let dist = cam.distance();

        controls.handle(PointerAction::Zoom { delta: 1.0 }, 600);
        controls.update(&mut cam);
        assert!(cam.distance() > dist);

        for _ in 0..500 {
            controls.handle(PointerAction::Zoom { delta: -1.0 }, 600);
            controls.update(&mut cam);
        }
        assert!((cam.distance() - controls.min_distance).abs() < 1e-4);
    }
}
