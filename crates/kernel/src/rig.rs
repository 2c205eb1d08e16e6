use wavefield_input::{OrbitControls, PointerAction};
use wavefield_scene::{CameraMode, PerspectiveCamera, ScriptedPath};

/// The single active camera controller.
#[derive(Debug, Clone)]
pub enum CameraRig {
    Orbit(OrbitControls),
    Scripted(ScriptedPath),
}

impl CameraRig {
    /// Build the rig for a preset's camera mode. Orbit controls pivot
    /// around the camera's initial target.
    pub fn from_mode(mode: CameraMode, camera: &PerspectiveCamera) -> Self {
        match mode {
            CameraMode::Orbit { damping_factor } => {
                CameraRig::Orbit(OrbitControls::new(camera.target, damping_factor))
            }
            CameraMode::Scripted(path) => CameraRig::Scripted(path),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CameraRig::Orbit(_) => "orbit",
            CameraRig::Scripted(_) => "scripted",
        }
    }

    /// Advance the camera for this frame.
    pub fn step(&mut self, elapsed: f32, camera: &mut PerspectiveCamera) {
        match self {
            CameraRig::Orbit(controls) => {
                controls.update(camera);
            }
            CameraRig::Scripted(path) => path.apply(elapsed, camera),
        }
    }

    /// Feed pointer input. Returns false when the rig ignores pointer input.
    pub fn handle(&mut self, action: PointerAction, viewport_height: u32) -> bool {
        match self {
            CameraRig::Orbit(controls) => {
                controls.handle(action, viewport_height);
                true
            }
            CameraRig::Scripted(_) => {
                tracing::debug!("scripted camera ignores {action:?}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn orbit_rig_pivots_on_camera_target() {
        let camera = PerspectiveCamera {
            target: Vec3::new(0.0, 0.1, 0.0),
            ..PerspectiveCamera::default()
        };
        let rig = CameraRig::from_mode(
            CameraMode::Orbit {
                damping_factor: 0.1,
            },
            &camera,
        );
        match rig {
            CameraRig::Orbit(c) => {
                assert_eq!(c.target, camera.target);
                assert_eq!(c.damping_factor, 0.1);
            }
            CameraRig::Scripted(_) => panic!("expected orbit rig"),
        }
    }

    #[test]
    fn scripted_rig_ignores_pointer() {
        let mut rig = CameraRig::from_mode(
            CameraMode::Scripted(ScriptedPath::default()),
            &PerspectiveCamera::default(),
        );
        assert!(!rig.handle(PointerAction::Rotate { dx: 10.0, dy: 0.0 }, 600));
        assert_eq!(rig.name(), "scripted");
    }

    #[test]
    fn scripted_step_is_closed_form() {
        let path = ScriptedPath::default();
        let mut rig = CameraRig::Scripted(path);
        let mut cam = PerspectiveCamera::default();
        rig.step(4.2, &mut cam);
        let first = cam;
        rig.step(9.0, &mut cam);
        rig.step(4.2, &mut cam);
        assert_eq!(cam, first);
        assert_eq!(cam.position, path.position(4.2));
    }
}
