/// A high-level pointer action produced by the platform layer.
///
/// The camera controller consumes actions, never raw window events, so the
/// controller stays testable without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Drag by a delta in logical pixels.
    Rotate { dx: f32, dy: f32 },
    /// Wheel scroll; positive moves the camera away from the target.
    Zoom { delta: f32 },
}

impl PointerAction {
    /// Whether applying this action would change anything.
    pub fn is_noop(&self) -> bool {
        match *self {
            PointerAction::Rotate { dx, dy } => dx == 0.0 && dy == 0.0,
            PointerAction::Zoom { delta } => delta == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deltas_are_noops() {
        assert!(PointerAction::Rotate { dx: 0.0, dy: 0.0 }.is_noop());
        assert!(PointerAction::Zoom { delta: 0.0 }.is_noop());
        assert!(!PointerAction::Rotate { dx: 1.0, dy: 0.0 }.is_noop());
        assert!(!PointerAction::Zoom { delta: -1.0 }.is_noop());
    }
}
