//! Pointer input mapped to camera actions, and the damped orbit controller
//! that consumes them.
//!
//! # Invariants
//! - The controller never moves its target; it only orbits and dollies.
//! - With no pending input, `OrbitControls::update` leaves the camera as is.

pub mod action;
pub mod orbit;

pub use action::PointerAction;
pub use orbit::OrbitControls;

pub fn crate_info() -> &'static str {
    "wavefield-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
