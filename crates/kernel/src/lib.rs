//! Application kernel: owns the scene, camera rig and parameter panel, and
//! turns elapsed time into one render command per display refresh.
//!
//! # Invariants
//! - `tick` is the only writer of the time uniform.
//! - Exactly one camera control mode is active for the lifetime of a context.
//! - Resizing is idempotent and never touches uniforms.

pub mod bindings;
pub mod clock;
pub mod context;
pub mod driver;
pub mod rig;

pub use clock::Clock;
pub use context::{AppContext, KernelError};
pub use driver::{fixed_timesteps, run_headless};
pub use rig::CameraRig;

pub fn crate_info() -> &'static str {
    "wavefield-kernel v0.1.0"
}
