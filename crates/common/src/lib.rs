//! Shared value types used across the wavefield crates.
//!
//! # Invariants
//! - `Color` components are sRGB-encoded and lie in `[0, 1]`.
//! - `Viewport::pixel_ratio` never exceeds [`MAX_PIXEL_RATIO`].

pub mod types;

pub use types::{Color, ColorParseError, MAX_PIXEL_RATIO, Viewport};

pub fn crate_info() -> &'static str {
    "wavefield-common v0.1.0"
}
