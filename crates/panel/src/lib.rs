//! Parameter panel: named numeric and color fields bound to a state value
//! through statically typed getter/setter pairs.
//!
//! # Invariants
//! - Every slider write is clamped to `[min, max]` and snapped to the step grid.
//! - Visibility is orthogonal to state: showing or hiding never writes a field.

mod field;
mod panel;

pub use field::{Control, Field, FieldValue, SliderSpec};
pub use panel::{PanelError, ParameterPanel};

pub fn crate_info() -> &'static str {
    "wavefield-panel v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("panel"));
    }
}
