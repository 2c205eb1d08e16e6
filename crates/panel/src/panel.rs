use crate::field::{Control, Field, FieldValue, SliderSpec};
use std::fmt;
use wavefield_common::{Color, ColorParseError};

/// Errors from registering or editing panel fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field {0} is already registered")]
    DuplicateField(&'static str),
    #[error("field {id} is a {actual}, not a {expected}")]
    WrongControl {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("field {id} has an invalid range {spec:?}")]
    InvalidRange { id: &'static str, spec: SliderSpec },
    #[error("bad color value: {0}")]
    Color(#[from] ColorParseError),
}

/// Debug panel over a state value `T`.
///
/// Fields are registered once; edits from the GUI or from code go through
/// the same clamping path before reaching the setter.
pub struct ParameterPanel<T> {
    title: String,
    width: f32,
    visible: bool,
    fields: Vec<Field<T>>,
}

impl<T> fmt::Debug for ParameterPanel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterPanel")
            .field("title", &self.title)
            .field("visible", &self.visible)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T> ParameterPanel<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 300.0,
            visible: true,
            fields: Vec::new(),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn add_slider(
        &mut self,
        id: &'static str,
        label: impl Into<String>,
        spec: SliderSpec,
        get: fn(&T) -> f32,
        set: fn(&mut T, f32),
    ) -> Result<(), PanelError> {
        if !spec.is_valid() {
            return Err(PanelError::InvalidRange { id, spec });
        }
        self.register(id, label.into(), Control::Slider { spec, get, set })
    }

    pub fn add_color(
        &mut self,
        id: &'static str,
        label: impl Into<String>,
        get: fn(&T) -> Color,
        set: fn(&mut T, Color),
    ) -> Result<(), PanelError> {
        self.register(id, label.into(), Control::Color { get, set })
    }

    fn register(
        &mut self,
        id: &'static str,
        label: String,
        control: Control<T>,
    ) -> Result<(), PanelError> {
        if self.fields.iter().any(|f| f.id == id) {
            return Err(PanelError::DuplicateField(id));
        }
        tracing::debug!("panel {}: registered {} {id}", self.title, control.kind());
        self.fields.push(Field { id, label, control });
        Ok(())
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn field(&self, id: &str) -> Result<&Field<T>, PanelError> {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| PanelError::UnknownField(id.to_string()))
    }

    /// Read a field through its getter.
    pub fn read(&self, id: &str, state: &T) -> Result<FieldValue, PanelError> {
        Ok(match self.field(id)?.control {
            Control::Slider { get, .. } => FieldValue::Scalar(get(state)),
            Control::Color { get, .. } => FieldValue::Color(get(state)),
        })
    }

    /// Clamp `value` to the field's range and step, write it, and return
    /// the value actually written.
    pub fn edit_scalar(&self, id: &str, value: f32, state: &mut T) -> Result<f32, PanelError> {
        let field = self.field(id)?;
        match field.control {
            Control::Slider { spec, set, .. } => {
                let clamped = spec.clamp(value);
                if clamped != value {
                    tracing::debug!("{id}: {value} clamped to {clamped}");
                }
                set(state, clamped);
                Ok(clamped)
            }
            other => Err(PanelError::WrongControl {
                id: id.to_string(),
                expected: "slider",
                actual: other.kind(),
            }),
        }
    }

    pub fn set_color(&self, id: &str, color: Color, state: &mut T) -> Result<(), PanelError> {
        let field = self.field(id)?;
        match field.control {
            Control::Color { set, .. } => {
                set(state, color);
                Ok(())
            }
            other => Err(PanelError::WrongControl {
                id: id.to_string(),
                expected: "color",
                actual: other.kind(),
            }),
        }
    }

    /// Parse a color string (e.g. `#9bd8ff`) and write it to a color field.
    pub fn edit_color(&self, id: &str, text: &str, state: &mut T) -> Result<Color, PanelError> {
        // Resolve the field first so an unknown id wins over a parse error.
        self.field(id)?;
        let color = Color::parse(text)?;
        self.set_color(id, color, state)?;
        Ok(color)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        tracing::debug!("panel {} visible={}", self.title, self.visible);
        self.visible
    }

    /// Draw the panel as a window. No-op while hidden.
    pub fn show(&self, ctx: &egui::Context, state: &mut T) {
        if !self.visible {
            return;
        }

        egui::Window::new(self.title.as_str())
            .default_width(self.width)
            .resizable(false)
            .show(ctx, |ui| {
                for field in &self.fields {
                    match field.control {
                        Control::Slider { spec, get, set } => {
                            let mut value = get(state);
                            let response = ui.add(
                                egui::Slider::new(&mut value, spec.min..=spec.max)
                                    .step_by(spec.step as f64)
                                    .text(field.label.as_str()),
                            );
                            let current = get(state);
                            let clamped = spec.clamp(value);
                            if response.changed() && clamped != current {
                                set(state, clamped);
                            }
                        }
                        Control::Color { get, set } => {
                            ui.horizontal(|ui| {
                                let current = get(state);
                                let mut rgb = current.to_rgb8();
                                if ui.color_edit_button_srgb(&mut rgb).changed()
                                    && rgb != current.to_rgb8()
                                {
                                    set(state, Color::from_rgb8(rgb[0], rgb[1], rgb[2]));
                                }
                                ui.label(field.label.as_str());
                            });
                        }
                    }
                }
                ui.separator();
                ui.small("H: toggle panel");
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Params {
        amplitude: f32,
        speed: f32,
        tint: Color,
    }

    fn params() -> Params {
        Params {
            amplitude: 0.2,
            speed: 1.0,
            tint: Color::from_rgb8(0x18, 0x66, 0x91),
        }
    }

    fn panel() -> ParameterPanel<Params> {
        let mut panel = ParameterPanel::<Params>::new("test");
        panel
            .add_slider(
                "amplitude",
                "Amplitude",
                SliderSpec::new(0.0, 1.0, 0.01),
                |p| p.amplitude,
                |p, v| p.amplitude = v,
            )
            .unwrap();
        panel
            .add_slider(
                "speed",
                "Speed",
                SliderSpec::new(0.0, 4.0, 0.001),
                |p| p.speed,
                |p, v| p.speed = v,
            )
            .unwrap();
        panel
            .add_color("tint", "Tint", |p| p.tint, |p, c| p.tint = c)
            .unwrap();
        panel
    }

    #[test]
    fn out_of_range_edit_is_clamped_before_write() {
        let panel = panel();
        let mut p = params();

        assert_eq!(panel.edit_scalar("amplitude", 7.5, &mut p).unwrap(), 1.0);
        assert_eq!(p.amplitude, 1.0);

        assert_eq!(panel.edit_scalar("speed", -2.0, &mut p).unwrap(), 0.0);
        assert_eq!(p.speed, 0.0);
    }

    #[test]
    fn in_range_edit_is_written() {
        let panel = panel();
        let mut p = params();
        let written = panel.edit_scalar("speed", 2.5, &mut p).unwrap();
        assert!((written - 2.5).abs() < 1e-4);
        assert_eq!(p.speed, written);
    }

    #[test]
    fn color_edit_parses_string() {
        let panel = panel();
        let mut p = params();
        panel.edit_color("tint", "#9bd8ff", &mut p).unwrap();
        assert_eq!(p.tint.to_hex(), "#9bd8ff");

        let before = p.clone();
        assert!(matches!(
            panel.edit_color("tint", "not-a-color", &mut p),
            Err(PanelError::Color(_))
        ));
        assert_eq!(p, before);
    }

    #[test]
    fn unknown_and_mismatched_fields_are_errors() {
        let panel = panel();
        let mut p = params();
        assert!(matches!(
            panel.edit_scalar("missing", 1.0, &mut p),
            Err(PanelError::UnknownField(_))
        ));
        assert!(matches!(
            panel.edit_scalar("tint", 1.0, &mut p),
            Err(PanelError::WrongControl { expected: "slider", .. })
        ));
        assert!(matches!(
            panel.set_color("speed", Color::WHITE, &mut p),
            Err(PanelError::WrongControl { expected: "color", .. })
        ));
        assert!(matches!(
            panel.edit_color("missing", "zz", &mut p),
            Err(PanelError::UnknownField(_))
        ));
    }

    #[test]
    fn duplicate_and_invalid_registrations_fail() {
        let mut panel = panel();
        assert_eq!(
            panel.add_color("tint", "Again", |p| p.tint, |p, c| p.tint = c),
            Err(PanelError::DuplicateField("tint"))
        );
        assert!(matches!(
            panel.add_slider(
                "bad",
                "Bad",
                SliderSpec::new(2.0, 1.0, 0.1),
                |p| p.speed,
                |p, v| p.speed = v,
            ),
            Err(PanelError::InvalidRange { id: "bad", .. })
        ));
        assert_eq!(panel.fields().len(), 3);
    }

    #[test]
    fn read_goes_through_getter() {
        let panel = panel();
        let p = params();
        assert_eq!(panel.read("amplitude", &p).unwrap(), FieldValue::Scalar(0.2));
        assert_eq!(
            panel.read("tint", &p).unwrap(),
            FieldValue::Color(Color::from_rgb8(0x18, 0x66, 0x91))
        );
    }

    #[test]
    fn grid_value_edit_is_exact() {
        let panel = panel();
        let mut p = params();
        assert_eq!(panel.edit_scalar("amplitude", 0.2, &mut p).unwrap(), 0.2);
        assert_eq!(p.amplitude, 0.2);
    }

    #[test]
    fn showing_visible_panel_writes_nothing() {
        let panel = panel();
        let mut p = params();
        let before = p.clone();
        let ctx = egui::Context::default();

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx, &mut p));
        }
        assert!(panel.visible());
        assert_eq!(p, before);
    }

    #[test]
    fn toggling_visibility_leaves_state_alone() {
        let mut panel = panel();
        let mut p = params();
        let before = p.clone();
        let ctx = egui::Context::default();

        for _ in 0..3 {
            panel.toggle();
            let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx, &mut p));
        }
        assert!(!panel.visible());
        assert_eq!(p, before);
    }
}
