use std::fmt;
use wavefield_common::Color;

/// Fraction of a step within which a value counts as on the grid.
const GRID_TOLERANCE: f64 = 1e-4;

/// Bounds and granularity of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderSpec {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max && self.step >= 0.0
    }

    /// Clamp into `[min, max]` and snap to the grid `min + k * step`.
    /// Non-finite input collapses to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        let v = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        // Snap in f64; a value already on the grid is returned untouched.
        let (min, step) = (self.min as f64, self.step as f64);
        let snapped = min + ((v as f64 - min) / step).round() * step;
        if (snapped - v as f64).abs() <= step * GRID_TOLERANCE {
            return v;
        }
        (snapped as f32).clamp(self.min, self.max)
    }
}

/// Widget kind plus the accessor pair that binds it to the state `T`.
pub enum Control<T> {
    Slider {
        spec: SliderSpec,
        get: fn(&T) -> f32,
        set: fn(&mut T, f32),
    },
    Color {
        get: fn(&T) -> Color,
        set: fn(&mut T, Color),
    },
}

impl<T> Clone for Control<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Control<T> {}

impl<T> Control<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Control::Slider { .. } => "slider",
            Control::Color { .. } => "color",
        }
    }
}

/// A registered panel entry.
pub struct Field<T> {
    pub id: &'static str,
    pub label: String,
    pub control: Control<T>,
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Field");
        s.field("id", &self.id).field("label", &self.label);
        match &self.control {
            Control::Slider { spec, .. } => s.field("slider", spec),
            Control::Color { .. } => s.field("color", &true),
        };
        s.finish()
    }
}

/// Current value of a field as read through its getter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Scalar(f32),
    Color(Color),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(v) => write!(f, "{v:.3}"),
            FieldValue::Color(c) => write!(f, "{c}"),
        }
    }
}
