use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound applied to the reported device pixel ratio.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Errors produced while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("expected 3 or 6 hex digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// RGB color in sRGB gamma space, each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `0xrrggbb` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #rgb expands each nibble: #1af == #11aaff
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Linear-light RGBA for upload into a shader uniform.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }

    /// Component-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Drawable area in logical pixels plus the display's reported pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Device pixel ratio capped at [`MAX_PIXEL_RATIO`].
    pub fn pixel_ratio(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Size of the render target in physical pixels.
    pub fn render_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        let scale = |v: u32| ((v as f32 * ratio).round() as u32).max(1);
        (scale(self.width), scale(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_hex() {
        let c = Color::parse("#186691").unwrap();
        assert_eq!(c.to_rgb8(), [0x18, 0x66, 0x91]);
        assert_eq!(Color::parse("9BD8FF").unwrap().to_hex(), "#9bd8ff");
        assert_eq!(Color::parse("#1af").unwrap().to_hex(), "#11aaff");
        assert_eq!(Color::parse("0xffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Color::parse("  "), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse("#12345"),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            Color::parse("#zz0000"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Color::BLACK.to_linear_rgba(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::WHITE.to_linear_rgba();
        assert!((white[0] - 1.0).abs() < 1e-6);
        let mid = Color::new(0.5, 0.5, 0.5).to_linear_rgba();
        assert!(mid[0] < 0.5);
    }

    #[test]
    fn lerp_clamps_factor() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 0.5), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn viewport_caps_pixel_ratio() {
        let vp = Viewport::new(1200, 900, 3.0);
        assert_eq!(vp.pixel_ratio(), 2.0);
        assert_eq!(vp.render_size(), (2400, 1800));
        assert!((vp.aspect() - 1200.0 / 900.0).abs() < 1e-6);

        let low = Viewport::new(800, 600, 1.0);
        assert_eq!(low.pixel_ratio(), 1.0);
        assert_eq!(low.render_size(), (800, 600));
    }

    #[test]
    fn viewport_tolerates_degenerate_input() {
        let vp = Viewport::new(0, 0, f32::NAN);
        assert_eq!(vp.pixel_ratio(), 1.0);
        assert_eq!(vp.render_size(), (1, 1));
        assert_eq!(vp.aspect(), 0.0);
    }
}
