//! Color, gradient, and palette model for the backdrop.
//!
//! Everything the paint pipeline needs to describe a frame without knowing
//! which backend draws it: RGBA colors, gradient stop lists, the two blend
//! modes the pipeline uses, and the named palettes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                ))
            }
            6 | 8 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                let a = if bytes.len() == 8 {
                    hex_val(bytes[6])? << 4 | hex_val(bytes[7])?
                } else {
                    255
                };
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ))
            }
            _ => None,
        }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Emit as a CSS `rgba(r, g, b, a)` string. Hex notation cannot carry
    /// the fractional alpha the gradient stops use.
    pub fn to_css(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        let a = self.a.clamp(0.0, 1.0);
        format!("rgba({r},{g},{b},{a:.3})")
    }

    /// RGBA bytes, for backends that take 8-bit channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

// ─── Gradients ───────────────────────────────────────────────────────────

/// A gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32, // 0.0 .. 1.0
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stop list for a gradient. Every gradient in the backdrop has at most
/// three stops, so the storage stays inline.
pub type GradientStops = SmallVec<[GradientStop; 4]>;

// ─── Blend modes ─────────────────────────────────────────────────────────

/// The two composite operations the pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    SourceOver,
    Overlay,
}

impl BlendMode {
    /// The Canvas2D `globalCompositeOperation` keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Overlay => "overlay",
        }
    }
}

// ─── Palettes ────────────────────────────────────────────────────────────

/// Per-role colors for one backdrop look. The pipeline reads every color
/// from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackdropTheme {
    /// Three-stop linear base gradient, top-left to bottom-right.
    pub base: GradientStops,
    /// Spotlight core (center of the radial gradient).
    pub spotlight_core: Color,
    /// Spotlight edge — fully transparent so the layer never hits opaque.
    pub spotlight_edge: Color,
    /// Particle fill; per-particle alpha replaces this color's alpha.
    pub particle: Color,
    /// Full-surface grain overlay, composited with `BlendMode::Overlay`.
    pub grain: Color,
}

impl BackdropTheme {
    /// Dark industrial base with a neon burn in one corner.
    pub fn ember() -> Self {
        Self {
            base: GradientStops::from_slice(&[
                GradientStop::new(0.0, Color::from_hex("#070707").unwrap_or(Color::rgb(0.0, 0.0, 0.0))),
                GradientStop::new(0.4, Color::from_hex("#0b0b0b").unwrap_or(Color::rgb(0.0, 0.0, 0.0))),
                GradientStop::new(1.0, Color::rgba(1.0, 0.0, 0.25, 0.035)),
            ]),
            spotlight_core: Color::rgba(1.0, 1.0, 1.0, 0.02),
            spotlight_edge: Color::rgba(0.0, 0.0, 0.0, 0.0),
            particle: Color::rgb(1.0, 1.0, 1.0),
            grain: Color::rgba(0.0, 0.0, 0.0, 0.02),
        }
    }

    /// Near-black base with a cold cyan tint.
    pub fn midnight() -> Self {
        Self {
            base: GradientStops::from_slice(&[
                GradientStop::new(0.0, Color::from_hex("#050608").unwrap_or(Color::rgb(0.0, 0.0, 0.0))),
                GradientStop::new(0.4, Color::from_hex("#090b0e").unwrap_or(Color::rgb(0.0, 0.0, 0.0))),
                GradientStop::new(1.0, Color::rgba(0.0, 0.75, 1.0, 0.03)),
            ]),
            spotlight_core: Color::rgba(0.85, 0.95, 1.0, 0.02),
            spotlight_edge: Color::rgba(0.0, 0.0, 0.0, 0.0),
            particle: Color::rgb(0.88, 0.95, 1.0),
            grain: Color::rgba(0.0, 0.0, 0.0, 0.02),
        }
    }
}

impl Default for BackdropTheme {
    fn default() -> Self {
        Self::ember()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_parse_short_and_long_forms() {
        let short = Color::from_hex("#fff").unwrap();
        assert_eq!(short, Color::rgb(1.0, 1.0, 1.0));

        let long = Color::from_hex("070707").unwrap();
        assert!((long.r - 7.0 / 255.0).abs() < 1e-6);
        assert_eq!(long.a, 1.0);

        let with_alpha = Color::from_hex("#FF004080").unwrap();
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn hex_parse_rejects_garbage() {
        assert_eq!(Color::from_hex("#07070"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn css_emission_keeps_fractional_alpha() {
        let c = Color::rgba(1.0, 0.0, 0.25, 0.035);
        assert_eq!(c.to_css(), "rgba(255,0,64,0.035)");
    }

    #[test]
    fn ember_base_gradient_has_three_stops() {
        let theme = BackdropTheme::ember();
        assert_eq!(theme.base.len(), 3);
        assert_eq!(theme.base[1].offset, 0.4);
        // Spotlight layer must never be able to reach full opacity
        assert!(theme.spotlight_core.a < 0.1);
        assert_eq!(theme.spotlight_edge.a, 0.0);
    }
}
