//! Stroke and fill styling for committed shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{NumericError, ShapeError};

/// Default stroke width for recognized shapes
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// RGBA color with components normalized to `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Create a color, rejecting NaN or out-of-range components
    pub fn try_rgba(r: f64, g: f64, b: f64, a: f64) -> Result<Color, ShapeError> {
        let color = Color { r, g, b, a };
        color.validate()?;
        Ok(color)
    }

    /// Create a color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        let n = |c: u8| f64::from(c) / 255.0;
        Color { r: n(r), g: n(g), b: n(b), a: n(a) }
    }

    /// Check every component lies in `0.0..=1.0`
    pub fn validate(&self) -> Result<(), ShapeError> {
        for (component, value) in [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)] {
            let cause = if value.is_nan() {
                NumericError::NaN
            } else if !(0.0..=1.0).contains(&value) {
                NumericError::OutOfRange { value, min: 0.0, max: 1.0 }
            } else {
                continue;
            };
            return Err(ShapeError::ColorComponent { component, cause });
        }
        Ok(())
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex(&self) -> String {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if c(self.a) == 255 {
            format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b), c(self.a))
        }
    }
}

impl FromStr for Color {
    type Err = ShapeError;

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ShapeError::HexColor { input: s.to_string() };
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| err())
        };
        match hex.len() {
            3 => Ok(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            6 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Visual style of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub stroke_color: Color,
    stroke_width: f64,
    pub fill_color: Option<Color>,
}

impl Default for Style {
    /// Black stroke, width 3, unfilled
    fn default() -> Self {
        Style {
            stroke_color: Color::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_color: None,
        }
    }
}

impl Style {
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Replace the stroke width; it must be positive and finite
    pub fn with_stroke_width(mut self, width: f64) -> Result<Self, ShapeError> {
        self.set_stroke_width(width)?;
        Ok(self)
    }

    pub fn set_stroke_width(&mut self, width: f64) -> Result<(), ShapeError> {
        let cause = if width.is_nan() {
            NumericError::NaN
        } else if width.is_infinite() {
            NumericError::Infinite
        } else if width <= 0.0 {
            NumericError::NotPositive { value: width }
        } else {
            self.stroke_width = width;
            return Ok(());
        };
        Err(ShapeError::StrokeWidth(cause))
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_fill(mut self, color: Option<Color>) -> Self {
        self.fill_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_black_width_three_unfilled() {
        let style = Style::default();
        assert_eq!(style.stroke_color, Color::BLACK);
        assert_eq!(style.stroke_width(), 3.0);
        assert_eq!(style.fill_color, None);
    }

    #[test]
    fn stroke_width_must_be_positive() {
        assert!(Style::default().with_stroke_width(1.5).is_ok());
        assert!(matches!(
            Style::default().with_stroke_width(0.0),
            Err(ShapeError::StrokeWidth(NumericError::NotPositive { .. }))
        ));
        assert!(matches!(
            Style::default().with_stroke_width(f64::NAN),
            Err(ShapeError::StrokeWidth(NumericError::NaN))
        ));
    }

    #[test]
    fn color_components_are_validated() {
        assert!(Color::try_rgba(0.2, 0.4, 0.6, 1.0).is_ok());
        assert!(matches!(
            Color::try_rgba(0.2, 1.4, 0.6, 1.0),
            Err(ShapeError::ColorComponent { component: "g", .. })
        ));
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!("#000".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("ffffff".parse::<Color>().unwrap(), Color::WHITE);
        let translucent: Color = "#ff000080".parse().unwrap();
        assert_eq!(translucent.r, 1.0);
        assert_eq!(translucent.to_hex(), "#ff000080");
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
    }

    #[test]
    fn hex_round_trip() {
        let c = Color::from_rgba8(0x12, 0xab, 0xef, 0xff);
        assert_eq!(c.to_hex(), "#12abef");
        assert_eq!(c.to_hex().parse::<Color>().unwrap(), c);
    }
}
