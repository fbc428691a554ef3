use crate::{
    core::constants::{MARKER_FILL_OPACITY, MARKER_STROKE_OPACITY, MARKER_STROKE_WEIGHT},
    Error, Result,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// An opaque RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| Error::ParseError(format!("color '{}' must start with '#'", s)))?;
        if digits.len() != 6 {
            return Err(Error::ParseError(format!(
                "color '{}' must have six hex digits",
                s
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| Error::ParseError(format!("invalid color '{}': {}", s, e)))?;
        Ok(Self::from_hex(value))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Path options of an earthquake circle marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Radius in screen pixels
    pub radius: f64,
    pub fill_color: Color,
    /// Border color
    pub stroke_color: Color,
    /// Border width
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Style with the same fill and stroke color and the fixed weights and opacities.
    pub fn new(radius: f64, color: Color) -> Self {
        Self {
            radius,
            fill_color: color,
            stroke_color: color,
            stroke_weight: MARKER_STROKE_WEIGHT,
            stroke_opacity: MARKER_STROKE_OPACITY,
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }

    /// A marker with a non-positive or non-finite radius draws nothing.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    /// Leaflet `CircleMarker` path options.
    pub fn to_leaflet_options(&self) -> serde_json::Value {
        serde_json::json!({
            "radius": self.radius,
            "fillColor": self.fill_color,
            "color": self.stroke_color,
            "weight": self.stroke_weight,
            "opacity": self.stroke_opacity,
            "fillOpacity": self.fill_opacity,
        })
    }
}
