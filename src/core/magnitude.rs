//! Magnitude classification and visual encoding.
//!
//! Every earthquake marker is colored by the first [`ColorBand`] whose closed
//! range contains its magnitude. Adjacent bands share their boundary value, and
//! bands are tested in ascending order, so a magnitude sitting exactly on a
//! boundary takes the lower band's color.

use crate::{
    core::constants::RADIUS_PER_MAGNITUDE,
    ui::style::{Color, MarkerStyle},
};

/// A closed magnitude range mapped to a fixed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub lower: f64,
    pub upper: f64,
    pub color: Color,
}

impl ColorBand {
    const fn new(lower: f64, upper: f64, color: u32) -> Self {
        Self {
            lower,
            upper,
            color: Color::from_hex(color),
        }
    }

    /// Both endpoints are inclusive.
    pub fn contains(&self, magnitude: f64) -> bool {
        self.lower <= magnitude && magnitude <= self.upper
    }
}

/// Bands in ascending order.
pub static COLOR_BANDS: [ColorBand; 5] = [
    ColorBand::new(1.0, 2.5, 0x7CFC00),
    ColorBand::new(2.5, 4.0, 0xAAFF00),
    ColorBand::new(4.0, 5.5, 0xFFFF00),
    ColorBand::new(5.5, 8.0, 0xFFA500),
    ColorBand::new(8.0, 20.0, 0xFF0000),
];

/// Color of magnitudes outside every band (including NaN).
pub const DEFAULT_COLOR: Color = Color::from_hex(0xE2FFAE);

/// First band containing `magnitude`.
pub fn band_for(magnitude: f64) -> Option<&'static ColorBand> {
    COLOR_BANDS.iter().find(|band| band.contains(magnitude))
}

pub fn color_for(magnitude: f64) -> Color {
    band_for(magnitude)
        .map(|band| band.color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Marker radius in pixels. Not clamped: zero and negative magnitudes give
/// degenerate radii which the assembler drops.
pub fn radius_for(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

pub fn marker_style(magnitude: f64) -> MarkerStyle {
    MarkerStyle::new(radius_for(magnitude), color_for(magnitude))
}
