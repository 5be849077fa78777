//! Temperature to overlay color classification.

use serde::Serialize;
use std::fmt;

/// Four-channel color, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Overlay alpha shared by every band.
pub const BAND_ALPHA: u8 = 160;

pub const BLUE: Rgba = Rgba::new(0, 0, 255, BAND_ALPHA);
pub const LIGHT_BLUE: Rgba = Rgba::new(100, 149, 237, BAND_ALPHA);
pub const GREEN: Rgba = Rgba::new(0, 255, 0, BAND_ALPHA);
pub const YELLOW: Rgba = Rgba::new(255, 255, 0, BAND_ALPHA);
pub const ORANGE: Rgba = Rgba::new(255, 165, 0, BAND_ALPHA);
pub const RED: Rgba = Rgba::new(255, 0, 0, BAND_ALPHA);

/// `(inclusive upper bound in °C, color)`, checked in order.
pub const TEMPERATURE_BANDS: &[(f64, Rgba)] = &[
    (0.0, BLUE),
    (10.0, LIGHT_BLUE),
    (20.0, GREEN),
    (25.0, YELLOW),
    (30.0, ORANGE),
];

/// Color for temperatures above every band, and for NaN.
pub const HOTTEST: Rgba = RED;

/// Classify a Celsius temperature into its overlay color.
pub fn map_temperature_color(temp_c: f64) -> Rgba {
    TEMPERATURE_BANDS
        .iter()
        .find(|(upper, _)| temp_c <= *upper)
        .map(|(_, color)| *color)
        .unwrap_or(HOTTEST)
}
