//! Map overlay state.
//!
//! [`MapView`] is a plain value: every interaction returns a new view rather
//! than mutating shared state, so the caller owns the view between renders.

use serde::Serialize;

use crate::{color::Rgba, model::Coordinates, model::WeatherReport};

pub const DEFAULT_ZOOM: f64 = 10.0;
pub const DEFAULT_PITCH: f64 = 50.0;
pub const MARKER_RADIUS_M: u32 = 1000;

const SEOUL: Coordinates = Coordinates {
    latitude: 37.5665,
    longitude: 126.9780,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: f64,
    pub pitch: f64,
    /// Last point the user picked, if any.
    pub selected: Option<Coordinates>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: SEOUL,
            zoom: DEFAULT_ZOOM,
            pitch: DEFAULT_PITCH,
            selected: None,
        }
    }
}

impl MapView {
    #[must_use]
    pub fn centered_on(self, center: Coordinates) -> Self {
        Self { center, ..self }
    }

    /// Record a picked point and move the view to it.
    #[must_use]
    pub fn with_click(self, point: Coordinates) -> Self {
        Self {
            center: point,
            selected: Some(point),
            ..self
        }
    }

    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }
}

/// Scatter marker drawn at the looked-up location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinates,
    pub color: Rgba,
    pub radius_m: u32,
    pub tooltip: String,
}

impl MapMarker {
    pub fn for_report(report: &WeatherReport) -> Self {
        Self {
            position: report.location.coordinates,
            color: report.current_color,
            radius_m: MARKER_RADIUS_M,
            tooltip: format!(
                "{}: {:.1}°C, {}",
                report.location.name,
                report.current.temperature_c,
                report.current_weather.description
            ),
        }
    }
}
