//! Weather condition codes as reported by Open-Meteo (`weathercode`).
//!
//! See <https://open-meteo.com/en/docs#weathervariables> for the scheme.

use serde::Serialize;

/// Human-readable description and icon for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeatherDescriptor {
    pub description: &'static str,
    pub icon: &'static str,
}

impl WeatherDescriptor {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

/// Returned for any code outside [`WEATHER_CODES`].
pub const UNKNOWN_WEATHER: WeatherDescriptor = WeatherDescriptor::new("Unknown", "❓");

/// Known codes, in ascending order.
pub const WEATHER_CODES: &[(i32, WeatherDescriptor)] = &[
    (0, WeatherDescriptor::new("Clear", "☀️")),
    (1, WeatherDescriptor::new("Mostly clear", "🌤️")),
    (2, WeatherDescriptor::new("Partly cloudy", "⛅")),
    (3, WeatherDescriptor::new("Overcast", "☁️")),
    (45, WeatherDescriptor::new("Fog", "🌫️")),
    (48, WeatherDescriptor::new("Rime fog", "🌫️")),
    (51, WeatherDescriptor::new("Light drizzle", "🌦️")),
    (53, WeatherDescriptor::new("Moderate drizzle", "🌦️")),
    (55, WeatherDescriptor::new("Heavy drizzle", "🌦️")),
    (61, WeatherDescriptor::new("Light rain", "🌧️")),
    (63, WeatherDescriptor::new("Moderate rain", "🌧️")),
    (65, WeatherDescriptor::new("Heavy rain", "🌧️")),
    (71, WeatherDescriptor::new("Light snow", "🌨️")),
    (73, WeatherDescriptor::new("Moderate snow", "🌨️")),
    (75, WeatherDescriptor::new("Heavy snow", "🌨️")),
    (80, WeatherDescriptor::new("Light showers", "🌧️")),
    (81, WeatherDescriptor::new("Moderate showers", "🌧️")),
    (82, WeatherDescriptor::new("Heavy showers", "🌧️")),
    (95, WeatherDescriptor::new("Thunderstorm", "⛈️")),
    (96, WeatherDescriptor::new("Thunderstorm with light hail", "⛈️")),
    (99, WeatherDescriptor::new("Thunderstorm with heavy hail", "⛈️")),
];

/// Map a weather code to its descriptor, falling back to [`UNKNOWN_WEATHER`].
pub fn resolve_weather(code: i32) -> WeatherDescriptor {
    WEATHER_CODES
        .binary_search_by_key(&code, |(c, _)| *c)
        .map(|idx| WEATHER_CODES[idx].1)
        .unwrap_or(UNKNOWN_WEATHER)
}

/// Iterate every code the resolver knows about.
pub fn known_codes() -> impl Iterator<Item = (i32, WeatherDescriptor)> {
    WEATHER_CODES.iter().copied()
}
