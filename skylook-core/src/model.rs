use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    color::{Rgba, map_temperature_color},
    condition::{WeatherDescriptor, resolve_weather},
    error::{Result, WeatherError},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validated constructor for coordinates coming from the user.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::InvalidInput(format!(
                "latitude {latitude} is outside -90..=90"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidInput(format!(
                "longitude {longitude} is outside -180..=180"
            )));
        }
        Ok(Self { latitude, longitude })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country_code: Option<String>,
    pub coordinates: Coordinates,
}

impl Location {
    /// "Seoul, KR", or just the name when the country is unknown.
    pub fn display_name(&self) -> String {
        match self.country_code.as_deref() {
            Some(cc) if !cc.is_empty() => format!("{}, {}", self.name, cc),
            _ => self.name.clone(),
        }
    }
}

/// What the user asked for: a typed city, or a picked point.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Point(Coordinates),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub weather_code: i32,
    pub windspeed_kmh: Option<f64>,
    /// Local time of the observation, as reported by the service.
    pub time: Option<String>,
}

impl CurrentConditions {
    pub fn descriptor(&self) -> WeatherDescriptor {
        resolve_weather(self.weather_code)
    }

    pub fn color(&self) -> Rgba {
        map_temperature_color(self.temperature_c)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub max_c: f64,
    pub min_c: f64,
}

impl DailyForecast {
    pub fn descriptor(&self) -> WeatherDescriptor {
        resolve_weather(self.weather_code)
    }
}

/// Forecast data as returned by a [`crate::provider::ForecastSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub timezone: Option<String>,
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

/// Everything the presentation layer needs for one lookup.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: Location,
    pub timezone: Option<String>,
    pub current: CurrentConditions,
    pub current_weather: WeatherDescriptor,
    pub current_color: Rgba,
    pub daily: Vec<DailyForecast>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn new(location: Location, forecast: Forecast, fetched_at: DateTime<Utc>) -> Self {
        Self {
            current_weather: forecast.current.descriptor(),
            current_color: forecast.current.color(),
            location,
            timezone: forecast.timezone,
            current: forecast.current,
            daily: forecast.daily,
            fetched_at,
        }
    }
}
