//! Open-Meteo geocoding and forecast APIs (no API key needed).

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::{Coordinates, CurrentConditions, DailyForecast, Forecast, Location},
};

use super::{ForecastSource, Geocoder, build_http_client, get_json};

const GEOCODING: &str = "Open-Meteo geocoding";
const FORECAST: &str = "Open-Meteo forecast";

const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
    language: String,
    forecast_days: u8,
}

impl OpenMeteoClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: build_http_client(config.timeout())?,
            geocoding_url: config.endpoints.geocoding.clone(),
            forecast_url: config.endpoints.forecast.clone(),
            language: config.language.clone(),
            forecast_days: config.forecast_days,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    // Absent entirely when nothing matches.
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    timezone: Option<String>,
    current_weather: OmCurrentWeather,
    daily: OmDaily,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    weathercode: i32,
    windspeed: Option<f64>,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    weathercode: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

impl OmDaily {
    fn into_days(self) -> Result<Vec<DailyForecast>> {
        let n = self.time.len();
        if self.weathercode.len() != n
            || self.temperature_2m_max.len() != n
            || self.temperature_2m_min.len() != n
        {
            return Err(WeatherError::parse(
                FORECAST,
                format!(
                    "daily arrays have mismatched lengths \
                     (time={}, weathercode={}, max={}, min={})",
                    n,
                    self.weathercode.len(),
                    self.temperature_2m_max.len(),
                    self.temperature_2m_min.len()
                ),
            ));
        }

        let days = self
            .time
            .into_iter()
            .zip(self.weathercode)
            .zip(self.temperature_2m_max.into_iter().zip(self.temperature_2m_min))
            .map(|((date, weather_code), (max_c, min_c))| DailyForecast {
                date,
                weather_code,
                max_c,
                min_c,
            })
            .collect();

        Ok(days)
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    async fn search(&self, name: &str) -> Result<Location> {
        let query = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", self.language.clone()),
            ("format", "json".to_string()),
        ];

        let parsed: GeoResponse =
            get_json(&self.http, GEOCODING, &self.geocoding_url, &query).await?;

        let hit = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound(name.to_string()))?;

        let coordinates = Coordinates::new(hit.latitude, hit.longitude)
            .map_err(|e| WeatherError::parse(GEOCODING, e.to_string()))?;

        Ok(Location {
            name: hit.name,
            country_code: hit.country_code,
            coordinates,
        })
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    async fn forecast(&self, point: &Coordinates) -> Result<Forecast> {
        let query = [
            ("latitude", point.latitude.to_string()),
            ("longitude", point.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ];

        let parsed: OmForecastResponse =
            get_json(&self.http, FORECAST, &self.forecast_url, &query).await?;

        let current = CurrentConditions {
            temperature_c: parsed.current_weather.temperature,
            weather_code: parsed.current_weather.weathercode,
            windspeed_kmh: parsed.current_weather.windspeed,
            time: parsed.current_weather.time,
        };

        Ok(Forecast {
            timezone: parsed.timezone,
            current,
            daily: parsed.daily.into_days()?,
        })
    }
}
