//! Sequencing of a single lookup: resolve the location, then fetch its forecast.

use chrono::Utc;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::{Coordinates, Location, LocationQuery, WeatherReport},
    provider::{ForecastSource, Geocoder, NominatimClient, OpenMeteoClient, ReverseGeocoder},
};

#[derive(Debug)]
pub struct WeatherLookup {
    geocoder: Box<dyn Geocoder>,
    reverse_geocoder: Box<dyn ReverseGeocoder>,
    forecasts: Box<dyn ForecastSource>,
}

impl WeatherLookup {
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        reverse_geocoder: Box<dyn ReverseGeocoder>,
        forecasts: Box<dyn ForecastSource>,
    ) -> Self {
        Self {
            geocoder,
            reverse_geocoder,
            forecasts,
        }
    }

    /// Open-Meteo for geocoding and forecasts, Nominatim for reverse geocoding.
    pub fn from_config(config: &Config) -> Result<Self> {
        let open_meteo = OpenMeteoClient::from_config(config)?;
        Ok(Self::new(
            Box::new(open_meteo.clone()),
            Box::new(NominatimClient::from_config(config)?),
            Box::new(open_meteo),
        ))
    }

    pub async fn lookup(&self, query: &LocationQuery) -> Result<WeatherReport> {
        let location = self.resolve(query).await?;
        tracing::info!(
            name = %location.name,
            coordinates = %location.coordinates,
            "resolved location"
        );

        let forecast = self.forecasts.forecast(&location.coordinates).await?;

        Ok(WeatherReport::new(location, forecast, Utc::now()))
    }

    async fn resolve(&self, query: &LocationQuery) -> Result<Location> {
        match query {
            LocationQuery::City(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(WeatherError::InvalidInput("city name must not be empty".into()));
                }
                self.geocoder.search(name).await
            }
            LocationQuery::Point(point) => Ok(self.locate_point(*point).await),
        }
    }

    /// A picked point always yields a location; the name degrades to the coordinates.
    async fn locate_point(&self, point: Coordinates) -> Location {
        let name = match self.reverse_geocoder.reverse(point).await {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(error = %e, "reverse geocoding failed, using coordinates");
                point.to_string()
            }
        };

        Location {
            name,
            country_code: None,
            coordinates: point,
        }
    }
}
