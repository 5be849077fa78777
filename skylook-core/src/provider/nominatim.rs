//! Reverse geocoding through Nominatim (OpenStreetMap).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::Coordinates,
};

use super::{ReverseGeocoder, build_http_client, get_json};

const SERVICE: &str = "Nominatim reverse geocoding";

#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: Client,
    url: String,
    language: String,
}

impl NominatimClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            http: build_http_client(config.timeout())?,
            url: config.endpoints.reverse_geocoding.clone(),
            language: config.language.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl NominatimResponse {
    /// "Place, Country", preferring the most specific settlement name.
    fn place_name(self) -> Option<String> {
        let Some(addr) = self.address else {
            return self.display_name.filter(|s| !s.is_empty());
        };

        let country = addr.country.clone();
        let place = addr
            .city
            .or(addr.town)
            .or(addr.village)
            .or(addr.municipality)
            .or(addr.county)
            .or(addr.state)
            .or(addr.country)
            .filter(|s| !s.is_empty())?;

        match country {
            Some(c) if !c.is_empty() && c != place => Some(format!("{place}, {c}")),
            _ => Some(place),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, point: Coordinates) -> Result<String> {
        let query = [
            ("lat", point.latitude.to_string()),
            ("lon", point.longitude.to_string()),
            ("format", "json".to_string()),
            ("zoom", "10".to_string()),
            ("accept-language", self.language.clone()),
        ];

        let parsed: NominatimResponse = get_json(&self.http, SERVICE, &self.url, &query).await?;

        parsed
            .place_name()
            .ok_or_else(|| WeatherError::NotFound(point.to_string()))
    }
}
