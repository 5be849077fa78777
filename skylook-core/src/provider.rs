use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{fmt::Debug, time::Duration};

use crate::{
    error::{Result, WeatherError, truncate_body},
    model::{Coordinates, Forecast, Location},
};

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimClient;
pub use open_meteo::OpenMeteoClient;

pub const USER_AGENT: &str = concat!("skylook/", env!("CARGO_PKG_VERSION"));

/// Resolves a place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn search(&self, name: &str) -> Result<Location>;
}

/// Resolves coordinates to a human-readable place name.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync + Debug {
    async fn reverse(&self, point: Coordinates) -> Result<String>;
}

#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn forecast(&self, point: &Coordinates) -> Result<Forecast>;
}

pub(crate) fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| WeatherError::Config(format!("Failed to build HTTP client: {e}")))
}

/// GET `url` with `query`, requiring a 2xx status and a JSON body of type `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    service: &'static str,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    tracing::debug!(service, url, ?query, "sending request");

    let res = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| WeatherError::network(service, e))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| WeatherError::network(service, e))?;

    if !status.is_success() {
        tracing::debug!(service, status = status.as_u16(), "request failed");
        return Err(WeatherError::Status {
            service,
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| WeatherError::parse(service, e.to_string()))
}
