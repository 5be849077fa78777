//! Core library for the `skylook` weather lookup CLI.
//!
//! This crate defines:
//! - Weather code and temperature classification (pure, infallible)
//! - Clients for the geocoding and forecast services
//! - The lookup sequence tying them together
//! - Map view state and configuration
//!
//! It is used by `skylook-cli`, but can also be reused by other binaries or services.

pub mod color;
pub mod condition;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod view;

pub use color::{Rgba, map_temperature_color};
pub use condition::{WeatherDescriptor, resolve_weather};
pub use config::Config;
pub use error::WeatherError;
pub use lookup::WeatherLookup;
pub use model::{
    Coordinates, CurrentConditions, DailyForecast, Forecast, Location, LocationQuery,
    WeatherReport,
};
pub use view::{MapMarker, MapView};
