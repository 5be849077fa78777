use anyhow::Context;
use clap::{Parser, Subcommand};
use skylook_core::{
    Config, Coordinates, LocationQuery, MapView, WeatherLookup, config::MAX_FORECAST_DAYS,
    view::DEFAULT_ZOOM,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skylook", version, about = "Weather lookup CLI")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather and the daily forecast for a location.
    Show {
        /// City name in English. Defaults to the configured city.
        #[arg(conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude of a picked point; requires --lon.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of a picked point; requires --lat.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Map zoom level for the overlay view.
        #[arg(long, default_value_t = DEFAULT_ZOOM)]
        zoom: f64,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Interactively edit the configuration file.
    Configure,

    /// List the known weather codes.
    Codes,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show {
                city,
                lat,
                lon,
                zoom,
                json,
            } => {
                let config = Config::load()?;
                let query = build_query(city, lat, lon, &config)?;
                show(&config, &query, initial_view(&query, zoom), json).await?;
            }
            Command::Configure => configure()?,
            Command::Codes => print!("{}", output::render_codes()),
        }

        Ok(())
    }
}

fn build_query(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    config: &Config,
) -> anyhow::Result<LocationQuery> {
    match (city, lat, lon) {
        (Some(city), _, _) => Ok(LocationQuery::City(city)),
        (None, Some(lat), Some(lon)) => Ok(LocationQuery::Point(Coordinates::new(lat, lon)?)),
        _ => Ok(LocationQuery::City(config.default_city.clone())),
    }
}

/// View before the lookup: a picked point counts as a map click.
fn initial_view(query: &LocationQuery, zoom: f64) -> MapView {
    let view = MapView::default().with_zoom(zoom);
    match query {
        LocationQuery::Point(point) => view.with_click(*point),
        LocationQuery::City(_) => view,
    }
}

async fn show(
    config: &Config,
    query: &LocationQuery,
    view: MapView,
    json: bool,
) -> anyhow::Result<()> {
    let lookup = WeatherLookup::from_config(config)?;

    let report = lookup
        .lookup(query)
        .await
        .context("Failed to fetch weather")?;

    let (text, _view) = if json {
        output::render_json(&report, view)?
    } else {
        output::render(&report, view)
    };
    print!("{text}");
    if json {
        println!();
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.default_city = inquire::Text::new("Default city (in English):")
        .with_default(&config.default_city)
        .prompt()?;

    config.language = inquire::Text::new("Language for place names:")
        .with_default(&config.language)
        .prompt()?;

    config.forecast_days = inquire::CustomType::<u8>::new("Days of daily forecast:")
        .with_default(config.forecast_days)
        .with_help_message(&format!("1 to {MAX_FORECAST_DAYS}"))
        .with_validator(|days: &u8| {
            Ok(if (1..=MAX_FORECAST_DAYS).contains(days) {
                inquire::validator::Validation::Valid
            } else {
                inquire::validator::Validation::Invalid(
                    format!("must be between 1 and {MAX_FORECAST_DAYS}").into(),
                )
            })
        })
        .prompt()?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
