use std::fmt;

use skylook_core::{
    MapMarker, MapView, WeatherReport,
    condition::{WeatherDescriptor, known_codes},
};

/// Terminal layout of one report.
struct ReportText<'a> {
    report: &'a WeatherReport,
    marker: MapMarker,
    view: MapView,
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "Weather for {}", report.location.display_name())?;
        if let Some(tz) = &report.timezone {
            writeln!(f, "Timezone: {tz}")?;
        }
        writeln!(f)?;

        let WeatherDescriptor { description, icon } = report.current_weather;
        writeln!(f, "Current weather")?;
        writeln!(f, "  {description} {icon}  {:.1}°C", report.current.temperature_c)?;
        if let Some(wind) = report.current.windspeed_kmh {
            writeln!(f, "  Wind: {wind} km/h")?;
        }
        writeln!(f)?;

        let marker = &self.marker;
        writeln!(f, "Map")?;
        writeln!(
            f,
            "  Marker at {} ({} m, {} {})",
            marker.position,
            marker.radius_m,
            marker.color,
            marker.color.to_hex()
        )?;
        writeln!(f, "  Tooltip: {}", marker.tooltip)?;
        writeln!(
            f,
            "  View: center {}, zoom {}, pitch {}",
            self.view.center, self.view.zoom, self.view.pitch
        )?;

        if !report.daily.is_empty() {
            writeln!(f)?;
            writeln!(f, "Daily forecast")?;
            for day in &report.daily {
                writeln!(
                    f,
                    "  {}  {}  {:.0}° / {:.0}°",
                    day.date.format("%a"),
                    day.descriptor().icon,
                    day.max_c,
                    day.min_c
                )?;
            }
        }

        Ok(())
    }
}

/// Render a report for the terminal.
///
/// Returns the text and the view after the interaction: recentered on the
/// looked-up location, with any earlier selection kept.
pub fn render(report: &WeatherReport, view: MapView) -> (String, MapView) {
    let view = view.centered_on(report.location.coordinates);
    let text = ReportText {
        report,
        marker: MapMarker::for_report(report),
        view,
    };
    (text.to_string(), view)
}

/// Machine-readable form of what [`render`] prints.
pub fn render_json(report: &WeatherReport, view: MapView) -> anyhow::Result<(String, MapView)> {
    let view = view.centered_on(report.location.coordinates);
    let value = serde_json::json!({
        "report": report,
        "marker": MapMarker::for_report(report),
        "view": view,
    });
    Ok((serde_json::to_string_pretty(&value)?, view))
}

/// Table of every known weather code.
pub fn render_codes() -> String {
    known_codes()
        .map(|(code, WeatherDescriptor { description, icon })| {
            format!("{code:>3}  {icon}  {description}\n")
        })
        .collect()
}
