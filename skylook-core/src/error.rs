use thiserror::Error;

/// Errors surfaced by a weather lookup.
///
/// The pure classifiers in [`crate::condition`] and [`crate::color`] never
/// produce these; only the HTTP layer, user input and configuration do.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure: DNS, connect, TLS or timeout.
    #[error("Request to {service} failed: {source}")]
    Network {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Geocoding returned an empty result set.
    #[error("Could not find a location named '{0}'. Check the spelling of the city name.")]
    NotFound(String),

    #[error("Unexpected response from {service}: {message}")]
    Parse {
        service: &'static str,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeatherError {
    pub(crate) fn network(service: &'static str, source: reqwest::Error) -> Self {
        Self::Network { service, source }
    }

    pub(crate) fn parse(service: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            service,
            message: message.into(),
        }
    }

    /// Whether this error means the location simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

/// Cut a response body down to something that fits in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
