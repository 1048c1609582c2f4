use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    Config,
    error::{FetchError, LookupError},
    model::{Observation, Place},
};

pub mod forecast;
pub mod geocoding;

pub use forecast::ForecastClient;
pub use geocoding::GeocodingClient;

/// Resolves a free-text place name to coordinates.
#[async_trait]
pub trait Locator: Send + Sync + Debug {
    async fn locate(&self, city: &str) -> Result<Place, LookupError>;
}

/// Retrieves the current conditions at a coordinate.
#[async_trait]
pub trait ConditionsFetcher: Send + Sync + Debug {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Observation, FetchError>;
}

/// Shared HTTP client with the configured request timeout.
pub fn http_client(config: &Config) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("cityweather/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))
}

/// Construct both Open-Meteo clients from config, sharing one connection pool.
pub fn open_meteo_from_config(
    config: &Config,
) -> anyhow::Result<(GeocodingClient, ForecastClient)> {
    config.validate()?;
    let http = http_client(config)?;

    Ok((
        GeocodingClient::new(http.clone(), config.geocoding_url.clone()),
        ForecastClient::new(http, config.forecast_url.clone()),
    ))
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
