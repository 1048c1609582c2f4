use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::{LookupError, UnexpectedFailure},
    model::Place,
};

use super::{Locator, truncate_body};

/// Open-Meteo geocoding search.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    endpoint: String,
}

impl GeocodingClient {
    pub fn new(http: Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[async_trait]
impl Locator for GeocodingClient {
    #[instrument(skip(self))]
    async fn locate(&self, city: &str) -> Result<Place, LookupError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("name", city)])
            .send()
            .await
            .map_err(UnexpectedFailure::from)?;

        let status = res.status();
        let body = res.text().await.map_err(UnexpectedFailure::from)?;
        debug!(%status, body = truncate_body(&body), "geocoding response");

        let parsed: GeoResponse = serde_json::from_str(&body).map_err(UnexpectedFailure::from)?;

        if !status.is_success() {
            return Err(LookupError::NotFound(city.to_string()));
        }

        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| LookupError::NotFound(city.to_string()))?;

        Ok(Place {
            display_name: first.name,
            latitude: first.latitude,
            longitude: first.longitude,
        })
    }
}
