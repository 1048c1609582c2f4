use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::{FetchError, UnexpectedFailure},
    model::Observation,
};

use super::{ConditionsFetcher, truncate_body};

/// Open-Meteo forecast endpoint, queried for the current-conditions block only.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    endpoint: String,
}

impl ForecastClient {
    pub fn new(http: Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    #[serde(default)]
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
}

impl From<CurrentWeather> for Observation {
    fn from(current: CurrentWeather) -> Self {
        Observation {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            condition_code: current.weathercode,
            observed_at: current.time.as_deref().and_then(parse_local_time),
        }
    }
}

/// Open-Meteo reports local ISO 8601 minutes, e.g. `2024-01-15T12:00`.
fn parse_local_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[async_trait]
impl ConditionsFetcher for ForecastClient {
    #[instrument(skip(self))]
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Observation, FetchError> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
                ("temperature_unit", "celsius"),
                ("windspeed_unit", "kmh"),
                ("precipitation_unit", "mm"),
            ])
            .send()
            .await
            .map_err(UnexpectedFailure::from)?;

        let status = res.status();
        let body = res.text().await.map_err(UnexpectedFailure::from)?;
        debug!(%status, body = truncate_body(&body), "forecast response");

        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(UnexpectedFailure::from)?;

        if !status.is_success() {
            return Err(FetchError::Unavailable);
        }

        parsed
            .current_weather
            .map(Observation::from)
            .ok_or(FetchError::Unavailable)
    }
}
