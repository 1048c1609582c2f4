//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - City lookup and current-conditions clients (Open-Meteo)
//! - The presenter state machine and its rendering projection
//!
//! It is used by `cityweather-cli`, but any front end that implements
//! [`View`] can drive a [`Presenter`].

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod render;
pub mod state;

pub use codes::weather_description;
pub use config::Config;
pub use error::{FetchError, LookupError, SearchError, UnexpectedFailure};
pub use model::{Observation, Place, WeatherReport};
pub use presenter::{Key, Presenter, Trigger};
pub use provider::{ConditionsFetcher, ForecastClient, GeocodingClient, Locator};
pub use render::{Frame, Panel, Region, View, WeatherCard};
pub use state::{Event, UiState};
