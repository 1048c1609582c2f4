use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A geocoded place: the first match returned for a city name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition_code: i32,
    /// Local time of the reading, when the service reports one.
    pub observed_at: Option<NaiveDateTime>,
}

/// Everything the result view needs after a successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub place: Place,
    pub observation: Observation,
    pub description: String,
}

impl WeatherReport {
    pub fn new(place: Place, observation: Observation) -> Self {
        let description = crate::codes::weather_description(observation.condition_code).to_string();
        Self {
            place,
            observation,
            description,
        }
    }
}
