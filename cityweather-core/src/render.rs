//! Projection of [`UiState`] onto what the user sees.

use crate::{model::WeatherReport, state::UiState};

/// Humidity is not part of the current-conditions block.
pub const HUMIDITY_PLACEHOLDER: &str = "N/A%";

/// The display regions of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Prompt,
    Spinner,
    Error,
    Result,
}

impl Region {
    pub const fn all() -> &'static [Region] {
        &[Region::Prompt, Region::Spinner, Region::Error, Region::Result]
    }
}

/// Formatted contents of the result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    pub city: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub observed_at: Option<String>,
}

impl From<&WeatherReport> for WeatherCard {
    fn from(report: &WeatherReport) -> Self {
        let obs = &report.observation;
        WeatherCard {
            city: report.place.display_name.clone(),
            temperature: format_temperature(obs.temperature_c),
            description: report.description.clone(),
            humidity: HUMIDITY_PLACEHOLDER.to_string(),
            wind: format!("{} km/h", obs.wind_speed_kmh),
            observed_at: obs
                .observed_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// The single panel shown for a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Idle,
    Loading,
    Error(String),
    Result(WeatherCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub panel: Panel,
}

impl Frame {
    pub fn region(&self) -> Region {
        match self.panel {
            Panel::Idle => Region::Prompt,
            Panel::Loading => Region::Spinner,
            Panel::Error(_) => Region::Error,
            Panel::Result(_) => Region::Result,
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.region() == region
    }

    pub fn visible_regions(&self) -> Vec<Region> {
        Region::all()
            .iter()
            .copied()
            .filter(|r| self.is_visible(*r))
            .collect()
    }
}

impl From<&UiState> for Frame {
    fn from(state: &UiState) -> Self {
        let panel = match state {
            UiState::Idle => Panel::Idle,
            UiState::Loading => Panel::Loading,
            UiState::Error(message) => Panel::Error(message.clone()),
            UiState::Success(report) => Panel::Result(WeatherCard::from(report)),
        };
        Frame { panel }
    }
}

/// A render target. Injected into the presenter, which calls it after every
/// state change.
pub trait View {
    fn render(&mut self, frame: &Frame);
}

/// Whole degrees, halves rounded up, e.g. `18.5 -> "19°C"` and `-2.5 -> "-2°C"`.
pub fn format_temperature(celsius: f64) -> String {
    // `f64::round` takes halves away from zero; negative halves go up instead.
    let nearest = celsius.round();
    let rounded = if celsius - nearest == 0.5 {
        nearest + 1.0
    } else {
        nearest
    };
    format!("{}°C", rounded as i64)
}
