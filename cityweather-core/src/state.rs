//! Presenter state and its transition rules.
//!
//! Transitions are pure: [`UiState::apply`] consumes the current state and an
//! [`Event`] and returns the next state. Nothing here touches the network or
//! the screen.

use crate::{error::SearchError, model::WeatherReport};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(WeatherReport),
}

#[derive(Debug)]
pub enum Event<'a> {
    /// The user asked for a search with the raw contents of the input.
    Submit(&'a str),
    /// The lookup chain started by the last accepted `Submit` finished.
    Completed(Result<WeatherReport, SearchError>),
}

impl UiState {
    pub fn apply(self, event: Event<'_>) -> UiState {
        match (self, event) {
            // Submit is disabled while a search is in flight.
            (UiState::Loading, Event::Submit(_)) => UiState::Loading,
            (_, Event::Submit(raw)) => match normalize_input(raw) {
                Some(_) => UiState::Loading,
                None => UiState::Error(SearchError::EmptyInput.user_message().to_string()),
            },
            (UiState::Loading, Event::Completed(Ok(report))) => UiState::Success(report),
            (UiState::Loading, Event::Completed(Err(err))) => {
                UiState::Error(err.user_message().to_string())
            }
            // Nothing was in flight; a stray completion changes nothing.
            (state, Event::Completed(_)) => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            UiState::Success(report) => Some(report),
            _ => None,
        }
    }
}

/// Trim the raw input; `None` when nothing but whitespace remains.
pub fn normalize_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Observation, Place};

    fn report() -> WeatherReport {
        WeatherReport::new(
            Place {
                display_name: "London".into(),
                latitude: 51.5,
                longitude: -0.12,
            },
            Observation {
                temperature_c: 18.4,
                wind_speed_kmh: 12.0,
                condition_code: 2,
                observed_at: None,
            },
        )
    }

    #[test]
    fn initial_state_is_idle() {
        assert_eq!(UiState::default(), UiState::Idle);
    }

    #[test]
    fn blank_submit_is_an_error() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            let next = UiState::Idle.apply(Event::Submit(raw));
            assert_eq!(next.error_message(), Some("Please enter a city name."), "input {raw:?}");
        }
    }

    #[test]
    fn submit_enters_loading_from_any_settled_state() {
        let settled = [
            UiState::Idle,
            UiState::Error("City not found. Please try again.".into()),
            UiState::Success(report()),
        ];
        for state in settled {
            assert!(state.apply(Event::Submit(" London ")).is_loading());
        }
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        assert!(UiState::Loading.apply(Event::Submit("Paris")).is_loading());
        assert!(UiState::Loading.apply(Event::Submit("")).is_loading());
    }

    #[test]
    fn completion_settles_loading() {
        let ok = UiState::Loading.apply(Event::Completed(Ok(report())));
        assert_eq!(ok.report().map(|r| r.description.as_str()), Some("Partly cloudy"));

        let err = UiState::Loading.apply(Event::Completed(Err(SearchError::NotFound)));
        assert_eq!(err.error_message(), Some("City not found. Please try again."));

        let err = UiState::Loading.apply(Event::Completed(Err(SearchError::Unavailable)));
        assert_eq!(
            err.error_message(),
            Some("Failed to fetch weather data. Please try again later.")
        );
    }

    #[test]
    fn stray_completion_is_ignored() {
        let next = UiState::Idle.apply(Event::Completed(Ok(report())));
        assert_eq!(next, UiState::Idle);

        let next = UiState::Error("x".into()).apply(Event::Completed(Err(SearchError::NotFound)));
        assert_eq!(next.error_message(), Some("x"));
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_input("  New York \n"), Some("New York"));
        assert_eq!(normalize_input(" \t "), None);
    }
}
