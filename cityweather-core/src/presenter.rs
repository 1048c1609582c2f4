use tracing::{debug, error, info};

use crate::{
    error::SearchError,
    model::WeatherReport,
    provider::{ConditionsFetcher, Locator},
    render::{Frame, View},
    state::{Event, UiState, normalize_input},
};

/// Keys the input field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
    Other,
}

/// User actions that may start a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    SearchButton,
    Key(Key),
}

impl Trigger {
    pub fn submits(&self) -> bool {
        matches!(self, Trigger::SearchButton | Trigger::Key(Key::Enter))
    }
}

/// Owns the [`UiState`] and drives the lookup chain.
///
/// The presenter is the only writer of the state. Each change is projected to
/// a [`Frame`] and handed to the injected [`View`].
#[derive(Debug)]
pub struct Presenter<L, F, V> {
    locator: L,
    fetcher: F,
    view: V,
    state: UiState,
}

impl<L, F, V> Presenter<L, F, V>
where
    L: Locator,
    F: ConditionsFetcher,
    V: View,
{
    /// Build a presenter and render the initial idle frame.
    pub fn new(locator: L, fetcher: F, view: V) -> Self {
        let mut presenter = Self {
            locator,
            fetcher,
            view,
            state: UiState::Idle,
        };
        presenter.render();
        presenter
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Route a user action. Only the search button and Enter submit.
    pub async fn handle(&mut self, trigger: Trigger, raw_input: &str) -> &UiState {
        if trigger.submits() {
            self.submit(raw_input).await
        } else {
            &self.state
        }
    }

    /// Run one search for `raw_input` and return the settled state.
    ///
    /// The chain holds `&mut self` until it settles, so the state is never
    /// Loading on entry.
    pub async fn submit(&mut self, raw_input: &str) -> &UiState {
        self.apply(Event::Submit(raw_input));
        if !self.state.is_loading() {
            return &self.state;
        }

        // Loading implies the input was non-blank.
        let city = normalize_input(raw_input).unwrap_or_default();
        let outcome = self.search(city).await;

        if let Err(err) = &outcome {
            if err.is_unexpected() {
                error!(error = %err, city, "error fetching weather data");
            } else {
                info!(error = %err, city, "search failed");
            }
        }

        self.apply(Event::Completed(outcome));
        &self.state
    }

    async fn search(&self, city: &str) -> Result<WeatherReport, SearchError> {
        let place = self.locator.locate(city).await?;
        debug!(?place, "located");

        let observation = self
            .fetcher
            .fetch_current(place.latitude, place.longitude)
            .await?;

        Ok(WeatherReport::new(place, observation))
    }

    fn apply(&mut self, event: Event<'_>) {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(event);
        self.render();
    }

    fn render(&mut self) {
        let frame = Frame::from(&self.state);
        self.view.render(&frame);
    }
}
