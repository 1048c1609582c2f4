use std::{path::Path, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{Config, Key, Presenter, Trigger, UiState, provider::open_meteo_from_config};
use inquire::{CustomType, CustomUserError, InquireError, Text, validator::Validation};
use tracing::{debug, warn};

use crate::view::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name; falls back to the configured default city.
        city: Vec<String>,
    },

    /// Look up cities interactively; Enter searches, Esc quits.
    Search,

    /// Edit the default city, request timeout and endpoints.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Show { city } => show(&Config::load()?, &city).await,
            Command::Search => search(&Config::load()?).await,
            Command::Configure => configure(config_or_default(&Config::config_file_path()?)),
        }
    }
}

/// Config to start `configure` from. A file that fails to load is replaced
/// rather than blocking the command that repairs it.
fn config_or_default(path: &Path) -> Config {
    Config::load_from(path).unwrap_or_else(|err| {
        warn!("{err:#}; starting from default settings");
        Config::default()
    })
}

fn positive_timeout(secs: &u64) -> Result<Validation, CustomUserError> {
    if *secs > 0 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Timeout must be at least one second".into()))
    }
}

/// The city to search for: arguments first, then the configured default.
fn city_input(config: &Config, args: &[String]) -> String {
    if args.is_empty() {
        config.default_city.clone().unwrap_or_default()
    } else {
        args.join(" ")
    }
}

async fn show(config: &Config, args: &[String]) -> anyhow::Result<ExitCode> {
    let (locator, fetcher) = open_meteo_from_config(config)?;
    let mut presenter = Presenter::new(locator, fetcher, TerminalView::one_shot());

    let city = city_input(config, args);
    debug!(city = city.as_str(), "showing weather");
    let state = presenter.handle(Trigger::SearchButton, &city).await;

    Ok(match state {
        UiState::Success(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn search(config: &Config) -> anyhow::Result<ExitCode> {
    let (locator, fetcher) = open_meteo_from_config(config)?;
    let mut presenter = Presenter::new(locator, fetcher, TerminalView::interactive());

    loop {
        let mut prompt = Text::new("City:");
        if let Some(city) = &config.default_city {
            prompt = prompt.with_placeholder(city);
        }

        match prompt.prompt() {
            Ok(input) => {
                presenter.handle(Trigger::Key(Key::Enter), &input).await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn configure(mut config: Config) -> anyhow::Result<ExitCode> {
    let current_city = config.default_city.clone().unwrap_or_default();
    let city = Text::new("Default city (blank for none):")
        .with_initial_value(&current_city)
        .prompt()
        .context("Failed to read default city")?;
    config.set_default_city(&city);

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .with_validator(positive_timeout)
        .prompt()
        .context("Failed to read timeout")?;

    let geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&config.geocoding_url)
        .prompt()
        .context("Failed to read geocoding endpoint")?;
    config.geocoding_url = geocoding_url;

    let forecast_url = Text::new("Forecast endpoint:")
        .with_default(&config.forecast_url)
        .prompt()
        .context("Failed to read forecast endpoint")?;
    config.forecast_url = forecast_url;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(ExitCode::SUCCESS)
}
