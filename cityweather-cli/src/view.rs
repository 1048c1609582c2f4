use cityweather_core::{Frame, Panel, View, WeatherCard};

/// Prints each frame to the terminal.
///
/// Progress and errors go to stderr, the result card to stdout.
#[derive(Debug)]
pub struct TerminalView {
    show_prompt: bool,
}

impl TerminalView {
    pub fn one_shot() -> Self {
        Self { show_prompt: false }
    }

    pub fn interactive() -> Self {
        Self { show_prompt: true }
    }
}

impl View for TerminalView {
    fn render(&mut self, frame: &Frame) {
        match &frame.panel {
            Panel::Idle => {
                if self.show_prompt {
                    eprintln!("Type a city name and press Enter (Esc to quit).");
                }
            }
            Panel::Loading => eprintln!("Loading..."),
            Panel::Error(message) => eprintln!("{message}"),
            Panel::Result(card) => {
                for line in card_lines(card) {
                    println!("{line}");
                }
            }
        }
    }
}

pub fn card_lines(card: &WeatherCard) -> Vec<String> {
    let mut lines = vec![
        card.city.clone(),
        format!("  Temperature: {}", card.temperature),
        format!("  Conditions:  {}", card.description),
        format!("  Humidity:    {}", card.humidity),
        format!("  Wind:        {}", card.wind),
    ];
    if let Some(at) = &card.observed_at {
        lines.push(format!("  Observed:    {at} (local time)"));
    }
    lines
}
