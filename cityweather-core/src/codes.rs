//! WMO weather interpretation codes as reported by Open-Meteo.
//!
//! See <https://open-meteo.com/en/docs> for the full code reference.

pub const UNKNOWN: &str = "Unknown";

const DESCRIPTIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mostly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Drizzle: Light"),
    (53, "Drizzle: Moderate"),
    (55, "Drizzle: Dense intensity"),
    (56, "Freezing Drizzle: Light"),
    (57, "Freezing Drizzle: Dense intensity"),
    (61, "Rain: Slight"),
    (63, "Rain: Moderate"),
    (65, "Rain: Heavy intensity"),
    (66, "Freezing Rain: Light"),
    (67, "Freezing Rain: Heavy intensity"),
    (71, "Snow fall: Slight"),
    (73, "Snow fall: Moderate"),
    (75, "Snow fall: Heavy intensity"),
    (77, "Snow grains"),
    (80, "Rain showers: Slight"),
    (81, "Rain showers: Moderate"),
    (82, "Rain showers: Violent"),
    (85, "Snow showers: Slight"),
    (86, "Snow showers: Heavy"),
    (95, "Thunderstorm: Slight or moderate"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Human-readable text for a condition code, or [`UNKNOWN`].
pub fn weather_description(code: i32) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN)
}

/// All codes with a dedicated description, in ascending order.
pub fn known_codes() -> impl Iterator<Item = i32> {
    DESCRIPTIONS.iter().map(|(code, _)| *code)
}
