//! Condition classification - free text to a closed category set

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sky condition derived from the NEA free-text forecast description.
///
/// Drives card accents, glyphs, and the headline gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Sky {
    Thunderstorm,
    Showers,
    Rainy,
    Cloudy,
    PartlyCloudy,
    Windy,
    Sunny,
}

impl Sky {
    /// Classify a forecast description by case-insensitive substring match.
    ///
    /// Categories are tried in this order and the first match wins; the order
    /// is a contract, not an accident. "Thundery Showers" is a thunderstorm,
    /// never showers, and "Partly Cloudy" never falls into the plain cloudy
    /// bucket. Every input maps to exactly one category; unmatched text is
    /// sunny.
    pub fn classify(description: &str) -> Sky {
        let text = description.to_lowercase();

        if text.contains("thundery") || text.contains("thunderstorm") {
            Sky::Thunderstorm
        } else if text.contains("shower") {
            Sky::Showers
        } else if text.contains("rain") {
            Sky::Rainy
        } else if text.contains("cloudy") && !text.contains("partly") {
            Sky::Cloudy
        } else if text.contains("partly cloudy") || text.contains("fair") {
            Sky::PartlyCloudy
        } else if text.contains("windy") {
            Sky::Windy
        } else {
            Sky::Sunny
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sky::Thunderstorm => "thunderstorm",
            Sky::Showers => "showers",
            Sky::Rainy => "rainy",
            Sky::Cloudy => "cloudy",
            Sky::PartlyCloudy => "partly cloudy",
            Sky::Windy => "windy",
            Sky::Sunny => "sunny",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Sky::Thunderstorm => "⛈",
            Sky::Showers => "🌦",
            Sky::Rainy => "🌧",
            Sky::Cloudy => "☁",
            Sky::PartlyCloudy => "⛅",
            Sky::Windy => "🌬",
            Sky::Sunny => "☀",
        }
    }

    /// Accent color for card borders and condition text.
    pub fn accent(self) -> Color {
        match self {
            Sky::Thunderstorm => Color::Rgb(170, 120, 255),
            Sky::Showers => Color::Rgb(110, 170, 255),
            Sky::Rainy => Color::Rgb(90, 140, 230),
            Sky::Cloudy => Color::Rgb(150, 150, 160),
            Sky::PartlyCloudy => Color::Rgb(200, 190, 140),
            Sky::Windy => Color::Rgb(130, 210, 200),
            Sky::Sunny => Color::Rgb(250, 200, 80),
        }
    }

    /// Gradient endpoints for the headline fill.
    pub fn gradient(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            Sky::Thunderstorm => ((120, 80, 200), (60, 60, 120)),
            Sky::Showers => ((80, 140, 230), (140, 200, 255)),
            Sky::Rainy => ((70, 110, 200), (110, 150, 220)),
            Sky::Cloudy => ((130, 130, 145), (190, 190, 200)),
            Sky::PartlyCloudy => ((235, 210, 130), (160, 180, 210)),
            Sky::Windy => ((110, 200, 190), (180, 240, 230)),
            Sky::Sunny => ((250, 190, 70), (255, 230, 140)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thundery_showers_is_thunderstorm_not_showers() {
        assert_eq!(Sky::classify("Thundery Showers"), Sky::Thunderstorm);
        assert_eq!(
            Sky::classify("Late Morning and Early Afternoon Thundery Showers"),
            Sky::Thunderstorm
        );
    }

    #[test]
    fn showers_before_rain() {
        assert_eq!(Sky::classify("Passing Showers"), Sky::Showers);
        assert_eq!(Sky::classify("Heavy Showers"), Sky::Showers);
    }

    #[test]
    fn rain_without_showers() {
        assert_eq!(Sky::classify("Light Rain"), Sky::Rainy);
        assert_eq!(Sky::classify("Moderate Rain"), Sky::Rainy);
    }

    #[test]
    fn partly_cloudy_never_plain_cloudy() {
        assert_eq!(Sky::classify("Partly Cloudy"), Sky::PartlyCloudy);
        assert_eq!(Sky::classify("Partly Cloudy (Day)"), Sky::PartlyCloudy);
        assert_eq!(Sky::classify("Cloudy"), Sky::Cloudy);
    }

    #[test]
    fn fair_maps_to_partly_cloudy() {
        assert_eq!(Sky::classify("Fair (Day)"), Sky::PartlyCloudy);
        assert_eq!(Sky::classify("Fair & Warm"), Sky::PartlyCloudy);
    }

    #[test]
    fn windy_and_default() {
        assert_eq!(Sky::classify("Windy"), Sky::Windy);
        assert_eq!(Sky::classify("Sunny"), Sky::Sunny);
        // Total: anything unmatched lands on sunny
        assert_eq!(Sky::classify("Slightly Hazy"), Sky::Sunny);
        assert_eq!(Sky::classify(""), Sky::Sunny);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(Sky::classify("THUNDERY SHOWERS"), Sky::Thunderstorm);
        assert_eq!(Sky::classify("partly cloudy"), Sky::PartlyCloudy);
    }
}
