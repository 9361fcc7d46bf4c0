//! WMO weather code classification.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Display category for a WMO weather code.
///
/// Only `Clear` and `MostlyClear` carry day/night variants; the other
/// categories render the same regardless of `is_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Clear,
    MostlyClear,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    #[default]
    Unknown,
}

impl Condition {
    /// Classify a WMO weather code. Total: unmapped codes (including the
    /// sentinel -1) fall through to `Unknown`.
    pub fn from_weather_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::MostlyClear,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 66 | 67 | 77 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::MostlyClear => "Mostly clear",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Icon asset identifier for this condition.
    pub fn icon_name(self, is_day: bool) -> &'static str {
        match self {
            Self::Clear => {
                if is_day {
                    "clear_day"
                } else {
                    "clear_night"
                }
            }
            Self::MostlyClear => {
                if is_day {
                    "mainly_clear_day"
                } else {
                    "mainly_clear_night"
                }
            }
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow_fall",
            Self::Thunderstorm => "thunderstorm",
            Self::Unknown => "unknown_weather",
        }
    }

    /// Emoji rendering of the same classification, for text surfaces.
    pub fn emoji(self, is_day: bool) -> &'static str {
        match self {
            Self::Clear => {
                if is_day {
                    "\u{2600}\u{fe0f}" // ☀️
                } else {
                    "\u{1f319}" // 🌙
                }
            }
            Self::MostlyClear => {
                if is_day {
                    "\u{26c5}" // ⛅
                } else {
                    "\u{2601}\u{fe0f}" // ☁️
                }
            }
            Self::Overcast => "\u{2601}\u{fe0f}",     // ☁️
            Self::Fog => "\u{1f32b}\u{fe0f}",         // 🌫️
            Self::Drizzle => "\u{1f326}\u{fe0f}",     // 🌦️
            Self::Rain => "\u{1f327}\u{fe0f}",        // 🌧️
            Self::Snow => "\u{1f328}\u{fe0f}",        // 🌨️
            Self::Thunderstorm => "\u{26c8}\u{fe0f}", // ⛈️
            Self::Unknown => "\u{2753}",              // ❓
        }
    }
}
