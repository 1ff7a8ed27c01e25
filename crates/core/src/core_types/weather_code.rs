//! WMO weather code interpretation
//!
//! Daily records carry the provider's WMO-style weather code. This module
//! maps codes to display descriptions and icons, a severity score used when
//! one code must stand for several (and by the comfort-score penalty), and
//! a precipitation predicate.

use serde::{Deserialize, Serialize};

/// WMO weather code as reported in daily data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WmoCode(pub u8);

impl WmoCode {
    /// Severity score, 0-100. Higher values indicate more significant
    /// weather that takes precedence when aggregating several codes.
    pub fn severity(self) -> u8 {
        match self.0 {
            95..=99 => 100, // Thunderstorm
            80..=86 => 80,  // Rain/snow showers
            71..=77 => 70,  // Snow
            51..=67 => 60,  // Drizzle/Rain
            45 | 48 => 50,  // Fog
            3 => 30,        // Overcast
            2 => 20,        // Partly cloudy
            1 => 10,        // Mainly clear
            _ => 0,         // Clear or unknown
        }
    }

    /// Whether the code describes falling precipitation
    pub fn is_precipitating(self) -> bool {
        matches!(self.0, 51..=67 | 71..=77 | 80..=86 | 95..=99)
    }

    /// Short display description
    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 | 48 => "Fog",
            51 | 53 | 55 => "Drizzle",
            56 | 57 => "Freezing drizzle",
            61 | 63 | 65 => "Rain",
            66 | 67 => "Freezing rain",
            71 | 73 | 75 => "Snowfall",
            77 => "Snow grains",
            80..=82 => "Rain showers",
            85 | 86 => "Snow showers",
            95 => "Thunderstorm",
            96 | 99 => "Thunderstorm with hail",
            _ => "Unknown",
        }
    }

    /// Weather emoji for this code (daytime set)
    pub fn icon(self) -> &'static str {
        match self.0 {
            0 => "\u{2600}",         // Clear sky
            1 => "\u{1F324}",        // Mainly clear
            2 => "\u{26C5}",         // Partly cloudy
            3 => "\u{2601}",         // Overcast
            45 | 48 => "\u{1F32B}",  // Fog
            51..=67 => "\u{1F327}",  // Drizzle/Rain
            71..=75 => "\u{2744}",   // Snow
            77 | 85 | 86 => "\u{1F328}", // Snow grains/showers
            80..=82 => "\u{1F326}",  // Rain showers
            95..=99 => "\u{26C8}",   // Thunderstorm
            _ => "?",
        }
    }

    /// Pick the more significant of two codes
    pub fn max_severity(self, other: WmoCode) -> WmoCode {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

impl From<u8> for WmoCode {
    fn from(code: u8) -> Self {
        WmoCode(code)
    }
}
