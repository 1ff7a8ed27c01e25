//! Humidex perceived-temperature index
//!
//! Environment Canada formulation over air temperature and dew point:
//!
//! H = T + (5/9) × (6.11 × e^(5417.753 × (1/273.16 − 1/(273.15 + Td))) − 10)
//!
//! The calculator computes unconditionally; the published lookup table only
//! covers part of the domain, so callers check [`in_supported_range`]
//! before displaying a value.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Air temperature domain of the humidex lookup table (°C)
pub const SUPPORTED_TEMP: RangeInclusive<f64> = 15.0..=43.0;

/// Dew point domain of the humidex lookup table (°C)
pub const SUPPORTED_DEW_POINT: RangeInclusive<f64> = 10.0..=28.0;

/// Vapor pressure coefficient (hPa)
const VAPOR_PRESSURE_BASE: f64 = 6.11;

/// Clausius-Clapeyron exponent coefficient (K)
const VAPOR_EXPONENT: f64 = 5417.753;

/// Triple point of water (K)
const TRIPLE_POINT: f64 = 273.16;

/// Celsius to Kelvin offset
const KELVIN_OFFSET: f64 = 273.15;

/// Humidex comfort bands over the rounded index value.
///
/// Closed-open intervals `[lower, upper)`; the final band is open-ended.
pub mod humidex_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Some discomfort" band `[30, 40)`
    pub const SOME_DISCOMFORT: Range<f64> = 30.0..40.0;

    /// "Great discomfort" band `[40, 46)`
    pub const GREAT_DISCOMFORT: Range<f64> = 40.0..46.0;

    /// "Dangerous" band `[46, ∞)`
    pub const DANGEROUS: RangeFrom<f64> = 46.0..;
}

/// Comfort band for a humidex value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidexComfort {
    LittleDiscomfort,
    SomeDiscomfort,
    GreatDiscomfort,
    Dangerous,
}

impl HumidexComfort {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            HumidexComfort::LittleDiscomfort => "little discomfort",
            HumidexComfort::SomeDiscomfort => "some discomfort",
            HumidexComfort::GreatDiscomfort => "great discomfort",
            HumidexComfort::Dangerous => "dangerous",
        }
    }
}

/// Humidex for an air temperature and dew point, both in °C.
pub fn humidex(temperature: f64, dew_point: f64) -> f64 {
    let dew_kelvin = KELVIN_OFFSET + dew_point;
    let vapor_pressure =
        VAPOR_PRESSURE_BASE * (VAPOR_EXPONENT * (1.0 / TRIPLE_POINT - 1.0 / dew_kelvin)).exp();
    temperature + (5.0 / 9.0) * (vapor_pressure - 10.0)
}

/// Humidex rounded to the nearest integer, as displayed.
pub fn humidex_rounded(temperature: f64, dew_point: f64) -> i32 {
    humidex(temperature, dew_point).round() as i32
}

/// Whether a temperature/dew-point pair is inside the lookup domain.
///
/// Values outside are off the published table; consumers suppress display
/// rather than extrapolate.
pub fn in_supported_range(temperature: f64, dew_point: f64) -> bool {
    SUPPORTED_TEMP.contains(&temperature) && SUPPORTED_DEW_POINT.contains(&dew_point)
}

/// Comfort band for a humidex value.
pub fn classify_humidex(value: f64) -> HumidexComfort {
    use humidex_ranges as h;
    if h::DANGEROUS.contains(&value) {
        HumidexComfort::Dangerous
    } else if h::GREAT_DISCOMFORT.contains(&value) {
        HumidexComfort::GreatDiscomfort
    } else if h::SOME_DISCOMFORT.contains(&value) {
        HumidexComfort::SomeDiscomfort
    } else {
        HumidexComfort::LittleDiscomfort
    }
}

/// Magnus coefficient a (dimensionless)
const MAGNUS_A: f64 = 17.625;

/// Magnus coefficient b (°C)
const MAGNUS_B: f64 = 243.04;

/// Dew point (°C) from air temperature (°C) and relative humidity (%),
/// Magnus formula. Humidity is clamped to a sane floor so a zero reading
/// cannot produce a non-finite result.
pub fn dew_point_from_humidity(temperature: f64, relative_humidity: f64) -> f64 {
    let humidity = (relative_humidity / 100.0).clamp(0.001, 1.0);
    let gamma = humidity.ln() + MAGNUS_A * temperature / (MAGNUS_B + temperature);
    MAGNUS_B * gamma / (MAGNUS_A - gamma)
}
