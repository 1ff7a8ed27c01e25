//! Display units and conversions for weather quantities
//!
//! Canonical internal units are metric (°C, km/h, mm, hPa). The display
//! layer owns the active unit selection and passes a [`UnitPreferences`]
//! value into every conversion or classification call; nothing in this
//! module holds unit state.
//!
//! Scalar converters are pure `f64 -> f64`. The `Option`-propagating
//! wrappers map a missing reading to a missing result, never to zero.

use serde::{Deserialize, Serialize};

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    /// Display suffix for formatted values
    pub fn symbol(self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }
}

/// Wind speed display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    #[default]
    KilometersPerHour,
    MilesPerHour,
    MetersPerSecond,
    Beaufort,
}

impl WindUnit {
    /// Display suffix for formatted values
    pub fn symbol(self) -> &'static str {
        match self {
            WindUnit::KilometersPerHour => "km/h",
            WindUnit::MilesPerHour => "mph",
            WindUnit::MetersPerSecond => "m/s",
            WindUnit::Beaufort => "Bft",
        }
    }
}

/// Precipitation display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipUnit {
    #[default]
    Millimeters,
    Inches,
}

impl PrecipUnit {
    /// Display suffix for formatted values
    pub fn symbol(self) -> &'static str {
        match self {
            PrecipUnit::Millimeters => "mm",
            PrecipUnit::Inches => "in",
        }
    }
}

/// Atmospheric pressure display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    #[default]
    HectoPascals,
    InchesOfMercury,
    MillimetersOfMercury,
}

impl PressureUnit {
    /// Display suffix for formatted values
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::HectoPascals => "hPa",
            PressureUnit::InchesOfMercury => "inHg",
            PressureUnit::MillimetersOfMercury => "mmHg",
        }
    }
}

/// Active display units, passed explicitly into every unit-aware call
///
/// # Example
/// ```
/// use weather_metrics_core::core_types::{TempUnit, UnitPreferences};
///
/// let prefs = UnitPreferences::default();
/// assert_eq!(prefs.temperature, TempUnit::Celsius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitPreferences {
    pub temperature: TempUnit,
    pub wind: WindUnit,
    pub precipitation: PrecipUnit,
    pub pressure: PressureUnit,
}

impl UnitPreferences {
    /// All-metric preferences (°C, km/h, mm, hPa)
    pub fn metric() -> Self {
        UnitPreferences::default()
    }

    /// Imperial-family preferences (°F, mph, inch, inHg)
    pub fn imperial() -> Self {
        UnitPreferences {
            temperature: TempUnit::Fahrenheit,
            wind: WindUnit::MilesPerHour,
            precipitation: PrecipUnit::Inches,
            pressure: PressureUnit::InchesOfMercury,
        }
    }
}

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Kilometers per hour per mile per hour
pub const KMH_PER_MPH: f64 = 1.609344;

/// Kilometers per hour per meter per second
pub const KMH_PER_MS: f64 = 3.6;

/// Hectopascals per inch of mercury
pub const HPA_PER_INHG: f64 = 33.8638866667;

/// Millimeters of mercury per hectopascal
pub const MMHG_PER_HPA: f64 = 0.750061683;

/// Beaufort scale thresholds in km/h.
///
/// Standard 13-step scale (0-12) over sustained wind speed. Each step is a
/// closed-open interval `[lower, upper)` so boundary speeds belong to
/// exactly one step; the final step has no upper bound.
pub mod beaufort_ranges {
    use std::ops::{Range, RangeFrom};

    /// Beaufort 0 "Calm" `[0, 1)` km/h
    pub const CALM: Range<f64> = 0.0..1.0;

    /// Beaufort 1 "Light air" `[1, 6)` km/h
    pub const LIGHT_AIR: Range<f64> = 1.0..6.0;

    /// Beaufort 2 "Light breeze" `[6, 12)` km/h
    pub const LIGHT_BREEZE: Range<f64> = 6.0..12.0;

    /// Beaufort 3 "Gentle breeze" `[12, 20)` km/h
    pub const GENTLE_BREEZE: Range<f64> = 12.0..20.0;

    /// Beaufort 4 "Moderate breeze" `[20, 29)` km/h
    pub const MODERATE_BREEZE: Range<f64> = 20.0..29.0;

    /// Beaufort 5 "Fresh breeze" `[29, 39)` km/h
    pub const FRESH_BREEZE: Range<f64> = 29.0..39.0;

    /// Beaufort 6 "Strong breeze" `[39, 50)` km/h
    pub const STRONG_BREEZE: Range<f64> = 39.0..50.0;

    /// Beaufort 7 "Near gale" `[50, 62)` km/h
    pub const NEAR_GALE: Range<f64> = 50.0..62.0;

    /// Beaufort 8 "Gale" `[62, 75)` km/h
    pub const GALE: Range<f64> = 62.0..75.0;

    /// Beaufort 9 "Strong gale" `[75, 89)` km/h
    pub const STRONG_GALE: Range<f64> = 75.0..89.0;

    /// Beaufort 10 "Storm" `[89, 103)` km/h
    pub const STORM: Range<f64> = 89.0..103.0;

    /// Beaufort 11 "Violent storm" `[103, 118)` km/h
    pub const VIOLENT_STORM: Range<f64> = 103.0..118.0;

    /// Beaufort 12 "Hurricane force" `[118, ∞)` km/h
    pub const HURRICANE: RangeFrom<f64> = 118.0..;
}

/// Convert Celsius to Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert km/h to mph
#[inline]
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / KMH_PER_MPH
}

/// Convert mph to km/h
#[inline]
pub fn mph_to_kmh(mph: f64) -> f64 {
    mph * KMH_PER_MPH
}

/// Convert km/h to m/s
#[inline]
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / KMH_PER_MS
}

/// Convert millimeters to inches
#[inline]
pub fn mm_to_inch(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Convert inches to millimeters
#[inline]
pub fn inch_to_mm(inch: f64) -> f64 {
    inch * MM_PER_INCH
}

/// Convert hectopascals to inches of mercury
#[inline]
pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa / HPA_PER_INHG
}

/// Convert inches of mercury to hectopascals
#[inline]
pub fn inhg_to_hpa(inhg: f64) -> f64 {
    inhg * HPA_PER_INHG
}

/// Convert hectopascals to millimeters of mercury
#[inline]
pub fn hpa_to_mmhg(hpa: f64) -> f64 {
    hpa * MMHG_PER_HPA
}

/// Convert millimeters of mercury to hectopascals
#[inline]
pub fn mmhg_to_hpa(mmhg: f64) -> f64 {
    mmhg / MMHG_PER_HPA
}

/// Beaufort step (0-12) for a sustained wind speed in km/h.
///
/// Monotonic over the whole domain; negative input is treated as calm.
/// Boundary speeds follow the closed-open steps of [`beaufort_ranges`],
/// so exactly 39 km/h is Beaufort 6.
pub fn beaufort_from_kmh(kmh: f64) -> u8 {
    use beaufort_ranges as b;

    let speed = kmh.max(0.0);
    let upper_bounds = [
        b::CALM.end,
        b::LIGHT_AIR.end,
        b::LIGHT_BREEZE.end,
        b::GENTLE_BREEZE.end,
        b::MODERATE_BREEZE.end,
        b::FRESH_BREEZE.end,
        b::STRONG_BREEZE.end,
        b::NEAR_GALE.end,
        b::GALE.end,
        b::STRONG_GALE.end,
        b::STORM.end,
        b::VIOLENT_STORM.end,
    ];
    upper_bounds
        .iter()
        .position(|&upper| speed < upper)
        .map_or(12, |step| step as u8)
}

/// Beaufort step for a wind reading already in the given display unit.
///
/// A reading that is itself on the Beaufort scale is used directly
/// (rounded and clamped to 0-12); anything else converts to km/h first.
pub fn beaufort_from_reading(value: f64, unit: WindUnit) -> u8 {
    match unit {
        WindUnit::KilometersPerHour => beaufort_from_kmh(value),
        WindUnit::MilesPerHour => beaufort_from_kmh(mph_to_kmh(value)),
        WindUnit::MetersPerSecond => beaufort_from_kmh(value * KMH_PER_MS),
        WindUnit::Beaufort => value.round().clamp(0.0, 12.0) as u8,
    }
}

/// Convert a canonical Celsius reading to the requested display unit.
/// Missing input stays missing.
pub fn convert_temp(celsius: Option<f64>, unit: TempUnit) -> Option<f64> {
    celsius.map(|c| match unit {
        TempUnit::Celsius => c,
        TempUnit::Fahrenheit => celsius_to_fahrenheit(c),
    })
}

/// Convert a canonical km/h reading to the requested display unit.
/// Missing input stays missing. Beaufort output is the step number.
pub fn convert_wind(kmh: Option<f64>, unit: WindUnit) -> Option<f64> {
    kmh.map(|v| match unit {
        WindUnit::KilometersPerHour => v,
        WindUnit::MilesPerHour => kmh_to_mph(v),
        WindUnit::MetersPerSecond => kmh_to_ms(v),
        WindUnit::Beaufort => f64::from(beaufort_from_kmh(v)),
    })
}

/// Convert a canonical millimeter reading to the requested display unit.
/// Missing input stays missing.
pub fn convert_precip(mm: Option<f64>, unit: PrecipUnit) -> Option<f64> {
    mm.map(|v| match unit {
        PrecipUnit::Millimeters => v,
        PrecipUnit::Inches => mm_to_inch(v),
    })
}

/// Convert a canonical hectopascal reading to the requested display unit.
/// Missing input stays missing.
pub fn convert_pressure(hpa: Option<f64>, unit: PressureUnit) -> Option<f64> {
    hpa.map(|v| match unit {
        PressureUnit::HectoPascals => v,
        PressureUnit::InchesOfMercury => hpa_to_inhg(v),
        PressureUnit::MillimetersOfMercury => hpa_to_mmhg(v),
    })
}

/// 16-point compass label for a wind direction in degrees (0 = North).
pub fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let normalized = degrees.rem_euclid(360.0);
    let sector = (normalized / 22.5).round() as usize % 16;
    POINTS[sector]
}
