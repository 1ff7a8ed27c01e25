//! Climate classification from monthly averages
//!
//! A Köppen-like heuristic: the temperature regime (from annual mean and
//! amplitude) crossed with the precipitation regime (from how rainfall is
//! distributed through the year) selects one of twelve fixed labels.
//! Partial-year input still classifies, at reduced confidence; only an
//! empty input yields nothing.

use serde::Serialize;

use crate::core_types::daily::MonthlyAverage;
use crate::indices::rain_season::detect_rain_season;

/// Annual mean at or above which a low-amplitude climate reads as hot (°C)
pub const HOT_STABLE_MIN_MEAN: f64 = 18.0;

/// Amplitude below which a climate reads as stable (°C)
pub const HOT_STABLE_MAX_AMPLITUDE: f64 = 10.0;

/// Amplitude at or above which a climate reads as continental (°C)
pub const CONTINENTAL_MIN_AMPLITUDE: f64 = 20.0;

/// Warmest-month mean below which a climate leans polar (°C)
pub const POLAR_MAX_WARM_MONTH: f64 = 10.0;

/// Length of the window scanned for a pronounced dry stretch (months)
pub const DRY_WINDOW_MONTHS: usize = 3;

/// Maximum annual-rain share of the driest window for a dry-season regime
pub const DRY_WINDOW_MAX_SHARE: f64 = 0.10;

/// Temperature character of a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureRegime {
    /// Warm with little annual variation
    HotStable,
    /// Moderate mean and amplitude
    Temperate,
    /// Large annual swing
    Continental,
    /// Even the warmest month stays cold
    PolarLeaning,
}

/// How rainfall distributes across the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationRegime {
    /// No pronounced wet or dry stretch
    Uniform,
    /// A pronounced low-rain stretch
    DrySeason,
    /// A concentrated wet window
    WetSeason,
}

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimateClassification {
    /// Fixed climate label
    pub label: &'static str,
    /// One-line description for display
    pub description: &'static str,
    /// Display color hint (hex)
    pub color: &'static str,
    pub temperature_regime: TemperatureRegime,
    pub precipitation_regime: PrecipitationRegime,
    /// Months sampled / 12
    pub confidence: f64,
}

/// Classify a climate from whatever monthly averages are present.
pub fn classify_climate(months: &[MonthlyAverage]) -> Option<ClimateClassification> {
    if months.is_empty() {
        return None;
    }

    let temperature_regime = temperature_regime(months);
    let precipitation_regime = precipitation_regime(months);
    let (label, description, color) = label_for(temperature_regime, precipitation_regime);

    Some(ClimateClassification {
        label,
        description,
        color,
        temperature_regime,
        precipitation_regime,
        confidence: (months.len() as f64 / 12.0).min(1.0),
    })
}

fn temperature_regime(months: &[MonthlyAverage]) -> TemperatureRegime {
    let warmest = months
        .iter()
        .map(|m| m.avg_temp)
        .fold(f64::NEG_INFINITY, f64::max);
    let coldest = months
        .iter()
        .map(|m| m.avg_temp)
        .fold(f64::INFINITY, f64::min);
    let mean = months.iter().map(|m| m.avg_temp).sum::<f64>() / months.len() as f64;
    let amplitude = warmest - coldest;

    if warmest < POLAR_MAX_WARM_MONTH {
        TemperatureRegime::PolarLeaning
    } else if amplitude >= CONTINENTAL_MIN_AMPLITUDE {
        TemperatureRegime::Continental
    } else if mean >= HOT_STABLE_MIN_MEAN && amplitude < HOT_STABLE_MAX_AMPLITUDE {
        TemperatureRegime::HotStable
    } else {
        TemperatureRegime::Temperate
    }
}

fn precipitation_regime(months: &[MonthlyAverage]) -> PrecipitationRegime {
    if detect_rain_season(months).has_season {
        return PrecipitationRegime::WetSeason;
    }
    if driest_window_share(months) <= DRY_WINDOW_MAX_SHARE {
        return PrecipitationRegime::DrySeason;
    }
    PrecipitationRegime::Uniform
}

/// Share of annual rain in the driest contiguous window.
///
/// Wraps across the year boundary only when a full year is present. A year
/// with no rain at all reads as fully dry; input shorter than the window
/// cannot show a dry stretch and reads as uniform (share 1.0).
fn driest_window_share(months: &[MonthlyAverage]) -> f64 {
    if months.len() < DRY_WINDOW_MONTHS {
        return 1.0;
    }
    let rains: Vec<f64> = months.iter().map(|m| m.total_rain.max(0.0)).collect();
    let annual: f64 = rains.iter().sum();
    if annual <= 0.0 {
        return 0.0;
    }

    let starts = if rains.len() == 12 {
        rains.len()
    } else {
        rains.len() - DRY_WINDOW_MONTHS + 1
    };
    let mut driest = f64::INFINITY;
    for start in 0..starts {
        let total: f64 = (0..DRY_WINDOW_MONTHS)
            .map(|i| rains[(start + i) % rains.len()])
            .sum();
        driest = driest.min(total);
    }
    driest / annual
}

fn label_for(
    temperature: TemperatureRegime,
    precipitation: PrecipitationRegime,
) -> (&'static str, &'static str, &'static str) {
    use PrecipitationRegime as P;
    use TemperatureRegime as T;

    match (temperature, precipitation) {
        (T::HotStable, P::Uniform) => (
            "Tropical rainforest",
            "Hot year-round with rain in every month",
            "#2e7d32",
        ),
        (T::HotStable, P::WetSeason) => (
            "Tropical monsoon",
            "Hot year-round with a concentrated wet season",
            "#00897b",
        ),
        (T::HotStable, P::DrySeason) => (
            "Hot arid",
            "Hot year-round with a long dry stretch",
            "#ef6c00",
        ),
        (T::Temperate, P::Uniform) => (
            "Oceanic",
            "Mild with rain spread through the year",
            "#0288d1",
        ),
        (T::Temperate, P::WetSeason) => (
            "Humid subtropical",
            "Mild winters and a pronounced wet season",
            "#43a047",
        ),
        (T::Temperate, P::DrySeason) => (
            "Mediterranean",
            "Mild with a marked dry season",
            "#f9a825",
        ),
        (T::Continental, P::Uniform) => (
            "Continental",
            "Large annual swing with year-round precipitation",
            "#5e35b1",
        ),
        (T::Continental, P::WetSeason) => (
            "Continental monsoon",
            "Large annual swing with a summer rain peak",
            "#3949ab",
        ),
        (T::Continental, P::DrySeason) => (
            "Steppe",
            "Large annual swing with a long dry stretch",
            "#8d6e63",
        ),
        (T::PolarLeaning, P::Uniform) => (
            "Subpolar oceanic",
            "Cold with precipitation in every month",
            "#546e7a",
        ),
        (T::PolarLeaning, P::WetSeason) => (
            "Subpolar seasonal",
            "Cold with a concentrated precipitation season",
            "#455a64",
        ),
        (T::PolarLeaning, P::DrySeason) => (
            "Polar tundra",
            "Cold and dry for most of the year",
            "#78909c",
        ),
    }
}
