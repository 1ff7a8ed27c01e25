//! Baro Seasonal Index (BSI)
//!
//! A 0-100 score of year-round climate volatility from monthly averages:
//! the annual temperature amplitude (max minus min monthly mean) and the
//! variability of monthly rainfall (coefficient of variation) are scaled
//! and summed. Higher means more seasonal extremity.

use serde::{Deserialize, Serialize};

use crate::core_types::daily::MonthlyAverage;

/// Temperature amplitude treated as full scale (°C); contributes up to
/// [`AMPLITUDE_WEIGHT`] points
pub const AMPLITUDE_FULL_SCALE: f64 = 40.0;

/// Points available from temperature amplitude
pub const AMPLITUDE_WEIGHT: f64 = 60.0;

/// Rainfall coefficient of variation treated as full scale; contributes up
/// to [`RAINFALL_WEIGHT`] points
pub const RAINFALL_CV_FULL_SCALE: f64 = 1.2;

/// Points available from rainfall variability
pub const RAINFALL_WEIGHT: f64 = 40.0;

/// BSI band boundaries.
///
/// Closed-open intervals `[lower, upper)`: a score of exactly 25 is
/// "moderate" and exactly 75 is "extreme".
pub mod bsi_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Stable" band `[0, 25)`
    pub const STABLE: Range<f64> = 0.0..25.0;

    /// "Moderate" band `[25, 50)`
    pub const MODERATE: Range<f64> = 25.0..50.0;

    /// "Variable" band `[50, 75)`
    pub const VARIABLE: Range<f64> = 50.0..75.0;

    /// "Extreme" band `[75, ∞)`
    pub const EXTREME: RangeFrom<f64> = 75.0..;
}

/// Qualitative BSI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityBand {
    Stable,
    Moderate,
    Variable,
    Extreme,
}

impl SeasonalityBand {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            SeasonalityBand::Stable => "stable",
            SeasonalityBand::Moderate => "moderate",
            SeasonalityBand::Variable => "variable",
            SeasonalityBand::Extreme => "extreme",
        }
    }

    /// Band for a BSI score
    pub fn from_score(score: f64) -> Self {
        use bsi_ranges as b;
        if b::EXTREME.contains(&score) {
            SeasonalityBand::Extreme
        } else if b::VARIABLE.contains(&score) {
            SeasonalityBand::Variable
        } else if b::MODERATE.contains(&score) {
            SeasonalityBand::Moderate
        } else {
            SeasonalityBand::Stable
        }
    }
}

/// BSI result with its contributing components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaroSeasonalIndex {
    /// Combined score, 0-100
    pub score: f64,
    /// Qualitative band for the score
    pub band: SeasonalityBand,
    /// Annual temperature amplitude (°C)
    pub temperature_amplitude: f64,
    /// Coefficient of variation of monthly rainfall
    pub rainfall_variability: f64,
}

/// Compute the BSI over whatever monthly averages are present.
///
/// Returns `None` only for an empty input. Rainfall variability is zero
/// when every month is dry (no rain to vary).
pub fn calculate_bsi(months: &[MonthlyAverage]) -> Option<BaroSeasonalIndex> {
    if months.is_empty() {
        return None;
    }

    let temps: Vec<f64> = months.iter().map(|m| m.avg_temp).collect();
    let max_temp = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_temp = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let amplitude = max_temp - min_temp;

    let rains: Vec<f64> = months.iter().map(|m| m.total_rain).collect();
    let mean_rain = rains.iter().sum::<f64>() / rains.len() as f64;
    let variability = if mean_rain > 0.0 {
        let variance =
            rains.iter().map(|r| (r - mean_rain).powi(2)).sum::<f64>() / rains.len() as f64;
        variance.sqrt() / mean_rain
    } else {
        0.0
    };

    let amplitude_points =
        (amplitude / AMPLITUDE_FULL_SCALE * AMPLITUDE_WEIGHT).clamp(0.0, AMPLITUDE_WEIGHT);
    let rainfall_points =
        (variability / RAINFALL_CV_FULL_SCALE * RAINFALL_WEIGHT).clamp(0.0, RAINFALL_WEIGHT);
    let score = (amplitude_points + rainfall_points).clamp(0.0, 100.0);

    Some(BaroSeasonalIndex {
        score,
        band: SeasonalityBand::from_score(score),
        temperature_amplitude: amplitude,
        rainfall_variability: variability,
    })
}
