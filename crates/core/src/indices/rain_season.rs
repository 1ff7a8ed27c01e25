//! Rain season detection
//!
//! Scans twelve months of rainfall totals for the minimal contiguous
//! window (wrapping December into January) that concentrates a
//! disproportionate share of the annual total. A window qualifies when its
//! share reaches [`MIN_SHARE`] and also exceeds what a uniform
//! distribution would put in a window of that length by
//! [`CONCENTRATION_FACTOR`]; uniform climates therefore never report a
//! season. Shorter windows are preferred, and among equal-length windows
//! the one with the earliest start month wins, so repeated calls on
//! identical input return identical endpoints.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::daily::MonthlyAverage;

/// Minimum share of annual rainfall a window must capture
pub const MIN_SHARE: f64 = 0.40;

/// Multiplier over the uniform-distribution baseline a window must beat
pub const CONCENTRATION_FACTOR: f64 = 1.5;

/// Longest window considered, in months
pub const MAX_WINDOW_MONTHS: usize = 6;

/// Qualitative intensity of a detected season, from the captured share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainSeasonIntensity {
    Moderate,
    Pronounced,
    Intense,
}

impl RainSeasonIntensity {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            RainSeasonIntensity::Moderate => "moderate",
            RainSeasonIntensity::Pronounced => "pronounced",
            RainSeasonIntensity::Intense => "intense",
        }
    }

    fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            RainSeasonIntensity::Intense
        } else if percentage >= 55.0 {
            RainSeasonIntensity::Pronounced
        } else {
            RainSeasonIntensity::Moderate
        }
    }
}

/// Detected rain season, or the absence of one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainSeason {
    /// Whether any qualifying window was found
    pub has_season: bool,
    /// First month of the window (0 = January)
    pub start_month: Option<u32>,
    /// Last month of the window, inclusive; may wrap below `start_month`
    pub end_month: Option<u32>,
    /// Share of annual rainfall inside the window, 0-100
    pub percentage: f64,
    /// Qualitative intensity of the captured share
    pub intensity: Option<RainSeasonIntensity>,
}

impl RainSeason {
    /// No detectable season
    pub fn none() -> Self {
        RainSeason {
            has_season: false,
            start_month: None,
            end_month: None,
            percentage: 0.0,
            intensity: None,
        }
    }
}

/// Detect the rain season over a full year of monthly averages.
///
/// Requires one entry per month; shorter input cannot be scanned for a
/// wrapping window and reports no season.
pub fn detect_rain_season(months: &[MonthlyAverage]) -> RainSeason {
    if months.len() != 12 {
        debug!(
            months = months.len(),
            "rain season needs a full year of monthly averages"
        );
        return RainSeason::none();
    }

    let mut rain = [0.0f64; 12];
    for entry in months {
        rain[(entry.month as usize) % 12] = entry.total_rain.max(0.0);
    }
    let annual: f64 = rain.iter().sum();
    if annual <= 0.0 {
        return RainSeason::none();
    }

    for window_len in 1..=MAX_WINDOW_MONTHS {
        let baseline = window_len as f64 / 12.0;
        let mut best: Option<(usize, f64)> = None;

        for start in 0..12 {
            let total: f64 = (0..window_len).map(|i| rain[(start + i) % 12]).sum();
            let share = total / annual;
            // Strictly-greater keeps the earliest start on ties
            if best.is_none_or(|(_, best_share)| share > best_share) {
                best = Some((start, share));
            }
        }

        if let Some((start, share)) = best {
            if share >= MIN_SHARE && share >= baseline * CONCENTRATION_FACTOR {
                let percentage = share * 100.0;
                return RainSeason {
                    has_season: true,
                    start_month: Some(start as u32),
                    end_month: Some(((start + window_len - 1) % 12) as u32),
                    percentage,
                    intensity: Some(RainSeasonIntensity::from_percentage(percentage)),
                };
            }
        }
    }

    RainSeason::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn year(rains: [f64; 12]) -> Vec<MonthlyAverage> {
        (0..12u32)
            .map(|m| MonthlyAverage::new(m, 20.0, rains[m as usize]))
            .collect()
    }

    #[test]
    fn test_uniform_rain_has_no_season() {
        let season = detect_rain_season(&year([20.0; 12]));
        assert!(!season.has_season);
        assert_eq!(season.start_month, None);
    }

    #[test]
    fn test_monsoon_profile() {
        // Jun-Aug carry half the year's rain; no two-month window reaches
        // the share threshold, so the minimal qualifying window is three
        // months long
        let mut rains = [15.0; 12];
        rains[5] = 45.0;
        rains[6] = 45.0;
        rains[7] = 45.0;
        let season = detect_rain_season(&year(rains));
        assert!(season.has_season);
        assert_eq!(season.start_month, Some(5));
        assert_eq!(season.end_month, Some(7));
        // 135 of 270 mm falls inside the window
        assert_abs_diff_eq!(season.percentage, 50.0, epsilon = 1e-9);
        assert_eq!(season.intensity, Some(RainSeasonIntensity::Moderate));
    }

    #[test]
    fn test_wrapping_season() {
        // Winter rain peaking across the year boundary; the minimal
        // qualifying window is Dec-Jan
        let mut rains = [5.0; 12];
        rains[10] = 80.0;
        rains[11] = 90.0;
        rains[0] = 90.0;
        rains[1] = 80.0;
        let season = detect_rain_season(&year(rains));
        assert!(season.has_season);
        assert_eq!(season.start_month, Some(11));
        assert_eq!(season.end_month, Some(0), "window wraps across December");
    }

    #[test]
    fn test_single_month_burst() {
        let mut rains = [3.0; 12];
        rains[3] = 100.0;
        let season = detect_rain_season(&year(rains));
        assert!(season.has_season);
        assert_eq!(season.start_month, Some(3));
        assert_eq!(season.end_month, Some(3));
        assert_eq!(season.intensity, Some(RainSeasonIntensity::Intense));
    }

    #[test]
    fn test_idempotent() {
        let mut rains = [8.0; 12];
        rains[8] = 60.0;
        rains[9] = 70.0;
        let months = year(rains);
        let first = detect_rain_season(&months);
        let second = detect_rain_season(&months);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tied_windows_prefer_earliest_start() {
        // Two identical two-month peaks; the earlier one must win
        let mut rains = [0.0; 12];
        rains[2] = 50.0;
        rains[3] = 50.0;
        rains[8] = 50.0;
        rains[9] = 50.0;
        let season = detect_rain_season(&year(rains));
        assert!(season.has_season);
        assert_eq!(season.start_month, Some(2));
    }

    #[test]
    fn test_dry_year_has_no_season() {
        let season = detect_rain_season(&year([0.0; 12]));
        assert!(!season.has_season);
    }

    #[test]
    fn test_partial_year_has_no_season() {
        let months: Vec<MonthlyAverage> =
            (0..7u32).map(|m| MonthlyAverage::new(m, 20.0, 30.0)).collect();
        assert!(!detect_rain_season(&months).has_season);
    }
}
