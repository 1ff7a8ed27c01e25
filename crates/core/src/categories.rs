//! Daily weather categories
//!
//! Buckets a day into zero or more display categories (a hot day is
//! usually also a warm day). Predicates are evaluated in a fixed order
//! against thresholds held in canonical units; the threshold is converted
//! to the record's active display unit before comparison, so a record
//! carrying Fahrenheit readings is matched against 86 °F rather than
//! having its readings mutated. A predicate whose required reading is
//! absent never matches and never fails.

use serde::{Deserialize, Serialize};

use crate::core_types::daily::DailyRecord;
use crate::core_types::units::{
    beaufort_from_reading, celsius_to_fahrenheit, mm_to_inch, PrecipUnit, TempUnit,
    UnitPreferences,
};

/// Category thresholds in canonical units (°C, mm, %, Beaufort steps).
pub mod category_thresholds {
    /// Sunshine as a fraction of daylight for a sunny day
    pub const SUNNY_MIN_SUNSHINE_RATIO: f64 = 0.75;
    /// Mean cloud cover for a cloudy day (%)
    pub const CLOUDY_MIN_COVER_PERCENT: f64 = 75.0;
    /// Daily maximum for a hot day (°C)
    pub const HOT_MIN_C: f64 = 30.0;
    /// Daily maximum for a warm day (°C)
    pub const WARM_MIN_C: f64 = 25.0;
    /// Daily maximum below which a day is cool (°C)
    pub const COOL_MAX_C: f64 = 5.0;
    /// Daily maximum below which a day is freezing (°C)
    pub const FREEZING_MAX_C: f64 = 0.0;
    /// Nightly minimum below which the night is cold (°C)
    pub const COLD_NIGHT_MAX_C: f64 = 0.0;
    /// Nightly minimum for a warm night (°C)
    pub const WARM_NIGHT_MIN_C: f64 = 18.0;
    /// Precipitation total for a rainy day (mm)
    pub const RAINY_MIN_MM: f64 = 2.0;
    /// Beaufort step of sustained wind for a windy day
    pub const WINDY_MIN_SUSTAINED_BEAUFORT: u8 = 6;
    /// Beaufort step of gusts for a windy day when sustained wind is absent
    pub const WINDY_MIN_GUST_BEAUFORT: u8 = 8;
}

/// Display category for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    Sunny,
    Cloudy,
    Hot,
    Warm,
    Cool,
    Freezing,
    ColdNight,
    WarmNight,
    Rainy,
    Windy,
}

impl DayCategory {
    /// Every category, in evaluation and display order
    pub const ALL: [DayCategory; 10] = [
        DayCategory::Sunny,
        DayCategory::Cloudy,
        DayCategory::Hot,
        DayCategory::Warm,
        DayCategory::Cool,
        DayCategory::Freezing,
        DayCategory::ColdNight,
        DayCategory::WarmNight,
        DayCategory::Rainy,
        DayCategory::Windy,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            DayCategory::Sunny => "sunny days",
            DayCategory::Cloudy => "cloudy days",
            DayCategory::Hot => "hot days",
            DayCategory::Warm => "warm days",
            DayCategory::Cool => "cool days",
            DayCategory::Freezing => "freezing days",
            DayCategory::ColdNight => "cold nights",
            DayCategory::WarmNight => "warm nights",
            DayCategory::Rainy => "rainy days",
            DayCategory::Windy => "windy days",
        }
    }

    /// Display icon
    pub fn icon(self) -> &'static str {
        match self {
            DayCategory::Sunny => "\u{2600}",
            DayCategory::Cloudy => "\u{2601}",
            DayCategory::Hot => "\u{1F525}",
            DayCategory::Warm => "\u{1F321}",
            DayCategory::Cool => "\u{1F9CA}",
            DayCategory::Freezing => "\u{2744}",
            DayCategory::ColdNight => "\u{1F319}",
            DayCategory::WarmNight => "\u{1F303}",
            DayCategory::Rainy => "\u{1F327}",
            DayCategory::Windy => "\u{1F32C}",
        }
    }
}

/// Number of days matching one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: DayCategory,
    pub days: usize,
}

fn temp_threshold(celsius: f64, unit: TempUnit) -> f64 {
    match unit {
        TempUnit::Celsius => celsius,
        TempUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}

fn precip_threshold(mm: f64, unit: PrecipUnit) -> f64 {
    match unit {
        PrecipUnit::Millimeters => mm,
        PrecipUnit::Inches => mm_to_inch(mm),
    }
}

/// Whether a day matches one category.
///
/// Absent readings short-circuit to a non-match.
pub fn matches_category(
    category: DayCategory,
    record: &DailyRecord,
    prefs: &UnitPreferences,
) -> bool {
    use category_thresholds as t;

    match category {
        DayCategory::Sunny => match (record.sunshine_duration, record.daylight_duration) {
            (Some(sunshine), Some(daylight)) if daylight > 0.0 => {
                sunshine / daylight >= t::SUNNY_MIN_SUNSHINE_RATIO
            }
            _ => false,
        },
        DayCategory::Cloudy => record
            .cloud_cover_mean
            .is_some_and(|cover| cover >= t::CLOUDY_MIN_COVER_PERCENT),
        DayCategory::Hot => record
            .temp_max
            .is_some_and(|max| max >= temp_threshold(t::HOT_MIN_C, prefs.temperature)),
        DayCategory::Warm => record
            .temp_max
            .is_some_and(|max| max >= temp_threshold(t::WARM_MIN_C, prefs.temperature)),
        DayCategory::Cool => record
            .temp_max
            .is_some_and(|max| max < temp_threshold(t::COOL_MAX_C, prefs.temperature)),
        DayCategory::Freezing => record
            .temp_max
            .is_some_and(|max| max < temp_threshold(t::FREEZING_MAX_C, prefs.temperature)),
        DayCategory::ColdNight => record
            .temp_min
            .is_some_and(|min| min < temp_threshold(t::COLD_NIGHT_MAX_C, prefs.temperature)),
        DayCategory::WarmNight => record
            .temp_min
            .is_some_and(|min| min >= temp_threshold(t::WARM_NIGHT_MIN_C, prefs.temperature)),
        DayCategory::Rainy => record
            .precipitation_sum
            .is_some_and(|sum| sum >= precip_threshold(t::RAINY_MIN_MM, prefs.precipitation)),
        DayCategory::Windy => match record.wind_speed_max {
            Some(sustained) => {
                beaufort_from_reading(sustained, prefs.wind) >= t::WINDY_MIN_SUSTAINED_BEAUFORT
            }
            None => record.wind_gust_max.is_some_and(|gust| {
                beaufort_from_reading(gust, prefs.wind) >= t::WINDY_MIN_GUST_BEAUFORT
            }),
        },
    }
}

/// All categories a day matches, in fixed order.
pub fn classify_day(record: &DailyRecord, prefs: &UnitPreferences) -> Vec<DayCategory> {
    DayCategory::ALL
        .into_iter()
        .filter(|&category| matches_category(category, record, prefs))
        .collect()
}

/// Count matching days per category over a dataset, in fixed category
/// order, for the visual-stats block.
pub fn summarize_categories(days: &[DailyRecord], prefs: &UnitPreferences) -> Vec<CategoryCount> {
    DayCategory::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            days: days
                .iter()
                .filter(|record| matches_category(category, record, prefs))
                .count(),
        })
        .collect()
}
