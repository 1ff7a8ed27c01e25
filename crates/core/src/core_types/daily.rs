//! Canonical daily weather records and monthly aggregates
//!
//! All readings are stored in canonical metric units (°C, km/h, mm, %,
//! seconds). A missing reading is `None` and stays `None` through every
//! downstream computation; classification logic never substitutes zero.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Trailing context window length used by trend-sensitive insights
pub const CONTEXT_WINDOW_DAYS: usize = 7;

/// One calendar day of observed or forecast weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date, no time component
    pub date: NaiveDate,
    /// Daily maximum temperature (°C)
    pub temp_max: Option<f64>,
    /// Daily minimum temperature (°C)
    pub temp_min: Option<f64>,
    /// Daily mean temperature (°C)
    pub temp_mean: Option<f64>,
    /// Precipitation total (mm)
    pub precipitation_sum: Option<f64>,
    /// Maximum sustained wind speed (km/h)
    pub wind_speed_max: Option<f64>,
    /// Maximum wind gust (km/h)
    pub wind_gust_max: Option<f64>,
    /// Dominant wind direction (degrees, 0 = North)
    pub wind_direction_dominant: Option<f64>,
    /// Mean cloud cover (%)
    pub cloud_cover_mean: Option<f64>,
    /// Sunshine duration (seconds)
    pub sunshine_duration: Option<f64>,
    /// Daylight duration (seconds)
    pub daylight_duration: Option<f64>,
    /// WMO weather code
    pub weather_code: Option<u8>,
}

impl DailyRecord {
    /// Record with every reading absent
    pub fn new(date: NaiveDate) -> Self {
        DailyRecord {
            date,
            temp_max: None,
            temp_min: None,
            temp_mean: None,
            precipitation_sum: None,
            wind_speed_max: None,
            wind_gust_max: None,
            wind_direction_dominant: None,
            cloud_cover_mean: None,
            sunshine_duration: None,
            daylight_duration: None,
            weather_code: None,
        }
    }

    /// Representative temperature for aggregation: the mean reading when
    /// present, otherwise the midpoint of max and min.
    pub fn representative_temp(&self) -> Option<f64> {
        self.temp_mean
            .or_else(|| match (self.temp_max, self.temp_min) {
                (Some(max), Some(min)) => Some((max + min) / 2.0),
                _ => None,
            })
    }

    /// Daily temperature span (max - min)
    pub fn temp_span(&self) -> Option<f64> {
        match (self.temp_max, self.temp_min) {
            (Some(max), Some(min)) => Some(max - min),
            _ => None,
        }
    }
}

/// Aggregate for one calendar month across a multi-year sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// Month index, 0 = January
    pub month: u32,
    /// Mean representative daily temperature for the month (°C)
    pub avg_temp: f64,
    /// Mean total precipitation for the month (mm)
    pub total_rain: f64,
}

impl MonthlyAverage {
    pub fn new(month: u32, avg_temp: f64, total_rain: f64) -> Self {
        MonthlyAverage {
            month,
            avg_temp,
            total_rain,
        }
    }
}

/// One day plus its trailing context window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// The day under analysis
    pub record: DailyRecord,
    /// Trailing daily records, oldest first, ideally
    /// [`CONTEXT_WINDOW_DAYS`] entries
    pub context: Vec<DailyRecord>,
}

impl DaySnapshot {
    pub fn new(record: DailyRecord, context: Vec<DailyRecord>) -> Self {
        DaySnapshot { record, context }
    }

    /// A snapshot without any trailing context
    pub fn without_context(record: DailyRecord) -> Self {
        DaySnapshot {
            record,
            context: Vec::new(),
        }
    }

    /// Whether the context window is long enough for trend checks
    pub fn has_full_context(&self) -> bool {
        self.context.len() >= CONTEXT_WINDOW_DAYS
    }
}

/// English month name for a 0-based month index.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize) % 12]
}

/// Aggregate daily records into per-calendar-month averages.
///
/// Temperature is the mean of each day's representative temperature across
/// every sampled year. Rainfall is the mean of the per-year monthly totals,
/// so a month observed in three years contributes the average of three
/// monthly sums. Days with a missing reading are excluded from that
/// reading's aggregate rather than counted as zero; a month's rain total,
/// however, sums whatever daily readings exist (a partial-coverage month
/// underestimates its total).
///
/// Returns one entry per month that has any data, ordered by month index.
pub fn aggregate_monthly(days: &[DailyRecord]) -> Vec<MonthlyAverage> {
    let mut temp_sum = [0.0f64; 12];
    let mut temp_count = [0usize; 12];
    let mut rain_by_year_month: FxHashMap<(i32, u32), f64> = FxHashMap::default();
    let mut months_seen = [false; 12];

    for day in days {
        let month = day.date.month0();
        months_seen[month as usize] = true;
        if let Some(temp) = day.representative_temp() {
            temp_sum[month as usize] += temp;
            temp_count[month as usize] += 1;
        }
        if let Some(rain) = day.precipitation_sum {
            *rain_by_year_month
                .entry((day.date.year(), month))
                .or_insert(0.0) += rain;
        }
    }

    let mut rain_total = [0.0f64; 12];
    let mut rain_years = [0usize; 12];
    for (&(_, month), &total) in &rain_by_year_month {
        rain_total[month as usize] += total;
        rain_years[month as usize] += 1;
    }

    (0..12u32)
        .filter(|&m| months_seen[m as usize])
        .map(|m| {
            let idx = m as usize;
            let avg_temp = if temp_count[idx] > 0 {
                temp_sum[idx] / temp_count[idx] as f64
            } else {
                0.0
            };
            let total_rain = if rain_years[idx] > 0 {
                rain_total[idx] / rain_years[idx] as f64
            } else {
                0.0
            };
            MonthlyAverage::new(m, avg_temp, total_rain)
        })
        .collect()
}
