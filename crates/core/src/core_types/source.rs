//! Input shapes and normalization
//!
//! Daily data arrives in one of two equivalent shapes: an Open-Meteo-style
//! columnar object (parallel arrays keyed by provider field names) or a
//! plain sequence of row records. [`normalize`] turns either into the
//! canonical [`DailyRecord`] sequence so every downstream calculator stays
//! shape-agnostic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core_types::daily::DailyRecord;

/// Open-Meteo-style columnar daily block.
///
/// The `time` column drives the record count; every other column is
/// optional and, when present, must be the same length. Individual cells
/// may be null for gaps in the source data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnarDailyData {
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_mean: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wind_gusts_10m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wind_direction_10m_dominant: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub cloud_cover_mean: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sunshine_duration: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub daylight_duration: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub weather_code: Option<Vec<Option<u8>>>,
}

/// Either accepted input shape for daily data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DailySource {
    /// Parallel arrays keyed by provider field names
    Columnar(ColumnarDailyData),
    /// Plain row records
    Rows(Vec<DailyRecord>),
}

/// Input-shape failures surfaced by [`normalize`]
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A `time` entry is not an ISO calendar date
    #[error("invalid ISO date in time column: {value:?}")]
    InvalidDate { value: String },
    /// A value column disagrees with the `time` column length
    #[error("column {field} has {actual} entries, expected {expected}")]
    ColumnLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Normalize either input shape into canonical daily records.
///
/// Row input passes through untouched. Columnar input is validated
/// (column lengths against `time`, ISO date parsing) and transposed;
/// null cells become absent readings.
pub fn normalize(source: DailySource) -> Result<Vec<DailyRecord>, NormalizeError> {
    match source {
        DailySource::Rows(rows) => Ok(rows),
        DailySource::Columnar(data) => normalize_columnar(&data),
    }
}

fn normalize_columnar(data: &ColumnarDailyData) -> Result<Vec<DailyRecord>, NormalizeError> {
    let expected = data.time.len();

    check_len("temperature_2m_max", &data.temperature_2m_max, expected)?;
    check_len("temperature_2m_min", &data.temperature_2m_min, expected)?;
    check_len("temperature_2m_mean", &data.temperature_2m_mean, expected)?;
    check_len("precipitation_sum", &data.precipitation_sum, expected)?;
    check_len("wind_speed_10m_max", &data.wind_speed_10m_max, expected)?;
    check_len("wind_gusts_10m_max", &data.wind_gusts_10m_max, expected)?;
    check_len(
        "wind_direction_10m_dominant",
        &data.wind_direction_10m_dominant,
        expected,
    )?;
    check_len("cloud_cover_mean", &data.cloud_cover_mean, expected)?;
    check_len("sunshine_duration", &data.sunshine_duration, expected)?;
    check_len("daylight_duration", &data.daylight_duration, expected)?;
    check_len("weather_code", &data.weather_code, expected)?;

    let mut records = Vec::with_capacity(expected);
    for (index, raw_date) in data.time.iter().enumerate() {
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
            NormalizeError::InvalidDate {
                value: raw_date.clone(),
            }
        })?;
        let mut record = DailyRecord::new(date);
        record.temp_max = cell(&data.temperature_2m_max, index);
        record.temp_min = cell(&data.temperature_2m_min, index);
        record.temp_mean = cell(&data.temperature_2m_mean, index);
        record.precipitation_sum = cell(&data.precipitation_sum, index);
        record.wind_speed_max = cell(&data.wind_speed_10m_max, index);
        record.wind_gust_max = cell(&data.wind_gusts_10m_max, index);
        record.wind_direction_dominant = cell(&data.wind_direction_10m_dominant, index);
        record.cloud_cover_mean = cell(&data.cloud_cover_mean, index);
        record.sunshine_duration = cell(&data.sunshine_duration, index);
        record.daylight_duration = cell(&data.daylight_duration, index);
        record.weather_code = cell(&data.weather_code, index);
        records.push(record);
    }

    debug!(days = records.len(), "normalized columnar daily data");
    Ok(records)
}

fn check_len<T>(
    field: &'static str,
    column: &Option<Vec<Option<T>>>,
    expected: usize,
) -> Result<(), NormalizeError> {
    match column {
        Some(values) if values.len() != expected => Err(NormalizeError::ColumnLength {
            field,
            expected,
            actual: values.len(),
        }),
        _ => Ok(()),
    }
}

fn cell<T: Copy>(column: &Option<Vec<Option<T>>>, index: usize) -> Option<T> {
    column.as_ref().and_then(|c| c.get(index).copied().flatten())
}
