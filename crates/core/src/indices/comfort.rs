//! Daily comfort score
//!
//! A weighted heuristic rating of how pleasant a day's weather is, 0-10.
//! Starts from a perfect score and subtracts penalties for temperature
//! outside the ideal band, wind, gusts, rain, cloud cover, rain
//! probability, humidity outside the comfortable band, and significant
//! weather codes; adds a sunshine bonus when the temperature is pleasant
//! under a clear, high-UV sky.
//!
//! Contract: deterministic, clamped to [0, 10], never increased by more
//! wind or more rain.

use serde::{Deserialize, Serialize};

use crate::core_types::daily::DailyRecord;
use crate::core_types::weather_code::WmoCode;

/// Weights and neutral defaults for the comfort score.
///
/// The exact values are heuristic; they live here, in one place, so the
/// scoring behavior is auditable and testable in isolation.
pub mod comfort_weights {
    /// Score before any penalty
    pub const BASE_SCORE: f64 = 10.0;

    /// Lower edge of the ideal temperature band (°C)
    pub const IDEAL_TEMP_MIN: f64 = 18.0;
    /// Upper edge of the ideal temperature band (°C)
    pub const IDEAL_TEMP_MAX: f64 = 24.0;
    /// Penalty per °C outside the ideal band
    pub const TEMP_PENALTY_PER_DEGREE: f64 = 0.3;
    /// Ceiling on the temperature penalty
    pub const TEMP_PENALTY_CAP: f64 = 5.0;

    /// Penalty per km/h of sustained wind
    pub const WIND_PENALTY_PER_KMH: f64 = 0.06;
    /// Penalty per km/h of gusts
    pub const GUST_PENALTY_PER_KMH: f64 = 0.015;

    /// Rain at or below this total does not count as measurable (mm)
    pub const RAIN_EPSILON_MM: f64 = 0.1;
    /// Flat penalty once rain is measurable
    pub const RAIN_FLAT_PENALTY: f64 = 1.0;
    /// Additional penalty per mm of rain
    pub const RAIN_PENALTY_PER_MM: f64 = 0.2;

    /// Penalty at 100% cloud cover, scaled linearly
    pub const CLOUD_PENALTY_FULL_COVER: f64 = 1.5;
    /// Penalty at 100% precipitation probability, scaled linearly
    pub const PRECIP_PROBABILITY_PENALTY: f64 = 1.0;

    /// Comfortable relative-humidity band (%)
    pub const HUMIDITY_COMFORT_MIN: f64 = 40.0;
    pub const HUMIDITY_COMFORT_MAX: f64 = 60.0;
    /// Penalty per percentage point outside the comfortable band
    pub const HUMIDITY_PENALTY_PER_PERCENT: f64 = 0.02;

    /// Penalty at the maximum weather-code severity, scaled linearly
    pub const CODE_SEVERITY_PENALTY: f64 = 1.0;

    /// Sunshine bonus for a pleasant, bright day
    pub const SUN_BONUS: f64 = 1.0;
    /// Minimum UV index for the sunshine bonus
    pub const SUN_BONUS_MIN_UV: f64 = 5.0;
    /// Maximum cloud cover for the sunshine bonus (%)
    pub const SUN_BONUS_MAX_CLOUD: f64 = 30.0;

    // Neutral estimates substituted for missing readings. This masks
    // missing data as a plausible value, a known precision loss kept for
    // score stability across sparse sources.
    pub const DEFAULT_TEMPERATURE: f64 = 20.0;
    pub const DEFAULT_WIND_KMH: f64 = 10.0;
    pub const DEFAULT_GUST_FACTOR: f64 = 1.5;
    pub const DEFAULT_HUMIDITY: f64 = 60.0;
    pub const DEFAULT_CLOUD_COVER: f64 = 50.0;
    pub const DEFAULT_PRECIP_PROBABILITY: f64 = 30.0;
    pub const DEFAULT_UV_INDEX: f64 = 3.0;
}

/// One day's readings for the comfort score.
///
/// Every numeric field is required; construction from a sparse record
/// substitutes the documented neutral defaults rather than propagating
/// absence, so the score is always computable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortInput {
    /// Representative temperature (°C)
    pub temperature: f64,
    /// Sustained wind speed (km/h)
    pub wind_speed: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Precipitation total (mm)
    pub precipitation: f64,
    /// Cloud cover (%)
    pub cloud_cover: f64,
    /// Precipitation probability (%)
    pub precipitation_probability: f64,
    /// WMO weather code, if reported
    pub weather_code: Option<WmoCode>,
    /// Wind gusts (km/h)
    pub wind_gusts: f64,
    /// UV index
    pub uv_index: f64,
}

impl ComfortInput {
    /// Build an input from a daily record, filling gaps with the neutral
    /// defaults in [`comfort_weights`].
    pub fn from_record(record: &DailyRecord) -> Self {
        use comfort_weights as w;

        let temperature = record
            .temp_max
            .or(record.temp_mean)
            .unwrap_or(w::DEFAULT_TEMPERATURE);
        let wind_speed = record.wind_speed_max.unwrap_or(w::DEFAULT_WIND_KMH);
        ComfortInput {
            temperature,
            wind_speed,
            humidity: w::DEFAULT_HUMIDITY,
            precipitation: record.precipitation_sum.unwrap_or(0.0),
            cloud_cover: record.cloud_cover_mean.unwrap_or(w::DEFAULT_CLOUD_COVER),
            precipitation_probability: w::DEFAULT_PRECIP_PROBABILITY,
            weather_code: record.weather_code.map(WmoCode),
            wind_gusts: record
                .wind_gust_max
                .unwrap_or(wind_speed * w::DEFAULT_GUST_FACTOR),
            uv_index: w::DEFAULT_UV_INDEX,
        }
    }
}

/// Comfort score for one day, 0-10.
pub fn comfort_score(input: &ComfortInput) -> u8 {
    use comfort_weights as w;

    let mut score = w::BASE_SCORE;

    let temp_deviation = if input.temperature < w::IDEAL_TEMP_MIN {
        w::IDEAL_TEMP_MIN - input.temperature
    } else if input.temperature > w::IDEAL_TEMP_MAX {
        input.temperature - w::IDEAL_TEMP_MAX
    } else {
        0.0
    };
    score -= (temp_deviation * w::TEMP_PENALTY_PER_DEGREE).min(w::TEMP_PENALTY_CAP);

    score -= input.wind_speed.max(0.0) * w::WIND_PENALTY_PER_KMH;
    score -= input.wind_gusts.max(0.0) * w::GUST_PENALTY_PER_KMH;

    if input.precipitation > w::RAIN_EPSILON_MM {
        score -= w::RAIN_FLAT_PENALTY + input.precipitation * w::RAIN_PENALTY_PER_MM;
    }

    score -= (input.cloud_cover / 100.0).clamp(0.0, 1.0) * w::CLOUD_PENALTY_FULL_COVER;
    score -= (input.precipitation_probability / 100.0).clamp(0.0, 1.0)
        * w::PRECIP_PROBABILITY_PENALTY;

    let humidity_deviation = if input.humidity < w::HUMIDITY_COMFORT_MIN {
        w::HUMIDITY_COMFORT_MIN - input.humidity
    } else if input.humidity > w::HUMIDITY_COMFORT_MAX {
        input.humidity - w::HUMIDITY_COMFORT_MAX
    } else {
        0.0
    };
    score -= humidity_deviation * w::HUMIDITY_PENALTY_PER_PERCENT;

    if let Some(code) = input.weather_code {
        score -= f64::from(code.severity()) / 100.0 * w::CODE_SEVERITY_PENALTY;
    }

    let pleasant_band = (w::IDEAL_TEMP_MIN..=w::IDEAL_TEMP_MAX).contains(&input.temperature);
    if pleasant_band && input.uv_index >= w::SUN_BONUS_MIN_UV && input.cloud_cover < w::SUN_BONUS_MAX_CLOUD
    {
        score += w::SUN_BONUS;
    }

    score.clamp(0.0, 10.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pleasant() -> ComfortInput {
        ComfortInput {
            temperature: 22.0,
            wind_speed: 8.0,
            humidity: 50.0,
            precipitation: 0.0,
            cloud_cover: 10.0,
            precipitation_probability: 5.0,
            weather_code: Some(WmoCode(1)),
            wind_gusts: 12.0,
            uv_index: 6.0,
        }
    }

    #[test]
    fn test_score_bounds() {
        let extremes = [
            pleasant(),
            ComfortInput {
                temperature: -25.0,
                wind_speed: 120.0,
                humidity: 100.0,
                precipitation: 80.0,
                cloud_cover: 100.0,
                precipitation_probability: 100.0,
                weather_code: Some(WmoCode(99)),
                wind_gusts: 180.0,
                uv_index: 0.0,
            },
            ComfortInput {
                temperature: 45.0,
                wind_speed: 0.0,
                humidity: 0.0,
                precipitation: 0.0,
                cloud_cover: 0.0,
                precipitation_probability: 0.0,
                weather_code: None,
                wind_gusts: 0.0,
                uv_index: 11.0,
            },
        ];
        for input in extremes {
            let score = comfort_score(&input);
            assert!(score <= 10, "score out of range: {score} for {input:?}");
        }
    }

    #[test]
    fn test_pleasant_day_scores_high() {
        assert_eq!(comfort_score(&pleasant()), 10);
    }

    #[test]
    fn test_stormy_day_scores_low() {
        let stormy = ComfortInput {
            temperature: 5.0,
            wind_speed: 45.0,
            humidity: 95.0,
            precipitation: 20.0,
            cloud_cover: 100.0,
            precipitation_probability: 90.0,
            weather_code: Some(WmoCode(95)),
            wind_gusts: 70.0,
            uv_index: 0.0,
        };
        assert_eq!(comfort_score(&stormy), 0);
    }

    #[test]
    fn test_more_wind_never_raises_score() {
        let mut input = pleasant();
        let mut previous = comfort_score(&input);
        for wind in 0..200 {
            input.wind_speed = f64::from(wind);
            let score = comfort_score(&input);
            assert!(
                score <= previous,
                "score rose with wind: {score} > {previous} at {wind} km/h"
            );
            previous = score;
        }
    }

    #[test]
    fn test_more_rain_never_raises_score() {
        let mut input = pleasant();
        let mut previous = comfort_score(&input);
        for tenths in 0..400 {
            input.precipitation = f64::from(tenths) / 10.0;
            let score = comfort_score(&input);
            assert!(
                score <= previous,
                "score rose with rain: {score} > {previous} at {}mm",
                input.precipitation
            );
            previous = score;
        }
    }

    #[test]
    fn test_sparse_record_uses_documented_defaults() {
        let record = DailyRecord::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let input = ComfortInput::from_record(&record);
        assert_eq!(input.temperature, comfort_weights::DEFAULT_TEMPERATURE);
        assert_eq!(input.humidity, comfort_weights::DEFAULT_HUMIDITY);
        assert_eq!(input.cloud_cover, comfort_weights::DEFAULT_CLOUD_COVER);
        assert_eq!(
            input.wind_gusts,
            comfort_weights::DEFAULT_WIND_KMH * comfort_weights::DEFAULT_GUST_FACTOR
        );
        // The defaults produce a midline score, not an extreme one
        let score = comfort_score(&input);
        assert!((4..=9).contains(&score), "default score was {score}");
    }

    #[test]
    fn test_deterministic() {
        let input = pleasant();
        assert_eq!(comfort_score(&input), comfort_score(&input));
    }
}
