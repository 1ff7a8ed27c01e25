//! Context-window insight checks
//!
//! The tail of the insight pipeline: trend and streak checks over a 7-day
//! trailing window. The driver only calls these with a full window; each
//! check still treats absent readings as breaking a streak or skipping the
//! check, never as zero.

use chrono::{Datelike, Weekday};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

use super::{
    format_degrees, insight_thresholds as t, precip_threshold, temp_threshold, Insight, InsightTone,
};
use crate::core_types::daily::DailyRecord;
use crate::core_types::units::{beaufort_from_reading, UnitPreferences};
use crate::core_types::weather_code::WmoCode;

/// Longest run of consecutive window days satisfying a predicate.
/// A day with the required reading absent breaks the run.
fn longest_run(window: &[DailyRecord], matches: impl Fn(&DailyRecord) -> Option<bool>) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for day in window {
        if matches(day).unwrap_or(false) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Mean of the first `n` readings, only when all `n` are present.
fn leading_mean(values: impl Iterator<Item = Option<f64>>, n: usize) -> Option<f64> {
    let collected: Option<Vec<f64>> = values.take(n).collect();
    let collected = collected?;
    if collected.len() < n {
        return None;
    }
    Some(collected.iter().sum::<f64>() / n as f64)
}

/// Check 9: rain streak.
pub(super) fn rain_streak(window: &[DailyRecord], prefs: &UnitPreferences) -> Option<Insight> {
    let wet_min = precip_threshold(t::RAIN_STREAK_MIN_MM, prefs);
    let run = longest_run(window, |day| {
        day.precipitation_sum.map(|rain| rain > wet_min)
    });
    if run < t::RAIN_STREAK_MIN_DAYS {
        return None;
    }
    Some(Insight::new(
        "\u{1F327}",
        "Rain streak",
        format!("It rained {run} days in a row this week"),
        InsightTone::Info,
    ))
}

/// Check 10: warming or cooling trend across the window.
pub(super) fn temperature_trend(window: &[DailyRecord]) -> Option<Insight> {
    let first = leading_mean(window.iter().map(|d| d.temp_max), 3)?;
    let last = leading_mean(window.iter().rev().map(|d| d.temp_max), 3)?;
    let delta = last - first;
    if delta.abs() < t::TREND_MIN_DELTA {
        return None;
    }

    if delta > 0.0 {
        Some(Insight::new(
            "\u{1F4C8}",
            "Trend",
            format!("The week warmed up by {}", format_degrees(delta)),
            InsightTone::Positive,
        ))
    } else {
        Some(Insight::new(
            "\u{1F4C9}",
            "Trend",
            format!("The week cooled down by {}", format_degrees(delta.abs())),
            InsightTone::Info,
        ))
    }
}

/// Check 11: warmest day of the window.
pub(super) fn weekly_peak_day(window: &[DailyRecord]) -> Option<Insight> {
    let peak = window
        .iter()
        .filter_map(|day| day.temp_max.map(|high| (day, high)))
        .max_by(|(_, a), (_, b)| a.total_cmp(b))?;
    Some(Insight::new(
        "\u{1F31E}",
        "Peak day",
        format!(
            "The warmest day this week was {}",
            peak.0.date.format("%A")
        ),
        InsightTone::Info,
    ))
}

/// Check 12: weekend flag for the analyzed day.
pub(super) fn weekend_flag(record: &DailyRecord) -> Option<Insight> {
    if !matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun) {
        return None;
    }
    Some(Insight::new(
        "\u{1F389}",
        "Weekend",
        "This day falls on a weekend",
        InsightTone::Positive,
    ))
}

/// Check 13: cold snap.
pub(super) fn cold_snap(window: &[DailyRecord], prefs: &UnitPreferences) -> Option<Insight> {
    let cold_max = temp_threshold(t::COLD_SNAP_BELOW_C, prefs);
    let run = longest_run(window, |day| day.temp_max.map(|high| high < cold_max));
    if run < t::COLD_SNAP_MIN_DAYS {
        return None;
    }
    Some(Insight::new(
        "\u{1F976}",
        "Cold snap",
        format!("Daytime highs stayed cold for {run} straight days"),
        InsightTone::Warning,
    ))
}

/// Check 14: dry spell. Needs a rain reading on every window day; a gap
/// means the week cannot be called dry.
pub(super) fn dry_spell(window: &[DailyRecord], prefs: &UnitPreferences) -> Option<Insight> {
    let dry_max = precip_threshold(t::DRY_SPELL_MAX_MM, prefs);
    let all_dry = window
        .iter()
        .map(|day| day.precipitation_sum.map(|rain| rain < dry_max))
        .try_fold(true, |acc, dry| dry.map(|d| acc && d))?;
    if !all_dry {
        return None;
    }
    Some(Insight::new(
        "\u{1F3DC}",
        "Dry spell",
        "No measurable rain fell all week",
        InsightTone::Info,
    ))
}

/// Check 15: windy spell.
pub(super) fn windy_spell(window: &[DailyRecord], prefs: &UnitPreferences) -> Option<Insight> {
    let run = longest_run(window, |day| {
        day.wind_speed_max
            .map(|wind| beaufort_from_reading(wind, prefs.wind) >= t::WINDY_SPELL_MIN_BEAUFORT)
    });
    if run < t::WINDY_SPELL_MIN_DAYS {
        return None;
    }
    Some(Insight::new(
        "\u{1F32C}",
        "Windy spell",
        format!("Strong winds held for {run} straight days"),
        InsightTone::Warning,
    ))
}

/// Check 16: heating need from the window's mean nightly minimum.
pub(super) fn heating_need(window: &[DailyRecord], prefs: &UnitPreferences) -> Option<Insight> {
    let mins: Vec<f64> = window.iter().filter_map(|day| day.temp_min).collect();
    if mins.is_empty() {
        return None;
    }
    let mean = mins.iter().sum::<f64>() / mins.len() as f64;
    if mean >= temp_threshold(t::HEATING_MEAN_MIN_BELOW_C, prefs) {
        return None;
    }
    Some(Insight::new(
        "\u{1F3E0}",
        "Heating",
        "Nights are cold enough to keep the heating on",
        InsightTone::Info,
    ))
}

/// Check 17: watering need from a hot, rainless window.
pub(super) fn watering_need(window: &[DailyRecord], prefs: &UnitPreferences) -> Option<Insight> {
    let rains: Vec<f64> = window
        .iter()
        .filter_map(|day| day.precipitation_sum)
        .collect();
    let highs: Vec<f64> = window.iter().filter_map(|day| day.temp_max).collect();
    if rains.is_empty() || highs.is_empty() {
        return None;
    }

    let total_rain: f64 = rains.iter().sum();
    let mean_high = highs.iter().sum::<f64>() / highs.len() as f64;
    if total_rain >= precip_threshold(t::WATERING_MAX_TOTAL_MM, prefs)
        || mean_high <= temp_threshold(t::WATERING_MEAN_MAX_ABOVE_C, prefs)
    {
        return None;
    }
    Some(Insight::new(
        "\u{1F331}",
        "Watering",
        "A hot, rainless week; gardens will need watering",
        InsightTone::Warning,
    ))
}

/// Check 18: night cooling trend.
pub(super) fn night_cooling_trend(window: &[DailyRecord]) -> Option<Insight> {
    let first = leading_mean(window.iter().map(|d| d.temp_min), 3)?;
    let last = leading_mean(window.iter().rev().map(|d| d.temp_min), 3)?;
    let drop = first - last;
    if drop < t::NIGHT_COOLING_MIN_DELTA {
        return None;
    }
    Some(Insight::new(
        "\u{1F319}",
        "Night cooling",
        format!("Nights cooled by {} through the week", format_degrees(drop)),
        InsightTone::Info,
    ))
}

/// Check 19: weather-code monotony.
pub(super) fn weather_code_monotony(window: &[DailyRecord]) -> Option<Insight> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for day in window {
        if let Some(code) = day.weather_code {
            *counts.entry(code).or_insert(0) += 1;
        }
    }
    // Smallest code wins a tied count, keeping the result deterministic
    let (&code, &days) = counts
        .iter()
        .max_by_key(|(&code, &count)| (count, Reverse(code)))?;
    if days < t::MONOTONY_MIN_DAYS {
        return None;
    }
    Some(Insight::new(
        WmoCode(code).icon(),
        "Steady weather",
        format!(
            "{} on {days} of {} days",
            WmoCode(code).description(),
            window.len()
        ),
        InsightTone::Neutral,
    ))
}

/// Check 20: day-to-day volatility of the daytime high.
pub(super) fn day_to_day_volatility(window: &[DailyRecord]) -> Option<Insight> {
    let deltas: Vec<f64> = window
        .windows(2)
        .filter_map(|pair| match (pair[0].temp_max, pair[1].temp_max) {
            (Some(a), Some(b)) => Some((b - a).abs()),
            _ => None,
        })
        .collect();
    if deltas.len() < 3 {
        return None;
    }
    let mean = deltas.iter().sum::<f64>() / deltas.len() as f64;
    if mean <= t::VOLATILITY_MIN_MEAN_DELTA {
        return None;
    }
    Some(Insight::new(
        "\u{1F3A2}",
        "Changeable weather",
        format!(
            "Daytime highs jumped around by {} a day on average",
            format_degrees(mean)
        ),
        InsightTone::Info,
    ))
}

/// Check 21: weekly mean-high comparison between the two windows.
pub(super) fn weekly_average_comparison(
    window_a: &[DailyRecord],
    window_b: &[DailyRecord],
) -> Option<Insight> {
    let mean = |window: &[DailyRecord]| {
        let highs: Vec<f64> = window.iter().filter_map(|day| day.temp_max).collect();
        if highs.is_empty() {
            None
        } else {
            Some(highs.iter().sum::<f64>() / highs.len() as f64)
        }
    };
    let (mean_a, mean_b) = (mean(window_a)?, mean(window_b)?);
    let diff = mean_a - mean_b;
    if diff.abs() < t::WEEKLY_AVG_DIFF_MIN {
        return None;
    }

    let direction = if diff > 0.0 { "warmer" } else { "cooler" };
    Some(Insight::new(
        "\u{1F4CA}",
        "Weekly averages",
        format!(
            "The first week averaged {} {direction} than the second",
            format_degrees(diff.abs())
        ),
        InsightTone::Info,
    ))
}

/// Check 22: weekly rain-total comparison between the two windows.
/// Absent daily readings contribute nothing to a week's total.
pub(super) fn weekly_rain_comparison(
    window_a: &[DailyRecord],
    window_b: &[DailyRecord],
    prefs: &UnitPreferences,
) -> Option<Insight> {
    let total = |window: &[DailyRecord]| -> f64 {
        window.iter().filter_map(|day| day.precipitation_sum).sum()
    };
    let (total_a, total_b) = (total(window_a), total(window_b));
    let diff = total_a - total_b;
    if diff.abs() < precip_threshold(t::WEEKLY_RAIN_DIFF_MIN_MM, prefs) {
        return None;
    }

    let direction = if diff > 0.0 { "wetter" } else { "drier" };
    Some(Insight::new(
        "\u{1F327}",
        "Weekly rain",
        format!(
            "The first week was {direction}: {total_a:.1} vs {total_b:.1} {}",
            prefs.precipitation.symbol()
        ),
        InsightTone::Info,
    ))
}
