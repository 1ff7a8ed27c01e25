//! Comparative insight generation
//!
//! Turns one or two day-snapshots (each with a trailing context window)
//! into an ordered list of human-readable observations. The pipeline is a
//! fixed sequence of independent checks; each check either emits exactly
//! one insight (or one per analyzed day for the per-day checks) or is
//! silently skipped when its trigger condition is not met or a required
//! reading is absent. The emission order is part of the contract:
//! consumers render insights in generation order.
//!
//! Two-day comparison checks are skipped entirely in single-day mode, and
//! every context-window check is skipped when the window holds fewer than
//! [`CONTEXT_WINDOW_DAYS`](crate::core_types::CONTEXT_WINDOW_DAYS) entries.

mod compare;
mod context;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::daily::{DailyRecord, DaySnapshot};
use crate::core_types::units::{PrecipUnit, TempUnit, UnitPreferences};

/// Color hint attached to each insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTone {
    Positive,
    Negative,
    Neutral,
    Info,
    Warning,
}

/// One comparative observation, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub tone: InsightTone,
}

impl Insight {
    pub(crate) fn new(
        icon: &str,
        title: &str,
        description: impl Into<String>,
        tone: InsightTone,
    ) -> Self {
        Insight {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.into(),
            tone,
        }
    }
}

/// Trigger thresholds for the insight checks.
///
/// Temperature and precipitation values are canonical (°C, mm) and are
/// converted to the active display unit before comparison; plain
/// difference thresholds apply to display-unit numbers directly.
pub mod insight_thresholds {
    /// Daytime-high difference worth calling out (display degrees)
    pub const TEMP_DIFF_MIN: f64 = 2.0;
    /// A day at or above this precipitation counts as rainy (mm)
    pub const WET_DAY_MIN_MM: f64 = 1.0;
    /// Wind difference worth calling out (display units)
    pub const WIND_DIFF_MIN: f64 = 10.0;

    /// Clothing bands over the daytime high (°C)
    pub const HEAVY_COAT_BELOW_C: f64 = 10.0;
    pub const JACKET_BELOW_C: f64 = 16.0;
    pub const LIGHT_LAYERS_BELOW_C: f64 = 22.0;

    /// Cycling suitability scoring
    pub const CYCLING_BASE: f64 = 10.0;
    pub const CYCLING_WIND_DIVISOR: f64 = 10.0;
    pub const CYCLING_RAIN_FACTOR: f64 = 2.0;
    pub const CYCLING_COLD_BELOW_C: f64 = 5.0;
    pub const CYCLING_COLD_PENALTY: f64 = 2.0;
    pub const CYCLING_HOT_ABOVE_C: f64 = 30.0;
    pub const CYCLING_HOT_PENALTY: f64 = 1.0;
    pub const CYCLING_MIN: f64 = 1.0;
    pub const CYCLING_MAX: f64 = 10.0;

    /// Day temperature-span difference worth calling out (display degrees)
    pub const SPAN_DIFF_MIN: f64 = 5.0;

    /// Extremes flags (°C)
    pub const FROST_BELOW_C: f64 = 0.0;
    pub const TROPICAL_ABOVE_C: f64 = 30.0;

    /// Overall-winner weighting
    pub const WINNER_TEMP_DIVISOR: f64 = 3.0;
    pub const WINNER_RAIN_FACTOR: f64 = 1.5;
    pub const WINNER_WIND_DIVISOR: f64 = 10.0;

    /// Consecutive rainy days for a streak, and what counts as rain (mm)
    pub const RAIN_STREAK_MIN_DAYS: usize = 3;
    pub const RAIN_STREAK_MIN_MM: f64 = 0.5;

    /// First-half vs second-half change for a trend (display degrees)
    pub const TREND_MIN_DELTA: f64 = 3.0;

    /// Cold snap: consecutive days below the cool threshold (°C)
    pub const COLD_SNAP_MIN_DAYS: usize = 3;
    pub const COLD_SNAP_BELOW_C: f64 = 5.0;

    /// Dry spell: every window day below this total (mm)
    pub const DRY_SPELL_MAX_MM: f64 = 0.5;

    /// Windy spell: consecutive days at or above this Beaufort step
    pub const WINDY_SPELL_MIN_DAYS: usize = 3;
    pub const WINDY_SPELL_MIN_BEAUFORT: u8 = 6;

    /// Heating flag: window mean nightly minimum below this (°C)
    pub const HEATING_MEAN_MIN_BELOW_C: f64 = 12.0;

    /// Watering flag: window rain under this total (mm) while the mean
    /// daytime high exceeds the warm threshold (°C)
    pub const WATERING_MAX_TOTAL_MM: f64 = 2.0;
    pub const WATERING_MEAN_MAX_ABOVE_C: f64 = 24.0;

    /// Night-cooling trend: first-half minus second-half mean minimum
    /// (display degrees)
    pub const NIGHT_COOLING_MIN_DELTA: f64 = 2.0;

    /// Monotony: same weather code on at least this many window days
    pub const MONOTONY_MIN_DAYS: usize = 5;

    /// Volatility: mean day-to-day high change above this (display degrees)
    pub const VOLATILITY_MIN_MEAN_DELTA: f64 = 4.0;

    /// Weekly mean-high difference worth calling out (display degrees)
    pub const WEEKLY_AVG_DIFF_MIN: f64 = 2.0;

    /// Weekly rain-total difference worth calling out (mm)
    pub const WEEKLY_RAIN_DIFF_MIN_MM: f64 = 5.0;
}

/// Generate the ordered insight list for one day, or for a comparison of
/// two days when `other` is supplied.
pub fn generate_insights(
    day: &DaySnapshot,
    other: Option<&DaySnapshot>,
    prefs: &UnitPreferences,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(other) = other {
        push(
            &mut insights,
            compare::temperature_difference(&day.record, &other.record, prefs),
        );
        push(
            &mut insights,
            compare::precipitation_comparison(&day.record, &other.record, prefs),
        );
        push(
            &mut insights,
            compare::wind_comparison(&day.record, &other.record, prefs),
        );
    }

    push(&mut insights, compare::clothing_advice(&day.record, prefs));
    if let Some(other) = other {
        push(&mut insights, compare::clothing_advice(&other.record, prefs));
    }

    push(
        &mut insights,
        compare::cycling_suitability(&day.record, prefs),
    );
    if let Some(other) = other {
        push(
            &mut insights,
            compare::cycling_suitability(&other.record, prefs),
        );
    }

    if let Some(other) = other {
        push(
            &mut insights,
            compare::span_comparison(&day.record, &other.record),
        );
    }

    push(&mut insights, compare::extremes_flag(&day.record, prefs));

    if let Some(other) = other {
        push(
            &mut insights,
            compare::overall_winner(&day.record, &other.record),
        );
    }

    if day.has_full_context() {
        let window = &day.context;
        push(&mut insights, context::rain_streak(window, prefs));
        push(&mut insights, context::temperature_trend(window));
        push(&mut insights, context::weekly_peak_day(window));
        push(&mut insights, context::weekend_flag(&day.record));
        push(&mut insights, context::cold_snap(window, prefs));
        push(&mut insights, context::dry_spell(window, prefs));
        push(&mut insights, context::windy_spell(window, prefs));
        push(&mut insights, context::heating_need(window, prefs));
        push(&mut insights, context::watering_need(window, prefs));
        push(&mut insights, context::night_cooling_trend(window));
        push(&mut insights, context::weather_code_monotony(window));
        push(&mut insights, context::day_to_day_volatility(window));
    } else {
        debug!(
            context_days = day.context.len(),
            "context window too short, skipping trend checks"
        );
    }

    if let Some(other) = other {
        if day.has_full_context() && other.has_full_context() {
            push(
                &mut insights,
                context::weekly_average_comparison(&day.context, &other.context),
            );
            push(
                &mut insights,
                context::weekly_rain_comparison(&day.context, &other.context, prefs),
            );
        }
    }

    insights
}

fn push(insights: &mut Vec<Insight>, insight: Option<Insight>) {
    if let Some(insight) = insight {
        insights.push(insight);
    }
}

/// Short display label for a day, e.g. "Jul 15"
pub(crate) fn day_label(record: &DailyRecord) -> String {
    record.date.format("%b %-d").to_string()
}

/// Convert a canonical °C threshold to the active display unit
pub(crate) fn temp_threshold(celsius: f64, prefs: &UnitPreferences) -> f64 {
    match prefs.temperature {
        TempUnit::Celsius => celsius,
        TempUnit::Fahrenheit => crate::core_types::units::celsius_to_fahrenheit(celsius),
    }
}

/// Convert a canonical mm threshold to the active display unit
pub(crate) fn precip_threshold(mm: f64, prefs: &UnitPreferences) -> f64 {
    match prefs.precipitation {
        PrecipUnit::Millimeters => mm,
        PrecipUnit::Inches => crate::core_types::units::mm_to_inch(mm),
    }
}

/// Format a temperature difference for display, e.g. "3.5°"
pub(crate) fn format_degrees(value: f64) -> String {
    format!("{value:.1}°")
}
