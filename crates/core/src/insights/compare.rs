//! Two-day and per-day insight checks
//!
//! The head of the insight pipeline: direct comparisons of the two day
//! records plus per-day advice. Each check returns `None` when a required
//! reading is absent or its trigger is not met.

use super::{
    day_label, format_degrees, insight_thresholds as t, precip_threshold, temp_threshold, Insight,
    InsightTone,
};
use crate::core_types::daily::DailyRecord;
use crate::core_types::units::UnitPreferences;

/// Check 1: daytime-high difference, or a "similar" note when the days
/// are within the threshold.
pub(super) fn temperature_difference(
    a: &DailyRecord,
    b: &DailyRecord,
    prefs: &UnitPreferences,
) -> Option<Insight> {
    let (high_a, high_b) = (a.temp_max?, b.temp_max?);
    let diff = high_a - high_b;

    if diff.abs() < t::TEMP_DIFF_MIN {
        return Some(Insight::new(
            "\u{1F321}",
            "Temperature",
            format!(
                "{} and {} had similar daytime highs",
                day_label(a),
                day_label(b)
            ),
            InsightTone::Neutral,
        ));
    }

    let (warmer, cooler) = if diff > 0.0 { (a, b) } else { (b, a) };
    Some(Insight::new(
        "\u{1F321}",
        "Temperature",
        format!(
            "{} was {:.1}{} warmer than {}",
            day_label(warmer),
            diff.abs(),
            prefs.temperature.symbol(),
            day_label(cooler)
        ),
        InsightTone::Info,
    ))
}

/// Check 2: precipitation comparison.
pub(super) fn precipitation_comparison(
    a: &DailyRecord,
    b: &DailyRecord,
    prefs: &UnitPreferences,
) -> Option<Insight> {
    let (rain_a, rain_b) = (a.precipitation_sum?, b.precipitation_sum?);
    let wet_min = precip_threshold(t::WET_DAY_MIN_MM, prefs);

    let insight = match (rain_a >= wet_min, rain_b >= wet_min) {
        (true, true) => Insight::new(
            "\u{1F327}",
            "Rain",
            "Both days saw real rain",
            InsightTone::Info,
        ),
        (false, false) => Insight::new(
            "\u{1F324}",
            "Rain",
            "Both days stayed dry",
            InsightTone::Positive,
        ),
        (true, false) => Insight::new(
            "\u{1F327}",
            "Rain",
            format!(
                "{} was the wetter day ({:.1} vs {:.1} {})",
                day_label(a),
                rain_a,
                rain_b,
                prefs.precipitation.symbol()
            ),
            InsightTone::Info,
        ),
        (false, true) => Insight::new(
            "\u{1F327}",
            "Rain",
            format!(
                "{} was the wetter day ({:.1} vs {:.1} {})",
                day_label(b),
                rain_b,
                rain_a,
                prefs.precipitation.symbol()
            ),
            InsightTone::Info,
        ),
    };
    Some(insight)
}

/// Check 3: wind comparison with a fixed difference threshold.
pub(super) fn wind_comparison(
    a: &DailyRecord,
    b: &DailyRecord,
    prefs: &UnitPreferences,
) -> Option<Insight> {
    let (wind_a, wind_b) = (a.wind_speed_max?, b.wind_speed_max?);
    let diff = wind_a - wind_b;

    if diff.abs() < t::WIND_DIFF_MIN {
        return Some(Insight::new(
            "\u{1F32C}",
            "Wind",
            "Wind was about the same on both days",
            InsightTone::Neutral,
        ));
    }

    let windier = if diff > 0.0 { a } else { b };
    Some(Insight::new(
        "\u{1F32C}",
        "Wind",
        format!(
            "{} was noticeably windier ({:.0} vs {:.0} {})",
            day_label(windier),
            wind_a.max(wind_b),
            wind_a.min(wind_b),
            prefs.wind.symbol()
        ),
        InsightTone::Info,
    ))
}

/// Check 4: clothing advice from the daytime high.
pub(super) fn clothing_advice(record: &DailyRecord, prefs: &UnitPreferences) -> Option<Insight> {
    let high = record.temp_max?;

    let (advice, icon) = if high < temp_threshold(t::HEAVY_COAT_BELOW_C, prefs) {
        ("a heavy coat", "\u{1F9E5}")
    } else if high < temp_threshold(t::JACKET_BELOW_C, prefs) {
        ("a jacket", "\u{1F9E5}")
    } else if high < temp_threshold(t::LIGHT_LAYERS_BELOW_C, prefs) {
        ("light layers", "\u{1F455}")
    } else {
        ("shorts weather", "\u{1FA73}")
    };

    Some(Insight::new(
        icon,
        "What to wear",
        format!("{}: {}", day_label(record), advice),
        InsightTone::Info,
    ))
}

/// Check 5: cycling suitability score.
///
/// Needs the daytime high, sustained wind, and the rain total; any of the
/// three missing skips the check rather than guessing.
pub(super) fn cycling_suitability(
    record: &DailyRecord,
    prefs: &UnitPreferences,
) -> Option<Insight> {
    let high = record.temp_max?;
    let wind = record.wind_speed_max?;
    let rain = record.precipitation_sum?;

    let mut score = t::CYCLING_BASE;
    score -= wind / t::CYCLING_WIND_DIVISOR;
    score -= rain * t::CYCLING_RAIN_FACTOR;
    if high < temp_threshold(t::CYCLING_COLD_BELOW_C, prefs) {
        score -= t::CYCLING_COLD_PENALTY;
    }
    if high > temp_threshold(t::CYCLING_HOT_ABOVE_C, prefs) {
        score -= t::CYCLING_HOT_PENALTY;
    }
    let score = score.clamp(t::CYCLING_MIN, t::CYCLING_MAX).round() as u8;

    let tone = if score >= 7 {
        InsightTone::Positive
    } else if score >= 4 {
        InsightTone::Neutral
    } else {
        InsightTone::Negative
    };
    Some(Insight::new(
        "\u{1F6B4}",
        "Cycling",
        format!("{}: {score}/10 for a ride", day_label(record)),
        tone,
    ))
}

/// Check 6: day temperature-span comparison.
pub(super) fn span_comparison(a: &DailyRecord, b: &DailyRecord) -> Option<Insight> {
    let (span_a, span_b) = (a.temp_span()?, b.temp_span()?);
    if (span_a - span_b).abs() <= t::SPAN_DIFF_MIN {
        return None;
    }

    let swingier = if span_a > span_b { a } else { b };
    Some(Insight::new(
        "\u{2195}",
        "Temperature swing",
        format!(
            "{} swung much harder between day and night ({} vs {})",
            day_label(swingier),
            format_degrees(span_a.max(span_b)),
            format_degrees(span_a.min(span_b))
        ),
        InsightTone::Info,
    ))
}

/// Check 7: extreme readings on the first day only.
pub(super) fn extremes_flag(record: &DailyRecord, prefs: &UnitPreferences) -> Option<Insight> {
    if let Some(min) = record.temp_min {
        if min < temp_threshold(t::FROST_BELOW_C, prefs) {
            return Some(Insight::new(
                "\u{2744}",
                "Extremes",
                format!("{} dipped below freezing overnight", day_label(record)),
                InsightTone::Warning,
            ));
        }
    }
    if let Some(max) = record.temp_max {
        if max > temp_threshold(t::TROPICAL_ABOVE_C, prefs) {
            return Some(Insight::new(
                "\u{1F525}",
                "Extremes",
                format!("{} reached tropical heat", day_label(record)),
                InsightTone::Warning,
            ));
        }
    }
    None
}

/// Check 8: overall winner by weighted score.
///
/// Both daytime highs are required; an absent rain or wind reading
/// contributes nothing to that day's score. An exact tie emits nothing.
pub(super) fn overall_winner(a: &DailyRecord, b: &DailyRecord) -> Option<Insight> {
    let score_a = winner_score(a)?;
    let score_b = winner_score(b)?;
    if score_a == score_b {
        return None;
    }

    let winner = if score_a > score_b { a } else { b };
    Some(Insight::new(
        "\u{1F3C6}",
        "Better day",
        format!("{} takes it overall", day_label(winner)),
        InsightTone::Positive,
    ))
}

fn winner_score(record: &DailyRecord) -> Option<f64> {
    let high = record.temp_max?;
    let rain = record.precipitation_sum.unwrap_or(0.0);
    let wind = record.wind_speed_max.unwrap_or(0.0);
    Some(high / t::WINNER_TEMP_DIVISOR - rain * t::WINNER_RAIN_FACTOR - wind / t::WINNER_WIND_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(2024, 7, d).unwrap())
    }

    fn prefs() -> UnitPreferences {
        UnitPreferences::metric()
    }

    #[test]
    fn test_temperature_difference_direction() {
        let warm = DailyRecord {
            temp_max: Some(28.0),
            ..day(1)
        };
        let cool = DailyRecord {
            temp_max: Some(15.0),
            ..day(8)
        };
        let insight = temperature_difference(&warm, &cool, &prefs()).unwrap();
        assert!(insight.description.contains("Jul 1"));
        assert!(insight.description.contains("13.0°"));
        assert_eq!(insight.tone, InsightTone::Info);
    }

    #[test]
    fn test_similar_temperatures() {
        let a = DailyRecord {
            temp_max: Some(20.0),
            ..day(1)
        };
        let b = DailyRecord {
            temp_max: Some(21.5),
            ..day(2)
        };
        let insight = temperature_difference(&a, &b, &prefs()).unwrap();
        assert!(insight.description.contains("similar"));
        assert_eq!(insight.tone, InsightTone::Neutral);
    }

    #[test]
    fn test_temperature_difference_needs_both_highs() {
        let a = DailyRecord {
            temp_max: Some(20.0),
            ..day(1)
        };
        assert!(temperature_difference(&a, &day(2), &prefs()).is_none());
    }

    #[test]
    fn test_precipitation_states() {
        let wet = DailyRecord {
            precipitation_sum: Some(12.0),
            ..day(1)
        };
        let dry = DailyRecord {
            precipitation_sum: Some(0.0),
            ..day(2)
        };
        let both_dry = precipitation_comparison(&dry, &dry.clone(), &prefs()).unwrap();
        assert!(both_dry.description.contains("dry"));

        let mixed = precipitation_comparison(&wet, &dry, &prefs()).unwrap();
        assert!(mixed.description.contains("wetter"));
        assert!(mixed.description.contains("Jul 1"));
    }

    #[test]
    fn test_wind_comparison_threshold() {
        let breezy = DailyRecord {
            wind_speed_max: Some(35.0),
            ..day(1)
        };
        let calm = DailyRecord {
            wind_speed_max: Some(10.0),
            ..day(2)
        };
        let insight = wind_comparison(&breezy, &calm, &prefs()).unwrap();
        assert!(insight.description.contains("windier"));

        let similar = DailyRecord {
            wind_speed_max: Some(30.0),
            ..day(3)
        };
        let insight = wind_comparison(&breezy, &similar, &prefs()).unwrap();
        assert!(insight.description.contains("about the same"));
    }

    #[test]
    fn test_clothing_bands() {
        let cases = [
            (5.0, "a heavy coat"),
            (12.0, "a jacket"),
            (18.0, "light layers"),
            (26.0, "shorts weather"),
        ];
        for (high, expected) in cases {
            let record = DailyRecord {
                temp_max: Some(high),
                ..day(1)
            };
            let insight = clothing_advice(&record, &prefs()).unwrap();
            assert!(
                insight.description.contains(expected),
                "at {high}°C expected {expected:?}, got {:?}",
                insight.description
            );
        }
    }

    #[test]
    fn test_cycling_score() {
        let good = DailyRecord {
            temp_max: Some(20.0),
            wind_speed_max: Some(10.0),
            precipitation_sum: Some(0.0),
            ..day(1)
        };
        let insight = cycling_suitability(&good, &prefs()).unwrap();
        assert!(insight.description.contains("9/10"));

        let grim = DailyRecord {
            temp_max: Some(2.0),
            wind_speed_max: Some(40.0),
            precipitation_sum: Some(10.0),
            ..day(2)
        };
        let insight = cycling_suitability(&grim, &prefs()).unwrap();
        assert!(insight.description.contains("1/10"), "score clamps at 1");
    }

    #[test]
    fn test_cycling_needs_all_readings() {
        let no_wind = DailyRecord {
            temp_max: Some(20.0),
            precipitation_sum: Some(0.0),
            ..day(1)
        };
        assert!(cycling_suitability(&no_wind, &prefs()).is_none());
    }

    #[test]
    fn test_span_comparison() {
        let steady = DailyRecord {
            temp_max: Some(20.0),
            temp_min: Some(16.0),
            ..day(1)
        };
        let swingy = DailyRecord {
            temp_max: Some(30.0),
            temp_min: Some(12.0),
            ..day(2)
        };
        let insight = span_comparison(&steady, &swingy).unwrap();
        assert!(insight.description.contains("Jul 2"));

        // Within the threshold emits nothing
        let close = DailyRecord {
            temp_max: Some(24.0),
            temp_min: Some(16.0),
            ..day(3)
        };
        assert!(span_comparison(&steady, &close).is_none());
    }

    #[test]
    fn test_extremes_frost_wins_over_heat() {
        let desert_night = DailyRecord {
            temp_max: Some(33.0),
            temp_min: Some(-1.0),
            ..day(1)
        };
        let insight = extremes_flag(&desert_night, &prefs()).unwrap();
        assert!(insight.description.contains("freezing"));
    }

    #[test]
    fn test_overall_winner() {
        let nice = DailyRecord {
            temp_max: Some(24.0),
            precipitation_sum: Some(0.0),
            wind_speed_max: Some(8.0),
            ..day(1)
        };
        let grim = DailyRecord {
            temp_max: Some(12.0),
            precipitation_sum: Some(9.0),
            wind_speed_max: Some(30.0),
            ..day(2)
        };
        let insight = overall_winner(&nice, &grim).unwrap();
        assert!(insight.description.contains("Jul 1"));

        assert!(overall_winner(&nice, &nice.clone()).is_none(), "tie is silent");
    }
}
