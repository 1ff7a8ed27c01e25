//! Seasonal index, rain season, and climate classification profiles
use approx::assert_abs_diff_eq;
use weather_metrics_core::indices::climate::{PrecipitationRegime, TemperatureRegime};
use weather_metrics_core::{
    calculate_bsi, classify_climate, detect_rain_season, MonthlyAverage, SeasonalityBand,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn profile(temps: [f64; 12], rains: [f64; 12]) -> Vec<MonthlyAverage> {
    (0..12u32)
        .map(|m| MonthlyAverage::new(m, temps[m as usize], rains[m as usize]))
        .collect()
}

#[test]
fn test_bsi_score_exactly_25_reports_moderate() {
    init_tracing();
    // Flat temperatures; rainfall engineered to a coefficient of
    // variation of exactly 0.75, which contributes exactly 25 points
    let mut rains = [35.0; 12];
    for slot in rains.iter_mut().take(6) {
        *slot = 5.0;
    }
    let bsi = calculate_bsi(&profile([20.0; 12], rains)).unwrap();
    assert_abs_diff_eq!(bsi.score, 25.0, epsilon = 1e-9);
    assert_eq!(bsi.band, SeasonalityBand::Moderate);
    assert_eq!(bsi.band.label(), "moderate");
}

#[test]
fn test_bsi_score_exactly_75_reports_extreme() {
    // Full-scale temperature amplitude plus rainfall variation of 0.45
    let mut temps = [0.0; 12];
    temps[6] = 40.0;
    let mut rains = [29.0; 12];
    for slot in rains.iter_mut().take(6) {
        *slot = 11.0;
    }
    let bsi = calculate_bsi(&profile(temps, rains)).unwrap();
    assert_abs_diff_eq!(bsi.score, 75.0, epsilon = 1e-9);
    assert_eq!(bsi.band, SeasonalityBand::Extreme);
}

#[test]
fn test_uniform_rain_never_detects_a_season() {
    init_tracing();
    let season = detect_rain_season(&profile([20.0; 12], [20.0; 12]));
    assert!(!season.has_season);
    assert_eq!(season.percentage, 0.0);
}

#[test]
fn test_monsoon_profile_end_to_end() {
    // Hot and stable, with summer rain concentrated enough for a season
    let temps = [
        25.0, 26.0, 27.0, 28.0, 28.0, 27.0, 27.0, 27.0, 27.0, 27.0, 26.0, 25.0,
    ];
    // Flat enough that no two-month window reaches the share threshold;
    // the minimal qualifying window is the full Jun-Aug monsoon
    let rains = [
        30.0, 30.0, 35.0, 40.0, 50.0, 100.0, 100.0, 100.0, 60.0, 40.0, 30.0, 30.0,
    ];
    let months = profile(temps, rains);

    let season = detect_rain_season(&months);
    assert!(season.has_season);
    assert_eq!(season.start_month, Some(5));
    assert_eq!(season.end_month, Some(7));

    let climate = classify_climate(&months).unwrap();
    assert_eq!(climate.temperature_regime, TemperatureRegime::HotStable);
    assert_eq!(climate.precipitation_regime, PrecipitationRegime::WetSeason);
    assert_eq!(climate.label, "Tropical monsoon");

    // A monsoon climate reads as seasonal on the rainfall axis
    let bsi = calculate_bsi(&months).unwrap();
    assert!(bsi.rainfall_variability > 0.4, "CV was {}", bsi.rainfall_variability);
}

#[test]
fn test_continental_profile_scores_higher_than_maritime() {
    let continental = profile(
        [
            -8.0, -6.0, 0.0, 8.0, 15.0, 20.0, 22.0, 21.0, 15.0, 8.0, 1.0, -6.0,
        ],
        [30.0, 28.0, 32.0, 38.0, 50.0, 70.0, 80.0, 70.0, 50.0, 40.0, 35.0, 32.0],
    );
    let maritime = profile(
        [
            8.0, 8.0, 9.0, 11.0, 13.0, 16.0, 17.0, 17.0, 15.0, 12.0, 10.0, 9.0,
        ],
        [90.0, 70.0, 75.0, 65.0, 60.0, 65.0, 70.0, 80.0, 85.0, 95.0, 100.0, 95.0],
    );

    let bsi_continental = calculate_bsi(&continental).unwrap();
    let bsi_maritime = calculate_bsi(&maritime).unwrap();
    assert!(
        bsi_continental.score > bsi_maritime.score,
        "continental {} should beat maritime {}",
        bsi_continental.score,
        bsi_maritime.score
    );
    assert_eq!(bsi_maritime.band, SeasonalityBand::Stable);
}
