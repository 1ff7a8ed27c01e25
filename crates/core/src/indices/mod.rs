//! Derived index calculators
//!
//! Stateless transforms from daily or monthly weather data to scalar
//! indices and classifications. Every calculator is pure; missing input
//! degrades to a skipped or absent result, never to a fabricated zero.

pub mod climate;
pub mod comfort;
pub mod humidex;
pub mod rain_season;
pub mod seasonal;

pub use climate::{classify_climate, ClimateClassification, PrecipitationRegime, TemperatureRegime};
pub use comfort::{comfort_score, ComfortInput};
pub use humidex::{
    classify_humidex, dew_point_from_humidity, humidex, humidex_rounded, in_supported_range,
    HumidexComfort,
};
pub use rain_season::{detect_rain_season, RainSeason, RainSeasonIntensity};
pub use seasonal::{calculate_bsi, BaroSeasonalIndex, SeasonalityBand};
