//! Weather Metrics & Insights Engine
//!
//! A pure, stateless computation layer over already-fetched daily weather
//! data. Feed it normalized daily records (or either raw provider shape)
//! and it returns derived classifications, scores, and comparative
//! narratives:
//!
//! - Unit conversion between metric and imperial-family display units,
//!   including the 13-step Beaufort scale
//! - Derived indices: humidex, comfort score, Baro Seasonal Index,
//!   climate classification, rain-season detection
//! - Daily category classification (sunny, rainy, windy, ...) and
//!   dataset-level category counts
//! - An ordered pipeline of comparative insights over one or two days,
//!   each with a 7-day trailing context window
//!
//! Every function is a deterministic, side-effect-free transform; missing
//! readings propagate as absence rather than being coerced to zero.

// Core data types, input shapes, and unit handling
pub mod core_types;

// Derived index calculators
pub mod indices;

// Daily category classification
pub mod categories;

// Comparative insight generation
pub mod insights;

// Re-export core types
pub use core_types::{
    aggregate_monthly, normalize, ColumnarDailyData, DailyRecord, DailySource, DaySnapshot,
    MonthlyAverage, NormalizeError, UnitPreferences, WmoCode,
};

// Re-export calculators
pub use categories::{classify_day, summarize_categories, CategoryCount, DayCategory};
pub use indices::{
    calculate_bsi, classify_climate, comfort_score, detect_rain_season, humidex, humidex_rounded,
    BaroSeasonalIndex, ClimateClassification, ComfortInput, HumidexComfort, RainSeason,
    SeasonalityBand,
};
pub use insights::{generate_insights, Insight, InsightTone};
