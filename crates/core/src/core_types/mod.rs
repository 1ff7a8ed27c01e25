//! Core data types and unit handling

pub mod daily;
pub mod source;
pub mod units;
pub mod weather_code;

pub use daily::{
    aggregate_monthly, month_name, DailyRecord, DaySnapshot, MonthlyAverage, CONTEXT_WINDOW_DAYS,
};
pub use source::{normalize, ColumnarDailyData, DailySource, NormalizeError};
pub use units::{
    beaufort_from_kmh, beaufort_from_reading, compass_point, convert_precip, convert_pressure,
    convert_temp, convert_wind, PrecipUnit, PressureUnit, TempUnit, UnitPreferences, WindUnit,
};
pub use weather_code::WmoCode;
