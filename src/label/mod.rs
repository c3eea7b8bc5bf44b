//! Label computation module
//!
//! Handles regulatory rounding, daily-value percentages, and per-format
//! label assembly.

pub mod build;
pub mod daily_values;
pub mod format;
pub mod rounding;
pub mod significance;

pub use build::{
    build_aggregate_label, build_label, compute_display, AggregateItem, Label, LabelCell,
    LabelRow, KJ_PER_KCAL, SALT_G_PER_SODIUM_MG,
};
pub use daily_values::{
    canada_daily_value, india_rda, us_daily_value, CANADA_SAT_TRANS_DV_G,
};
pub use format::{
    ColumnBasis, DvTable, EnergyStyle, FormatSpec, LabelFormat, PercentSource, RowSpec,
};
pub use rounding::{percent_daily_value, round_nutrient_value};
pub use significance::is_insignificant;
