//! Data models
//!
//! Shared structs and enums for nutrient declarations.

mod nutrient;
mod panel;

pub use nutrient::{Nutrient, NutrientValue, Unit};
pub use panel::{NutrientPanel, Nutrients, ServingInfo};
