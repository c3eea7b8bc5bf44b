//! Daily value reference tables
//!
//! Adult reference amounts used for the %DV / %RDA columns. Each table
//! returns `None` for nutrients that have no declared reference in that
//! jurisdiction (US labels carry no %DV for protein or sugars, for
//! example), and the builder suppresses the percent cell accordingly.

use crate::models::Nutrient;

/// Canadian combined saturated + trans reference, in grams
///
/// Canada expresses one %DV for the sum of the two fats rather than a
/// reference per fat.
pub const CANADA_SAT_TRANS_DV_G: f64 = 20.0;

/// US FDA daily values (adults and children 4+)
pub fn us_daily_value(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::TotalFat => Some(78.0),
        Nutrient::SaturatedFat => Some(20.0),
        Nutrient::Cholesterol => Some(300.0),
        Nutrient::Sodium => Some(2300.0),
        Nutrient::TotalCarbohydrate => Some(275.0),
        Nutrient::DietaryFiber => Some(28.0),
        Nutrient::AddedSugars => Some(50.0),
        Nutrient::VitaminD => Some(20.0),
        Nutrient::Calcium => Some(1300.0),
        Nutrient::Iron => Some(18.0),
        Nutrient::Potassium => Some(4700.0),
        _ => None,
    }
}

/// Health Canada daily values
///
/// Saturated and trans fats are covered jointly by
/// [`CANADA_SAT_TRANS_DV_G`], so both return `None` here. Total sugars
/// carries a reference (100 g) where the US table has none.
pub fn canada_daily_value(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::TotalFat => Some(75.0),
        Nutrient::Sodium => Some(2300.0),
        Nutrient::DietaryFiber => Some(28.0),
        Nutrient::TotalSugars => Some(100.0),
        Nutrient::Potassium => Some(3400.0),
        Nutrient::Calcium => Some(1300.0),
        Nutrient::Iron => Some(18.0),
        _ => None,
    }
}

/// FSSAI recommended dietary allowances (per 2000 kcal)
///
/// Indian labels print %RDA per serve for energy, sugars, fat and sodium
/// only.
pub fn india_rda(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::Calories => Some(2000.0),
        Nutrient::AddedSugars => Some(50.0),
        Nutrient::TotalFat => Some(67.0),
        Nutrient::SaturatedFat => Some(22.0),
        Nutrient::TransFat => Some(2.0),
        Nutrient::Sodium => Some(2000.0),
        _ => None,
    }
}
