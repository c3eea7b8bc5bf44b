//! Insignificant-amount thresholds
//!
//! FDA simplified-format rules let a label omit nutrients present in
//! amounts the regulation treats as zero. A nutrient is insignificant when
//! its raw amount is strictly below its threshold; a nutrient with no
//! threshold here is always significant.

use crate::models::Nutrient;

fn insignificance_threshold(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::TransFat => Some(0.5),
        Nutrient::Cholesterol => Some(2.0),
        Nutrient::DietaryFiber => Some(1.0),
        Nutrient::TotalSugars => Some(1.0),
        Nutrient::AddedSugars => Some(1.0),
        Nutrient::VitaminD => Some(2.0),
        Nutrient::Calcium => Some(20.0),
        Nutrient::Iron => Some(0.36),
        Nutrient::Potassium => Some(140.0),
        _ => None,
    }
}

/// Whether an amount may be omitted from a simplified label
pub fn is_insignificant(nutrient: Nutrient, amount: f64) -> bool {
    match insignificance_threshold(nutrient) {
        Some(threshold) => amount < threshold,
        None => false,
    }
}
