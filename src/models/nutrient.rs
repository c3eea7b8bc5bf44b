//! Nutrient identity model
//!
//! Names the nutrients that can appear on a facts panel, together with the
//! unit each one is declared in.

use serde::{Deserialize, Serialize};

/// Declaration unit for a nutrient amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Grams
    G,
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
    /// Energy; unitless on US panels, "kcal"/"kJ" elsewhere
    Kcal,
}

impl Unit {
    /// Suffix printed after the rounded amount
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::Mcg => "mcg",
            Unit::Kcal => "kcal",
        }
    }
}

/// A nutrient that can appear as a row on a facts panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    TotalFat,
    SaturatedFat,
    TransFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrate,
    DietaryFiber,
    TotalSugars,
    AddedSugars,
    Protein,
    VitaminD,
    Calcium,
    Iron,
    Potassium,
    /// Derived from sodium on EU panels; never stored on its own
    Salt,
}

impl Nutrient {
    /// Unit the nutrient is declared and rounded in
    pub fn unit(&self) -> Unit {
        match self {
            Nutrient::Calories => Unit::Kcal,
            Nutrient::TotalFat
            | Nutrient::SaturatedFat
            | Nutrient::TransFat
            | Nutrient::TotalCarbohydrate
            | Nutrient::DietaryFiber
            | Nutrient::TotalSugars
            | Nutrient::AddedSugars
            | Nutrient::Protein
            | Nutrient::Salt => Unit::G,
            Nutrient::Cholesterol
            | Nutrient::Sodium
            | Nutrient::Calcium
            | Nutrient::Iron
            | Nutrient::Potassium => Unit::Mg,
            Nutrient::VitaminD => Unit::Mcg,
        }
    }

    /// Canonical English display name
    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::TotalFat => "Total Fat",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::TransFat => "Trans Fat",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Sodium => "Sodium",
            Nutrient::TotalCarbohydrate => "Total Carbohydrate",
            Nutrient::DietaryFiber => "Dietary Fiber",
            Nutrient::TotalSugars => "Total Sugars",
            Nutrient::AddedSugars => "Added Sugars",
            Nutrient::Protein => "Protein",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Potassium => "Potassium",
            Nutrient::Salt => "Salt",
        }
    }
}

/// A single named amount, the unit of `compute_display`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutrientValue {
    pub nutrient: Nutrient,
    /// Raw per-serving amount in the nutrient's declaration unit
    pub amount: f64,
}

impl NutrientValue {
    pub fn new(nutrient: Nutrient, amount: f64) -> Self {
        Self { nutrient, amount }
    }

    pub fn unit(&self) -> Unit {
        self.nutrient.unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_per_nutrient() {
        assert_eq!(Nutrient::TotalFat.unit(), Unit::G);
        assert_eq!(Nutrient::Sodium.unit(), Unit::Mg);
        assert_eq!(Nutrient::VitaminD.unit(), Unit::Mcg);
        assert_eq!(Nutrient::Calories.unit(), Unit::Kcal);
        assert_eq!(Nutrient::Salt.unit(), Unit::G);
    }

    #[test]
    fn test_serde_names_are_snake_case() {
        let json = serde_json::to_string(&Nutrient::TotalFat).unwrap();
        assert_eq!(json, "\"total_fat\"");
        let back: Nutrient = serde_json::from_str("\"added_sugars\"").unwrap();
        assert_eq!(back, Nutrient::AddedSugars);
    }
}
