//! Nutrient panel model
//!
//! Per-serving nutrient amounts plus the serving declaration, as entered in
//! a product form or returned by an ingredient lookup. This is the input to
//! every label build.

use serde::{Deserialize, Serialize};

use super::Nutrient;

/// Per-serving nutrient amounts
///
/// All amounts are in the nutrient's declaration unit (grams, milligrams,
/// micrograms, kilocalories). Absent fields deserialize to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub total_fat: f64,
    #[serde(default)]
    pub saturated_fat: f64,
    #[serde(default)]
    pub trans_fat: f64,
    #[serde(default)]
    pub cholesterol: f64,
    #[serde(default)]
    pub sodium: f64,
    #[serde(default)]
    pub total_carbohydrate: f64,
    #[serde(default)]
    pub dietary_fiber: f64,
    #[serde(default)]
    pub total_sugars: f64,
    #[serde(default)]
    pub added_sugars: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub vitamin_d: f64,
    #[serde(default)]
    pub calcium: f64,
    #[serde(default)]
    pub iron: f64,
    #[serde(default)]
    pub potassium: f64,
}

impl Nutrients {
    /// All zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Look up the stored amount for a nutrient
    ///
    /// `Salt` is not stored; it is derived from sodium at build time, so it
    /// reads as 0 here.
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
            Nutrient::TotalCarbohydrate => self.total_carbohydrate,
            Nutrient::DietaryFiber => self.dietary_fiber,
            Nutrient::TotalSugars => self.total_sugars,
            Nutrient::AddedSugars => self.added_sugars,
            Nutrient::Protein => self.protein,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Potassium => self.potassium,
            Nutrient::Salt => 0.0,
        }
    }

    /// Scale every amount by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            total_fat: self.total_fat * multiplier,
            saturated_fat: self.saturated_fat * multiplier,
            trans_fat: self.trans_fat * multiplier,
            cholesterol: self.cholesterol * multiplier,
            sodium: self.sodium * multiplier,
            total_carbohydrate: self.total_carbohydrate * multiplier,
            dietary_fiber: self.dietary_fiber * multiplier,
            total_sugars: self.total_sugars * multiplier,
            added_sugars: self.added_sugars * multiplier,
            protein: self.protein * multiplier,
            vitamin_d: self.vitamin_d * multiplier,
            calcium: self.calcium * multiplier,
            iron: self.iron * multiplier,
            potassium: self.potassium * multiplier,
        }
    }

    /// Add another set of amounts to this one
    pub fn add(&self, other: &Nutrients) -> Self {
        Self {
            calories: self.calories + other.calories,
            total_fat: self.total_fat + other.total_fat,
            saturated_fat: self.saturated_fat + other.saturated_fat,
            trans_fat: self.trans_fat + other.trans_fat,
            cholesterol: self.cholesterol + other.cholesterol,
            sodium: self.sodium + other.sodium,
            total_carbohydrate: self.total_carbohydrate + other.total_carbohydrate,
            dietary_fiber: self.dietary_fiber + other.dietary_fiber,
            total_sugars: self.total_sugars + other.total_sugars,
            added_sugars: self.added_sugars + other.added_sugars,
            protein: self.protein + other.protein,
            vitamin_d: self.vitamin_d + other.vitamin_d,
            calcium: self.calcium + other.calcium,
            iron: self.iron + other.iron,
            potassium: self.potassium + other.potassium,
        }
    }
}

impl std::ops::Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrients {
    type Output = Nutrients;

    fn mul(self, multiplier: f64) -> Nutrients {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}

/// Serving declaration for a panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServingInfo {
    /// Household measure count, e.g. 2.0 for "2 tbsp"
    pub serving_size: f64,
    /// Household measure unit; a gram or ml annotation such as
    /// "tbsp (15g)" lets per-100 columns be derived
    pub serving_unit: String,
    #[serde(default = "default_servings_per_container")]
    pub servings_per_container: f64,
    /// Explicit serving weight in grams, overriding any unit annotation
    #[serde(default)]
    pub serving_weight_g: Option<f64>,
}

fn default_servings_per_container() -> f64 {
    1.0
}

impl ServingInfo {
    pub fn new(serving_size: f64, serving_unit: impl Into<String>) -> Self {
        Self {
            serving_size,
            serving_unit: serving_unit.into(),
            servings_per_container: 1.0,
            serving_weight_g: None,
        }
    }
}

/// A complete per-serving nutrient declaration, ready to be laid out in any
/// label format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientPanel {
    pub serving: ServingInfo,
    pub nutrients: Nutrients,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let a = Nutrients {
            calories: 100.0,
            total_fat: 4.0,
            sodium: 150.0,
            ..Default::default()
        };
        let b = a.scale(2.0);
        assert_eq!(b.calories, 200.0);
        assert_eq!(b.total_fat, 8.0);

        let c = a.clone() + b;
        assert_eq!(c.sodium, 450.0);
    }

    #[test]
    fn test_sum_over_iterator() {
        let parts = vec![
            Nutrients {
                protein: 3.0,
                ..Default::default()
            },
            Nutrients {
                protein: 4.5,
                ..Default::default()
            },
        ];
        let total: Nutrients = parts.into_iter().sum();
        assert_eq!(total.protein, 7.5);
    }

    #[test]
    fn test_amount_lookup() {
        let n = Nutrients {
            dietary_fiber: 4.0,
            sodium: 780.0,
            ..Default::default()
        };
        assert_eq!(n.amount(Nutrient::DietaryFiber), 4.0);
        assert_eq!(n.amount(Nutrient::Sodium), 780.0);
        // salt is derived, never stored
        assert_eq!(n.amount(Nutrient::Salt), 0.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let n: Nutrients = serde_json::from_str(r#"{"calories": 250}"#).unwrap();
        assert_eq!(n.calories, 250.0);
        assert_eq!(n.total_fat, 0.0);
        assert_eq!(n.potassium, 0.0);
    }
}
