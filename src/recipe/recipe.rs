//! Recipe aggregation
//!
//! A recipe is a list of ingredients with per-100g nutrient data. Summing
//! scaled ingredient nutrients and dividing by the yield gives the
//! per-serving panel a label is built from. All weights are in grams, so
//! every ingredient quantity must be weight-convertible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NutrientPanel, Nutrients, ServingInfo};
use crate::units;

/// Recipe error types
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Cannot convert {quantity} {unit} of '{name}' to grams; use a weight unit or an annotation like \"cup (120g)\"")]
    UnconvertibleUnit {
        name: String,
        quantity: f64,
        unit: String,
    },

    #[error("Recipe has no flour ingredient to base percentages on")]
    NoFlour,

    #[error("Recipe has no ingredients with weight to scale")]
    EmptyRecipe,

    #[error("Scale target must be positive, got {0}")]
    NonPositiveTarget(f64),

    #[error("Recipe yield must be positive, got {0}")]
    NoYield(f64),
}

/// Result type for recipe operations
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Role an ingredient plays in baker's-percentage math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientRole {
    /// The 100% base of baker's percentages
    Flour,
    /// Water, milk, and other hydrating liquids
    Liquid,
    /// Salt, yeast, fats, sugar, inclusions
    Other,
}

impl Default for IngredientRole {
    fn default() -> Self {
        IngredientRole::Other
    }
}

/// One recipe ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Free-text unit; must convert to grams ("g", "oz", "cup (120g)")
    pub unit: String,
    #[serde(default)]
    pub role: IngredientRole,
    /// Nutrients per 100 g of this ingredient
    #[serde(default)]
    pub nutrients_per_100g: Nutrients,
}

impl Ingredient {
    /// Weight of this ingredient in grams
    pub fn grams(&self) -> RecipeResult<f64> {
        units::to_grams(self.quantity, &self.unit)
            .filter(|g| g.is_finite() && *g >= 0.0)
            .ok_or_else(|| RecipeError::UnconvertibleUnit {
                name: self.name.clone(),
                quantity: self.quantity,
                unit: self.unit.clone(),
            })
    }

    /// Nutrient contribution of this ingredient's full amount
    pub fn nutrients(&self) -> RecipeResult<Nutrients> {
        let grams = self.grams()?;
        Ok(self.nutrients_per_100g.scale(grams / 100.0))
    }
}

/// A recipe: ingredients plus the yield one batch produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Servings one batch yields
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}

impl Recipe {
    /// Total batch weight in grams
    pub fn total_weight_g(&self) -> RecipeResult<f64> {
        let mut total = 0.0;
        for ingredient in &self.ingredients {
            total += ingredient.grams()?;
        }
        Ok(total)
    }

    /// Total flour weight in grams
    pub fn flour_weight_g(&self) -> RecipeResult<f64> {
        let mut total = 0.0;
        for ingredient in &self.ingredients {
            if ingredient.role == IngredientRole::Flour {
                total += ingredient.grams()?;
            }
        }
        Ok(total)
    }

    /// Total liquid weight in grams
    pub fn liquid_weight_g(&self) -> RecipeResult<f64> {
        let mut total = 0.0;
        for ingredient in &self.ingredients {
            if ingredient.role == IngredientRole::Liquid {
                total += ingredient.grams()?;
            }
        }
        Ok(total)
    }

    /// Nutrients in the whole batch
    pub fn total_nutrients(&self) -> RecipeResult<Nutrients> {
        let mut total = Nutrients::zero();
        for ingredient in &self.ingredients {
            total = total + ingredient.nutrients()?;
        }
        Ok(total)
    }

    /// Nutrients in one serving
    pub fn nutrients_per_serving(&self) -> RecipeResult<Nutrients> {
        if !self.servings.is_finite() || self.servings <= 0.0 {
            return Err(RecipeError::NoYield(self.servings));
        }
        Ok(self.total_nutrients()?.scale(1.0 / self.servings))
    }

    /// Per-serving panel for label building
    ///
    /// The serving weight is the batch weight divided by the yield, so
    /// per-100g columns work without further input.
    pub fn to_panel(&self) -> RecipeResult<NutrientPanel> {
        let nutrients = self.nutrients_per_serving()?;
        let weight = self.total_weight_g()? / self.servings;

        let mut serving = ServingInfo::new(1.0, "serving");
        serving.servings_per_container = self.servings;
        serving.serving_weight_g = Some(weight);

        Ok(NutrientPanel { serving, nutrients })
    }
}
