//! Recipe module
//!
//! Handles ingredient aggregation into per-serving panels and baker's
//! percentage math.

pub mod bakers;
pub mod recipe;

pub use bakers::{
    bakers_percentages, hydration, scale_to_flour, scale_to_weight, scale_to_yield, BakersLine,
};
pub use recipe::{Ingredient, IngredientRole, Recipe, RecipeError, RecipeResult};
