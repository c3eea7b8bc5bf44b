//! Baker's percentage calculators
//!
//! Baker's math expresses every ingredient as a percentage of total flour
//! weight, with flour itself at 100%. Hydration is the liquid share of the
//! flour. Scaling a formula to a new flour weight or yield multiplies
//! every quantity by a single factor and leaves the percentages unchanged.

use serde::{Deserialize, Serialize};

use super::recipe::{Ingredient, Recipe, RecipeError, RecipeResult};

/// One line of a baker's-percentage formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakersLine {
    pub name: String,
    pub grams: f64,
    /// Percent of total flour weight
    pub percent: f64,
}

/// Express a recipe as baker's percentages
pub fn bakers_percentages(recipe: &Recipe) -> RecipeResult<Vec<BakersLine>> {
    let flour = positive_flour(recipe)?;
    let mut lines = Vec::with_capacity(recipe.ingredients.len());
    for ingredient in &recipe.ingredients {
        let grams = ingredient.grams()?;
        lines.push(BakersLine {
            name: ingredient.name.clone(),
            grams,
            percent: grams / flour * 100.0,
        });
    }
    Ok(lines)
}

/// Hydration: liquid weight as a percentage of flour weight
pub fn hydration(recipe: &Recipe) -> RecipeResult<f64> {
    let flour = positive_flour(recipe)?;
    Ok(recipe.liquid_weight_g()? / flour * 100.0)
}

/// Scale a recipe so its total flour weighs `target_flour_g`
pub fn scale_to_flour(recipe: &Recipe, target_flour_g: f64) -> RecipeResult<Recipe> {
    if !target_flour_g.is_finite() || target_flour_g <= 0.0 {
        return Err(RecipeError::NonPositiveTarget(target_flour_g));
    }
    let flour = positive_flour(recipe)?;
    Ok(scaled(recipe, target_flour_g / flour))
}

/// Scale a recipe so the whole batch weighs `target_weight_g`
pub fn scale_to_weight(recipe: &Recipe, target_weight_g: f64) -> RecipeResult<Recipe> {
    if !target_weight_g.is_finite() || target_weight_g <= 0.0 {
        return Err(RecipeError::NonPositiveTarget(target_weight_g));
    }
    let total = recipe.total_weight_g()?;
    if total <= 0.0 {
        return Err(RecipeError::EmptyRecipe);
    }
    Ok(scaled(recipe, target_weight_g / total))
}

/// Scale a recipe to a new serving yield
pub fn scale_to_yield(recipe: &Recipe, target_servings: f64) -> RecipeResult<Recipe> {
    if !target_servings.is_finite() || target_servings <= 0.0 {
        return Err(RecipeError::NonPositiveTarget(target_servings));
    }
    if !recipe.servings.is_finite() || recipe.servings <= 0.0 {
        return Err(RecipeError::NoYield(recipe.servings));
    }
    Ok(scaled(recipe, target_servings / recipe.servings))
}

fn positive_flour(recipe: &Recipe) -> RecipeResult<f64> {
    let flour = recipe.flour_weight_g()?;
    if flour > 0.0 {
        Ok(flour)
    } else {
        Err(RecipeError::NoFlour)
    }
}

/// Multiply every ingredient quantity and the yield by `factor`
fn scaled(recipe: &Recipe, factor: f64) -> Recipe {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| Ingredient {
            quantity: ingredient.quantity * factor,
            ..ingredient.clone()
        })
        .collect();
    Recipe {
        name: recipe.name.clone(),
        ingredients,
        servings: recipe.servings * factor,
    }
}
