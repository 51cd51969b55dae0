//! Conversion of MealDB meals into [`ExternalRecipe`]s.

use recipebox_core::recipe::{DEFAULT_DIFFICULTY, UNKNOWN};

use crate::models::{ExternalRecipe, Meal};

/// MealDB exposes `strIngredient1` through `strIngredient20`.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Value of [`ExternalRecipe::source`] for MealDB results.
pub const SOURCE_MEALDB: &str = "mealdb";

/// Id prefix that keeps MealDB ids apart from local recipe ids.
pub const ID_PREFIX: &str = "mealdb_";

/// Ingredient lines as `"<measure> <ingredient>"`, or just the ingredient
/// when no measure is given. Empty slots are skipped.
pub fn ingredient_lines(meal: &Meal) -> Vec<String> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|i| {
            let ingredient = meal.non_blank(&format!("strIngredient{i}"))?;
            Some(match meal.non_blank(&format!("strMeasure{i}")) {
                Some(measure) => format!("{measure} {ingredient}"),
                None => ingredient.to_string(),
            })
        })
        .collect()
}

/// Split free-text instructions into steps on `.`, dropping empty pieces.
pub fn split_steps(instructions: &str) -> Vec<String> {
    instructions
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert one meal. Missing MealDB fields fall back to `"Unknown"`.
pub fn meal_to_recipe(meal: &Meal) -> ExternalRecipe {
    let original_id = meal.field("idMeal").map(str::to_string);

    ExternalRecipe {
        id: format!("{ID_PREFIX}{}", original_id.as_deref().unwrap_or(UNKNOWN)),
        title: meal.field("strMeal").unwrap_or(UNKNOWN).to_string(),
        ingredients: ingredient_lines(meal),
        steps: split_steps(meal.field("strInstructions").unwrap_or_default()),
        prep_time: UNKNOWN.to_string(),
        cook_time: UNKNOWN.to_string(),
        difficulty: DEFAULT_DIFFICULTY.to_string(),
        cuisine: meal.field("strArea").unwrap_or(UNKNOWN).to_string(),
        source: SOURCE_MEALDB.to_string(),
        image: meal.field("strMealThumb").map(str::to_string),
        video: meal.field("strYoutube").map(str::to_string),
        original_id,
    }
}
