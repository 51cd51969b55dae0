//! Recipe entity, request payload, and seed data.

use recipebox_core::error::CoreError;
use recipebox_core::recipe::{validate_entries, validate_title};
use recipebox_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::StoreError;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored recipe as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub cuisine: String,
}

impl Recipe {
    /// Attach an id to a payload.
    pub fn from_input(id: DbId, input: RecipeInput) -> Self {
        Self {
            id,
            title: input.title,
            ingredients: input.ingredients,
            steps: input.steps,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            difficulty: input.difficulty,
            cuisine: input.cuisine,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for creating or fully replacing a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub cuisine: String,
}

impl RecipeInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)?;
        validate_entries("ingredients", &self.ingredients)?;
        validate_entries("steps", &self.steps)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Database row
// ---------------------------------------------------------------------------

/// A row from the `recipes` table, list columns still JSON-encoded.
#[derive(Debug, FromRow)]
pub struct RecipeRow {
    pub id: DbId,
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub cuisine: String,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = StoreError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let decode = |column: &str, raw: &str| -> Result<Vec<String>, StoreError> {
            serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
                id,
                reason: format!("{column}: {e}"),
            })
        };
        let ingredients = decode("ingredients", &row.ingredients)?;
        let steps = decode("steps", &row.steps)?;

        Ok(Recipe {
            id,
            title: row.title,
            ingredients,
            steps,
            prep_time: row.prep_time,
            cook_time: row.cook_time,
            difficulty: row.difficulty,
            cuisine: row.cuisine,
        })
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Recipes every fresh store starts with. Ids 1 and 2; new recipes start at 3.
///
/// The SQLite seed migration inserts the same rows.
pub fn seed_recipes() -> Vec<Recipe> {
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    vec![
        Recipe {
            id: 1,
            title: "Spaghetti Carbonara".into(),
            ingredients: strings(&["pasta", "eggs", "bacon", "cheese"]),
            steps: strings(&["Cook pasta", "Mix eggs", "Combine all"]),
            prep_time: "10 minutes".into(),
            cook_time: "15 minutes".into(),
            difficulty: "Medium".into(),
            cuisine: "Italian".into(),
        },
        Recipe {
            id: 2,
            title: "Chicken Curry".into(),
            ingredients: strings(&["chicken", "curry powder", "coconut milk", "onion", "garlic"]),
            steps: strings(&[
                "Cook chicken",
                "Add onion and garlic",
                "Stir in curry powder and coconut milk",
                "Simmer",
            ]),
            prep_time: "15 minutes".into(),
            cook_time: "30 minutes".into(),
            difficulty: "Medium".into(),
            cuisine: "Indian".into(),
        },
    ]
}
