//! Wire types for TheMealDB and the converted recipe shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /search.php`. MealDB answers "no matches" with `"meals": null`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

/// A single MealDB meal.
///
/// MealDB returns a flat object with numbered `strIngredientN` /
/// `strMeasureN` columns, any of which may be `null`, so the raw map is
/// kept and fields are read by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Meal(pub Map<String, Value>);

impl Meal {
    /// String value of `name`; `None` when absent, `null`, or not a string.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Like [`field`](Self::field), but also `None` for blank strings.
    pub fn non_blank(&self, name: &str) -> Option<&str> {
        self.field(name).map(str::trim).filter(|s| !s.is_empty())
    }
}

/// A recipe found on MealDB, in the API's recipe shape.
///
/// Never stored; the `id` is prefixed (`mealdb_<idMeal>`) so it cannot be
/// confused with a local recipe id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRecipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub cuisine: String,
    pub source: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub original_id: Option<String>,
}
