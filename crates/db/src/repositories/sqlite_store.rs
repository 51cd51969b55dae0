//! SQLite-backed recipe store.
//!
//! `ingredients` and `steps` are stored as JSON arrays in TEXT columns.

use async_trait::async_trait;
use recipebox_core::search::{contains_pattern, normalize_query};
use recipebox_core::types::DbId;

use crate::models::recipe::{Recipe, RecipeInput, RecipeRow};
use crate::repositories::RecipeStore;
use crate::{DbPool, StoreError};

/// Column list for `recipes` queries.
const COLUMNS: &str = "id, title, ingredients, steps, prep_time, cook_time, difficulty, cuisine";

/// Recipe storage over a migrated SQLite pool.
pub struct SqliteRecipeStore {
    pool: DbPool,
}

impl SqliteRecipeStore {
    /// Wrap an already-migrated pool. The seed recipes come from the
    /// migrations, so a table emptied by deletes stays empty on reopen.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn decode_rows(rows: Vec<RecipeRow>) -> Result<Vec<Recipe>, StoreError> {
    rows.into_iter().map(Recipe::try_from).collect()
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        let rows = sqlx::query_as::<_, RecipeRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        decode_rows(rows)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Recipe>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = ?");
        sqlx::query_as::<_, RecipeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Recipe::try_from)
            .transpose()
    }

    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError> {
        let result = sqlx::query(
            "INSERT INTO recipes \
             (title, ingredients, steps, prep_time, cook_time, difficulty, cuisine) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(serde_json::to_string(&input.ingredients)?)
        .bind(serde_json::to_string(&input.steps)?)
        .bind(&input.prep_time)
        .bind(&input.cook_time)
        .bind(&input.difficulty)
        .bind(&input.cuisine)
        .execute(&self.pool)
        .await?;

        Ok(Recipe::from_input(result.last_insert_rowid(), input))
    }

    async fn update(&self, id: DbId, input: RecipeInput) -> Result<Option<Recipe>, StoreError> {
        let result = sqlx::query(
            "UPDATE recipes SET \
                 title = ?, ingredients = ?, steps = ?, prep_time = ?, \
                 cook_time = ?, difficulty = ?, cuisine = ? \
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(serde_json::to_string(&input.ingredients)?)
        .bind(serde_json::to_string(&input.steps)?)
        .bind(&input.prep_time)
        .bind(&input.cook_time)
        .bind(&input.difficulty)
        .bind(&input.cuisine)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Recipe::from_input(id, input)))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, StoreError> {
        let Some(query) = normalize_query(Some(query)) else {
            return Ok(Vec::new());
        };

        // SQLite LIKE folds ASCII case only.
        let sql = format!(
            "SELECT {COLUMNS} FROM recipes \
             WHERE title LIKE ? ESCAPE '\\' \
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(contains_pattern(query))
            .fetch_all(&self.pool)
            .await?;
        decode_rows(rows)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM recipes").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'recipes'")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
