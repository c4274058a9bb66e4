use crate::db::models::{DbIngredient, DbRecipe};
use crate::db::schema::SQLITE_INIT;
use crate::error::VaultError;
use crate::types::recipe::{Recipe, RecipeCreate};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the database behind `database_url` with the
/// `foreign_keys` pragma on, so ingredient rows cascade with their recipe.
pub async fn connect(database_url: &str) -> Result<SqlitePool, VaultError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct RecipeStorage {
    pool: SqlitePool,
}

impl RecipeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), VaultError> {
        // execute statements one by one (sqlx::query takes a single command)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a recipe and its ingredient rows in one transaction and return
    /// the stored record with its assigned id. Dates absent from the payload
    /// default to today.
    pub async fn create(&self, draft: RecipeCreate) -> Result<Recipe, VaultError> {
        let mut tx = self.pool.begin().await?;

        let today = Utc::now().date_naive();
        let created_at = draft.created_at.unwrap_or(today);
        let updated_at = draft.updated_at.unwrap_or(today);
        let instructions = serde_json::to_string(&draft.instructions)?;

        let recipe_id = sqlx::query(
            r#"
            INSERT INTO recipes (
                title, description, instructions, prep_time, cook_time,
                servings, difficulty, category, image_url, rating,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(instructions)
        .bind(draft.prep_time)
        .bind(draft.cook_time)
        .bind(draft.servings)
        .bind(draft.difficulty.as_str())
        .bind(draft.category.as_str())
        .bind(draft.image_url.as_ref().map(|u| u.as_str().to_string()))
        .bind(draft.rating)
        .bind(created_at)
        .bind(updated_at)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for item in &draft.ingredients {
            sqlx::query("INSERT INTO ingredients (recipe_id, name, quantity) VALUES (?, ?, ?)")
                .bind(recipe_id)
                .bind(&item.name)
                .bind(&item.quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        self.get(recipe_id).await
    }

    /// Fetch a recipe with its ingredients, or not-found.
    pub async fn get(&self, id: i64) -> Result<Recipe, VaultError> {
        let row = sqlx::query_as::<_, DbRecipe>("SELECT * FROM recipes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| VaultError::recipe_not_found(id))?;
        let ingredients = self.ingredients(id).await?;
        Ok(row.into_recipe(ingredients)?)
    }

    /// Fetch every recipe with its ingredients. An empty store is reported as
    /// not-found rather than an empty list; callers rely on that 404.
    pub async fn list(&self) -> Result<Vec<Recipe>, VaultError> {
        let rows = sqlx::query_as::<_, DbRecipe>("SELECT * FROM recipes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        if rows.is_empty() {
            return Err(VaultError::NotFound("No Recipes Found".to_string()));
        }

        let children = sqlx::query_as::<_, DbIngredient>(
            "SELECT * FROM ingredients ORDER BY recipe_id, id",
        )
        .fetch_all(&self.pool)
        .await?;
        let mut by_recipe: HashMap<i64, Vec<DbIngredient>> = HashMap::new();
        for child in children {
            by_recipe.entry(child.recipe_id).or_default().push(child);
        }

        rows.into_iter()
            .map(|row| {
                let ingredients = by_recipe.remove(&row.id).unwrap_or_default();
                Ok(row.into_recipe(ingredients)?)
            })
            .collect()
    }

    /// Overwrite every scalar field and replace the whole ingredient set in
    /// one transaction. The old ingredient rows are deleted, not merged.
    pub async fn update(&self, id: i64, draft: RecipeCreate) -> Result<Recipe, VaultError> {
        let mut tx = self.pool.begin().await?;

        let today = Utc::now().date_naive();
        let created_at = draft.created_at.unwrap_or(today);
        let updated_at = draft.updated_at.unwrap_or(today);
        let instructions = serde_json::to_string(&draft.instructions)?;

        let updated = sqlx::query(
            r#"
            UPDATE recipes SET
                title = ?,
                description = ?,
                instructions = ?,
                prep_time = ?,
                cook_time = ?,
                servings = ?,
                difficulty = ?,
                category = ?,
                image_url = ?,
                rating = ?,
                created_at = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(instructions)
        .bind(draft.prep_time)
        .bind(draft.cook_time)
        .bind(draft.servings)
        .bind(draft.difficulty.as_str())
        .bind(draft.category.as_str())
        .bind(draft.image_url.as_ref().map(|u| u.as_str().to_string()))
        .bind(draft.rating)
        .bind(created_at)
        .bind(updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(VaultError::recipe_not_found(id));
        }

        sqlx::query("DELETE FROM ingredients WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for item in &draft.ingredients {
            sqlx::query("INSERT INTO ingredients (recipe_id, name, quantity) VALUES (?, ?, ?)")
                .bind(id)
                .bind(&item.name)
                .bind(&item.quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        self.get(id).await
    }

    /// Delete a recipe; the FK cascade removes its ingredient rows.
    pub async fn delete(&self, id: i64) -> Result<(), VaultError> {
        let deleted = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(VaultError::recipe_not_found(id));
        }
        Ok(())
    }

    /// Point update of the image URL column after a successful upload.
    pub async fn set_image_url(&self, id: i64, image_url: &url::Url) -> Result<(), VaultError> {
        let updated = sqlx::query("UPDATE recipes SET image_url = ? WHERE id = ?")
            .bind(image_url.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(VaultError::recipe_not_found(id));
        }
        Ok(())
    }

    /// Child rows for one recipe, in insertion order.
    pub async fn ingredients(&self, recipe_id: i64) -> Result<Vec<DbIngredient>, VaultError> {
        let rows = sqlx::query_as::<_, DbIngredient>(
            "SELECT * FROM ingredients WHERE recipe_id = ? ORDER BY id",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Direct ingredient lookup by its own id.
    pub async fn get_ingredient(&self, id: i64) -> Result<DbIngredient, VaultError> {
        sqlx::query_as::<_, DbIngredient>("SELECT * FROM ingredients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| VaultError::NotFound(format!("Ingredient {id} Not Found")))
    }
}
