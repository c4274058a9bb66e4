use crate::types::recipe::{Category, Difficulty, IngredientItem, Recipe};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;

/// Raw `recipes` row. Enum and JSON columns stay as TEXT here; decoding into
/// the domain [`Recipe`] happens in [`DbRecipe::into_recipe`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbRecipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub prep_time: i64,
    pub cook_time: i64,
    pub servings: i64,
    pub difficulty: String,
    pub category: String,
    pub image_url: Option<String>,
    pub rating: i64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Raw `ingredients` row. Ids are internal; the API exposes ingredients as
/// name/quantity pairs only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbIngredient {
    pub id: i64,
    pub recipe_id: i64,
    pub name: String,
    pub quantity: String,
}

impl From<DbIngredient> for IngredientItem {
    fn from(row: DbIngredient) -> Self {
        IngredientItem {
            name: row.name,
            quantity: row.quantity,
        }
    }
}

impl DbRecipe {
    /// Attach child rows and decode TEXT columns into their domain types.
    /// Malformed stored data is reported as a decode error, same as a
    /// malformed column would be.
    pub fn into_recipe(self, ingredients: Vec<DbIngredient>) -> Result<Recipe, sqlx::Error> {
        let instructions: Vec<String> = serde_json::from_str(&self.instructions)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let difficulty = Difficulty::parse(&self.difficulty).ok_or_else(|| {
            sqlx::Error::Decode(format!("unknown difficulty {:?}", self.difficulty).into())
        })?;
        let category = Category::parse(&self.category).ok_or_else(|| {
            sqlx::Error::Decode(format!("unknown category {:?}", self.category).into())
        })?;
        let image_url = self
            .image_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            ingredients: ingredients.into_iter().map(IngredientItem::from).collect(),
            instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty,
            category,
            image_url,
            rating: self.rating,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
