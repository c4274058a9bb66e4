pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use error::VaultError;
pub use types::recipe::{Category, Difficulty, IngredientItem, Recipe, RecipeCreate};
