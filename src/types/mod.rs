pub mod recipe;

pub use recipe::{Category, Difficulty, IngredientItem, Recipe, RecipeCreate};
