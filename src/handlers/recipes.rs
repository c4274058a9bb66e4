use crate::router::VaultState;
use crate::types::recipe::{Recipe, RecipeCreate};
use crate::VaultError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};
use tracing::info;

/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to RecipeVault Backend" }))
}

/// GET /recipes -> every stored recipe; 404 when the store is empty.
pub async fn list_recipes(State(state): State<VaultState>) -> Result<Json<Vec<Recipe>>, VaultError> {
    Ok(Json(state.storage.list().await?))
}

/// GET /recipes/{id}
pub async fn get_recipe(
    State(state): State<VaultState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, VaultError> {
    Ok(Json(state.storage.get(id).await?))
}

/// POST /recipes -> 201 with the stored record and a confirmation message.
pub async fn create_recipe(
    State(state): State<VaultState>,
    Json(draft): Json<RecipeCreate>,
) -> Result<impl IntoResponse, VaultError> {
    let recipe = state.storage.create(draft).await?;
    info!(id = recipe.id, title = %recipe.title, "recipe created");
    let message = format!("{} added successfully", recipe.title);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": message, "recipe": recipe })),
    ))
}

/// PUT /recipes/{id} -> full replace of scalar fields and the ingredient set.
/// The path id wins over any id in the body.
pub async fn update_recipe(
    State(state): State<VaultState>,
    Path(id): Path<i64>,
    Json(draft): Json<RecipeCreate>,
) -> Result<Json<Value>, VaultError> {
    let recipe = state.storage.update(id, draft).await?;
    info!(id = recipe.id, "recipe updated");
    Ok(Json(
        json!({ "message": format!("Recipe {id} Updated Successfully!") }),
    ))
}

/// DELETE /recipes/{id} -> cascades to the recipe's ingredients.
pub async fn delete_recipe(
    State(state): State<VaultState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, VaultError> {
    state.storage.delete(id).await?;
    info!(id, "recipe deleted");
    Ok(Json(
        json!({ "message": format!("Recipe {id} Has Been Deleted Successfully") }),
    ))
}
