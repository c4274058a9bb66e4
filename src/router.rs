use crate::api::cloudinary::CloudinaryApi;
use crate::db::RecipeStorage;
use crate::handlers::images::upload_recipe_image;
use crate::handlers::recipes::{
    create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe, welcome,
};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

/// Image uploads are the largest bodies we accept.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct VaultState {
    pub storage: RecipeStorage,
    /// None when the Cloudinary variables are not configured; the upload
    /// endpoint then answers 503.
    pub uploader: Option<CloudinaryApi>,
}

impl VaultState {
    pub fn new(storage: RecipeStorage, uploader: Option<CloudinaryApi>) -> Self {
        Self { storage, uploader }
    }
}

pub fn vault_router(state: VaultState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/recipes/{id}/image", post(upload_recipe_image))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
