use crate::router::VaultState;
use crate::VaultError;
use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use serde_json::{Value, json};
use tracing::info;

/// POST /recipes/{id}/image -> uploads the `file` multipart field to the image
/// host and stores the returned public URL on the recipe.
pub async fn upload_recipe_image(
    State(state): State<VaultState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<Value>, VaultError> {
    // 404 before consuming the upload if the recipe does not exist.
    state.storage.get(id).await?;
    let uploader = state
        .uploader
        .as_ref()
        .ok_or(VaultError::UploadNotConfigured)?;

    let mut uploaded = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await?;
        uploaded = Some(uploader.upload_image(data.to_vec(), &file_name).await?);
        break;
    }

    let image_url = uploaded.ok_or_else(|| {
        VaultError::Validation("missing `file` field in multipart body".to_string())
    })?;
    state.storage.set_image_url(id, &image_url).await?;
    info!(id, image_url = %image_url, "recipe image updated");
    Ok(Json(json!({ "image_url": image_url })))
}
