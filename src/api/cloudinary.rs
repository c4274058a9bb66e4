use crate::config::Config;
use crate::error::VaultError;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

/// All uploads land in one folder on the image host.
const UPLOAD_FOLDER: &str = "recipe_vault";

/// Signed-upload client for Cloudinary's HTTP API.
#[derive(Clone)]
pub struct CloudinaryApi {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Url,
}

impl CloudinaryApi {
    /// Built only when all three Cloudinary variables are configured.
    pub fn from_config(cfg: &Config) -> Option<Self> {
        Some(Self {
            client: reqwest::Client::new(),
            cloud_name: cfg.cloudinary_cloud_name.clone()?,
            api_key: cfg.cloudinary_api_key.clone()?,
            api_secret: cfg.cloudinary_api_secret.clone()?,
        })
    }

    /// Upload one image and return its public URL.
    ///
    /// Cloudinary signs the alphabetically-sorted upload parameters followed
    /// by the API secret; we send a SHA-256 signature and say so via
    /// `signature_algorithm`.
    pub async fn upload_image(
        &self,
        data: Vec<u8>,
        file_name: &str,
    ) -> Result<Url, VaultError> {
        let timestamp = Utc::now().timestamp().to_string();
        let to_sign = format!("folder={UPLOAD_FOLDER}&timestamp={timestamp}{}", self.api_secret);
        let signature = hex::encode(Sha256::digest(to_sign.as_bytes()));

        let form = Form::new()
            .text("api_key", self.api_key.clone())
            .text("folder", UPLOAD_FOLDER)
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part(
                "file",
                Part::bytes(data).file_name(file_name.to_string()),
            );

        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );
        let resp = self.client.post(endpoint).multipart(form).send().await?;
        if !resp.status().is_success() {
            return Err(VaultError::UploadStatus(resp.status()));
        }
        let body: UploadResponse = resp.json().await?;
        Ok(body.secure_url)
    }
}
