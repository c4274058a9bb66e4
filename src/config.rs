//! Environment-driven configuration.
//!
//! All knobs come from the process environment (optionally loaded from `.env`
//! via dotenvy before the [`CONFIG`] static is touched). Variable names match
//! the deployment's `.env` layout: `DATABASE_URL`, `CLOUDINARY_*`, `GMAIL_*`.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ENV_KEYS: &[&str] = &[
    "DATABASE_URL",
    "BIND_ADDR",
    "LOGLEVEL",
    "CLOUDINARY_CLOUD_NAME",
    "CLOUDINARY_API_KEY",
    "CLOUDINARY_API_SECRET",
    "GMAIL_EMAIL",
    "GMAIL_APP_PASSWORD",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub loglevel: String,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<String>,
    pub gmail_email: Option<String>,
    pub gmail_app_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:recipe_vault.sqlite".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            cloudinary_cloud_name: None,
            cloudinary_api_key: None,
            cloudinary_api_secret: None,
            gmail_email: None,
            gmail_app_password: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(ENV_KEYS))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid environment configuration"));
