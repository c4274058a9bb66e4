use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &recipe_vault::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        bind_addr = %cfg.bind_addr,
        loglevel = %cfg.loglevel
    );

    let pool = recipe_vault::db::connect(&cfg.database_url).await?;
    let storage = recipe_vault::db::RecipeStorage::new(pool);
    storage.init_schema().await?;

    let uploader = recipe_vault::api::cloudinary::CloudinaryApi::from_config(cfg);
    if uploader.is_none() {
        warn!("Cloudinary credentials not set; POST /recipes/{{id}}/image will return 503");
    }

    // Build axum router and serve
    let state = recipe_vault::router::VaultState::new(storage, uploader);
    let app = recipe_vault::router::vault_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
