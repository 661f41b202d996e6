//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{DiskFileStore, InMemoryCatalog},
    config::Config,
    error::ApiError,
    web::{build_router, rest::ApiDoc, state::AppState},
};
use axum::Router;
use class_resources_core::ports::{CatalogRepository, PortError};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Load the Dataset ---
    info!("Loading dataset from {}...", config.data_path.display());
    let catalog = Arc::new(InMemoryCatalog::load(&config.data_path).await?);
    match catalog.get_user_by_id(&config.current_user_id).await {
        Ok(_) => info!("Serving requests as user {}", config.current_user_id),
        Err(PortError::NotFound(_)) => warn!(
            "Current user {} has no entry in the dataset",
            config.current_user_id
        ),
        Err(e) => return Err(e.into()),
    }

    // --- 3. Initialize the File Store ---
    if !config.resources_dir.is_dir() {
        warn!(
            "Resources directory {} does not exist; file downloads will return 404",
            config.resources_dir.display()
        );
    }
    let files = Arc::new(DiskFileStore::new(config.resources_dir.clone()));

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        catalog,
        files,
        config: config.clone(),
    });

    // --- 5. Create the Web Router ---
    let app = Router::new()
        .merge(build_router(app_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
