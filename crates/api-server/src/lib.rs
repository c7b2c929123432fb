pub mod auth;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

use application::SelectShopApp;
use axum::routing::{get, post};
use axum::Router;
use config::AppConfig;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use auth::{AuthenticatedUser, USER_ID_HEADER};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/folders",
            get(handlers::folders::get_folders).post(handlers::folders::add_folders),
        )
        .route(
            "/api/folders/:folder_id/products",
            get(handlers::folders::get_products_in_folder),
        )
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::register_product),
        )
        .route(
            "/api/products/:product_id/folder",
            post(handlers::products::add_product_to_folder),
        )
        .route(
            "/api/products/:product_id/folders",
            get(handlers::products::get_product_folders),
        )
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Opens the database, binds the listener and serves until Ctrl+C.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    info!("💾 Using database: {}", config.database_url);
    let app = SelectShopApp::new(&config.database_url, config.db_pool_size)?;
    let app = router(AppState::new(app));

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("   GET  /api/folders                        - List folders");
    info!("   POST /api/folders                        - Add folders");
    info!("   GET  /api/folders/:id/products           - Products in a folder");
    info!("   GET  /api/products                       - List products");
    info!("   POST /api/products                       - Register product");
    info!("   POST /api/products/:id/folder            - File product into folder");
    info!("   GET  /api/products/:id/folders           - Folders of a product");
    info!("   GET  /health                             - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
