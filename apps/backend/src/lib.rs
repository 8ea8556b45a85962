pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use quickcache_core::QuickCache;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::storage::StorageService;

pub use crate::state::AppState;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let storage = StorageService::new(config.data_path.clone());
    match storage.path() {
        Some(path) => tracing::info!("Loading flashcards from {}", path.display()),
        None => tracing::info!("Persistence disabled, keeping flashcards in memory"),
    }
    let records = storage.load().await?;
    let model = QuickCache::from_records(records)?;
    tracing::info!("Loaded {} flashcards", model.len());

    let app = router(AppState::new(model, storage));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/flashcards", get(routes::flashcards::list))
        .route("/api/flashcards/open", post(routes::flashcards::add_open))
        .route("/api/flashcards/mcq", post(routes::flashcards::add_mcq))
        .route("/api/flashcards/find", post(routes::flashcards::find))
        .route(
            "/api/flashcards/delete",
            post(routes::flashcards::delete_by_tags),
        )
        .route(
            "/api/flashcards/{position}",
            axum::routing::patch(routes::flashcards::edit).delete(routes::flashcards::delete),
        )
        .route(
            "/api/flashcards/{position}/test",
            post(routes::flashcards::test),
        )
        .route(
            "/api/flashcards/{position}/stats",
            get(routes::flashcards::stats),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
