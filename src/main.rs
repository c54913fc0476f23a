//! College Club Backend
//!
//! REST backend serving the club profile, events, team and social links from a document store.

mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::SharedStore;
use errors::AppError;
use models::{ClubInfo, Event, Member, Social};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the database was not configured or could not be opened at startup.
    pub store: Option<SharedStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// The storage handle, or a storage error if none was initialized.
    pub fn store(&self) -> Result<&SharedStore, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not initialized".to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!("Starting College Club Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database; a missing store degrades the data routes only
    let store = db::connect(&config).await;

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/club",
            get(api::list_documents::<ClubInfo>).post(api::create_document::<ClubInfo>),
        )
        .route(
            "/events",
            get(api::list_documents::<Event>).post(api::create_document::<Event>),
        )
        .route(
            "/team",
            get(api::list_documents::<Member>).post(api::create_document::<Member>),
        )
        .route(
            "/socials",
            get(api::list_documents::<Social>).post(api::create_document::<Social>),
        );

    Router::new()
        .route("/", get(api::root))
        .route("/test", get(api::test_database))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
