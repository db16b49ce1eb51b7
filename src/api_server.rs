// Axum server module
//
// Purpose: serve the guide's three views (home, contents, section) plus a
// health check and the stylesheet directory.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::guide::DocumentStore;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, read-only afterwards
    pub store: Arc<DocumentStore>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let store = match &config.content_path {
            Some(path) => DocumentStore::from_path(path)?,
            None => {
                tracing::info!("Using bundled guide content");
                DocumentStore::bundled()?
            }
        };

        Ok(Self::with_store(store, config.static_dir.clone()))
    }

    pub fn with_store(store: DocumentStore, static_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(store),
            static_dir,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Reader views (HTML)
        .route("/", get(pages::home_page))
        .route("/contents", get(pages::contents_page))
        .route("/section/:id", get(pages::section_page))

        // Stylesheet
        .nest_service("/static", static_files)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "sections": state.store.section_count(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Template(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(msg) => {
                tracing::error!("Template render failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
