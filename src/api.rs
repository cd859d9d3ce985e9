// Share Market Backend - REST API
// Axum router and handlers for the dashboard frontend

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::db::get_all_articles;
use crate::news::NewsArticle;
use crate::stocks::market_snapshot;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json("OK")
}

/// GET /api/stocks/ - The fixed market snapshot
///
/// Reads no input and cannot fail; always the same two records.
async fn get_stocks() -> impl IntoResponse {
    (StatusCode::OK, Json(market_snapshot()))
}

/// GET /api/news/ - All news articles, newest first
async fn get_news(State(state): State<AppState>) -> impl IntoResponse {
    let conn = state.db.lock().unwrap();

    match get_all_articles(&conn) {
        Ok(articles) => (StatusCode::OK, Json(articles)).into_response(),
        Err(e) => {
            eprintln!("Error getting news articles: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Vec::<NewsArticle>::new()),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router.
///
/// The React frontend runs on another origin and polls with axios, so the
/// CORS layer stays permissive. Trailing slashes match the paths the
/// frontend requests.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/stocks/", get(get_stocks))
        .route("/news/", get(get_news))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
