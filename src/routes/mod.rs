//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` and serves the compiled
//! editor pages and wasm bundle from `STATIC_DIR` as the fallback. The two
//! editor pages get explicit routes so share links (`/create?share=...`,
//! `/poster?share=...`) resolve without a trailing slash.

pub mod generate;
pub mod health;

use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use captions::{CAPTION_PATH, ErrorResponse, HEALTH_PATH, POSTER_PATH};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::rate_limit::RateLimitError;
use crate::state::AppState;

/// Full application router: API routes, editor pages and static assets.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let static_dir = state.config.static_dir.clone();
    let assets = ServeDir::new(&static_dir).append_index_html_on_directories(true);

    Router::new()
        .route(CAPTION_PATH, post(generate::generate_caption))
        .route(POSTER_PATH, post(generate::generate_poster))
        .route(HEALTH_PATH, get(health::health))
        .route_service("/create", ServeFile::new(static_dir.join("create.html")))
        .route_service("/poster", ServeFile::new(static_dir.join("poster.html")))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// API ERRORS
// =============================================================================

/// Failures surfaced by the generation endpoints as `{ "error": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
