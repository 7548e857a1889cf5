//! HTTP API module - REST endpoints

mod catalog;
mod design;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::Request,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

use crate::studio::Studio;

pub use design::{DecorateRequest, GenerateImageRequest};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Studio>,
}

/// Build the API router
pub fn router(studio: Arc<Studio>, max_body_bytes: usize) -> Router {
    let state = AppState { studio };

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .route("/api/catalog", get(catalog::get_catalog))
        .route("/api/generate-image", post(design::generate_image))
        .route("/api/generate", post(design::decorate))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(
                    |request: &Request<Body>| {
                        let request_id = Uuid::new_v4();
                        info_span!(
                            "request",
                            %request_id,
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    },
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "bouquetd",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint; reports which providers have API keys
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        gemini: key_status(state.studio.gemini().is_configured()),
        openai: key_status(state.studio.openai().is_configured()),
    })
}

fn key_status(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "missing"
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    gemini: &'static str,
    openai: &'static str,
}
