//! Error taxonomy for the design pipeline
//!
//! Validation failures are raised before any provider call. Provider
//! failures are the only retryable kind.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

/// Errors produced while turning a selection into an image or suggestion
#[derive(Debug, Error)]
pub enum DesignError {
    /// Required field missing or nothing survived vocabulary filtering
    #[error("{0}")]
    Validation(String),

    /// Provider output could not be parsed as structured data
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Provider output parsed but lacks mandatory fields
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Provider answered without any inline image part
    #[error("no image returned{}", context_suffix(.context))]
    NoImageReturned { context: Option<String> },

    /// Transport, auth or quota failure from the provider, passed through
    #[error("{0}")]
    Provider(String),

    /// Provider API key missing from configuration
    #[error("{0} API key is not configured")]
    NotConfigured(&'static str),
}

fn context_suffix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|c| format!(": {}", c))
        .unwrap_or_default()
}

impl DesignError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DesignError::Validation(msg.into())
    }

    /// Only provider failures get the one-shot retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, DesignError::Provider(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            DesignError::Validation(_) => StatusCode::BAD_REQUEST,
            DesignError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            DesignError::MalformedResponse(_)
            | DesignError::SchemaMismatch(_)
            | DesignError::NoImageReturned { .. }
            | DesignError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for DesignError {
    fn from(e: reqwest::Error) -> Self {
        DesignError::Provider(format!("Request failed: {}", e))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for DesignError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
