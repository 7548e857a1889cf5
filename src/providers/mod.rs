//! Generative image providers
//!
//! Provides:
//! - Gemini `generateContent` for bouquet, composite and vision requests
//! - OpenAI image edits for decorating uploaded photos
//! - A fixed one-shot retry shared by every provider call

mod gemini;
mod openai;

pub use gemini::{GeminiClient, GenerateContentResponse};
pub use openai::OpenAiClient;

use std::future::Future;

use reqwest::StatusCode;
use tracing::warn;

use crate::error::DesignError;

/// Run `call`, retrying exactly once on a provider failure.
///
/// No backoff. Validation, decode and configuration errors are returned
/// immediately since a second attempt would fail the same way.
pub async fn with_retry<T, F, Fut>(operation: &str, mut call: F) -> Result<T, DesignError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DesignError>>,
{
    match call().await {
        Err(e) if e.is_retryable() => {
            warn!("{} failed, retrying once: {}", operation, e);
            call().await
        }
        result => result,
    }
}

/// Turn a non-2xx provider answer into a `Provider` error, keeping the
/// provider's own message when the body carries one
pub(crate) fn provider_error(status: StatusCode, body: &str) -> DesignError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        DesignError::Provider(format!("API error: {}", status))
    } else {
        DesignError::Provider(format!("API error: {} - {}", status, message))
    }
}
