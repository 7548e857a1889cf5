//! Gemini integration
//!
//! Image generation and vision requests over the `generateContent`
//! endpoint. Requests and responses share the same role-tagged part list.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{provider_error, with_retry};
use crate::config::GeminiConfig;
use crate::error::DesignError;
use crate::images::{extract_image, ImageReference, Part};

/// Role-tagged message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

/// `generateContent` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// `generateContent` response envelope
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Parts of the first candidate.
    ///
    /// A blocked prompt yields a single text part naming the block reason
    /// so it surfaces as failure context.
    pub fn into_parts(self) -> Vec<Part> {
        if let Some(content) = self.candidates.into_iter().next().and_then(|c| c.content) {
            return content.parts;
        }
        match self.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => vec![Part::text(format!("Prompt blocked: {}", reason))],
            None => Vec::new(),
        }
    }
}

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    /// HTTP client
    client: Client,
    /// API key
    api_key: Option<String>,
    /// API base URL
    base_url: String,
    image_model: String,
    vision_model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_model: config.image_model.clone(),
            vision_model: config.vision_model.clone(),
        })
    }

    /// Check if API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Single `generateContent` call, no retry
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, DesignError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(DesignError::NotConfigured("Gemini"))?;

        debug!("Sending generateContent request to Gemini: {}", model);

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API error: {} - {}", status, body);
            return Err(provider_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| DesignError::MalformedResponse(format!("Failed to parse response: {}", e)))
    }

    /// Generate an image from text and/or inline image parts
    pub async fn generate_image(&self, parts: Vec<Part>) -> Result<ImageReference, DesignError> {
        if !self.is_configured() {
            return Err(DesignError::NotConfigured("Gemini"));
        }

        let request = GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE"],
            }),
        };

        let response = with_retry("Gemini image generation", || {
            self.generate_content(&self.image_model, &request)
        })
        .await?;

        extract_image(&response.into_parts())
    }

    /// Ask the vision model about the given parts and return its text
    pub async fn describe(&self, parts: Vec<Part>) -> Result<String, DesignError> {
        if !self.is_configured() {
            return Err(DesignError::NotConfigured("Gemini"));
        }

        let request = GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: None,
        };

        let response = with_retry("Gemini vision request", || {
            self.generate_content(&self.vision_model, &request)
        })
        .await?;

        let text: String = response
            .into_parts()
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        if text.trim().is_empty() {
            return Err(DesignError::MalformedResponse(
                "No text in response".to_string(),
            ));
        }
        Ok(text)
    }
}
