//! Image payloads
//!
//! Provides:
//! - `ImageReference`: base64 payload + media type, request-scoped
//! - Upload parsing from data URLs or bare base64
//! - Extraction of the first inline image from a provider response

mod extract;

pub use extract::{extract_image, InlineData, Part};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

use crate::error::DesignError;

/// Media type assumed for uploads that do not declare one
pub const DEFAULT_UPLOAD_MIME: &str = "image/jpeg";

/// Encoded image bytes plus declared media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub mime_type: String,
    /// Base64 body, no `data:` prefix
    pub data: String,
}

impl ImageReference {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parse an uploaded image.
    ///
    /// Accepts `data:<mime>;base64,<body>`, anything containing
    /// `base64,` (the body follows it), or bare base64. The declared
    /// media type wins over `fallback_mime`.
    pub fn from_upload(input: &str, fallback_mime: Option<&str>) -> Result<Self, DesignError> {
        let input = input.trim();
        let fallback = fallback_mime
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_MIME);

        let (declared, body) = match input.split_once("base64,") {
            Some((head, body)) => (declared_mime(head), body),
            None => (None, input),
        };

        let mime_type = declared.unwrap_or(fallback);
        if !mime_type.starts_with("image/") {
            return Err(DesignError::validation(format!(
                "Unsupported upload type: {}",
                mime_type
            )));
        }

        let body = body.trim();
        if body.is_empty() || BASE64.decode(body).is_err() {
            return Err(DesignError::validation("Uploaded image is not valid base64"));
        }

        Ok(Self::new(mime_type, body))
    }

    /// Self-describing form for UI image elements
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Raw bytes for multipart uploads
    pub fn decode(&self) -> Result<Vec<u8>, DesignError> {
        BASE64
            .decode(&self.data)
            .map_err(|e| DesignError::validation(format!("Invalid image data: {}", e)))
    }

    /// File extension matching the media type
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "jpg",
        }
    }
}

/// `data:image/png;` -> `image/png`
fn declared_mime(head: &str) -> Option<&str> {
    head.trim()
        .strip_prefix("data:")
        .map(|m| m.trim_end_matches(';'))
        .filter(|m| !m.is_empty())
}

/// Final image handed back to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutput {
    Inline(ImageReference),
    /// Provider answered with a hosted URL only
    Remote(String),
}

impl ImageOutput {
    /// Value for an `<img src>`
    pub fn into_src(self) -> String {
        match self {
            ImageOutput::Inline(image) => image.to_data_uri(),
            ImageOutput::Remote(url) => url,
        }
    }
}

impl Serialize for ImageOutput {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ImageOutput::Inline(image) => serializer.serialize_str(&image.to_data_uri()),
            ImageOutput::Remote(url) => serializer.serialize_str(url),
        }
    }
}
