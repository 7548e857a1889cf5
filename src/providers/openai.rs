//! OpenAI image edits
//!
//! Multipart upload of the photo, instruction and optional mask. The
//! answer is either inline base64 PNG or a hosted URL.

use std::time::Duration;

use reqwest::multipart::{Form, Part as FormPart};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{provider_error, with_retry};
use crate::config::OpenAiConfig;
use crate::error::DesignError;
use crate::images::{ImageOutput, ImageReference};
use crate::prompt::PromptText;

/// Image edit response
#[derive(Debug, Deserialize)]
struct EditResponse {
    #[serde(default)]
    data: Vec<EditData>,
}

#[derive(Debug, Deserialize)]
struct EditData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl EditResponse {
    /// Inline payload wins over a URL; inline edits are always PNG
    fn into_output(self) -> Result<ImageOutput, DesignError> {
        let first = self.data.into_iter().next();
        match first {
            Some(EditData {
                b64_json: Some(b64),
                ..
            }) if !b64.is_empty() => Ok(ImageOutput::Inline(ImageReference::new("image/png", b64))),
            Some(EditData { url: Some(url), .. }) if !url.is_empty() => {
                Ok(ImageOutput::Remote(url))
            }
            _ => Err(DesignError::NoImageReturned { context: None }),
        }
    }
}

/// OpenAI API client
#[derive(Debug)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    edit_model: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            edit_model: config.edit_model.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Edit `image` following `prompt`, optionally restricted by a PNG mask
    pub async fn edit_image(
        &self,
        image: &ImageReference,
        prompt: &PromptText,
        mask: Option<&ImageReference>,
    ) -> Result<ImageOutput, DesignError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DesignError::NotConfigured("OpenAI"))?;

        let image_bytes = image.decode()?;
        let mask_bytes = mask.map(ImageReference::decode).transpose()?;

        let response = with_retry("OpenAI image edit", || {
            self.send_edit(
                api_key,
                image,
                &image_bytes,
                prompt,
                mask_bytes.as_deref(),
            )
        })
        .await?;

        response.into_output()
    }

    /// Single edit call, no retry
    async fn send_edit(
        &self,
        api_key: &str,
        image: &ImageReference,
        image_bytes: &[u8],
        prompt: &PromptText,
        mask_bytes: Option<&[u8]>,
    ) -> Result<EditResponse, DesignError> {
        let mut form = Form::new()
            .text("model", self.edit_model.clone())
            .text("prompt", prompt.as_str().to_string())
            .part(
                "image[]",
                FormPart::bytes(image_bytes.to_vec())
                    .file_name(format!("image.{}", image.extension()))
                    .mime_str(&image.mime_type)?,
            );
        if let Some(mask) = mask_bytes {
            form = form.part(
                "mask",
                FormPart::bytes(mask.to_vec())
                    .file_name("mask.png")
                    .mime_str("image/png")?,
            );
        }

        debug!("Sending image edit request to OpenAI: {}", self.edit_model);

        let response = self
            .client
            .post(format!("{}/images/edits", self.base_url))
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAI API error: {} - {}", status, body);
            return Err(provider_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| DesignError::MalformedResponse(format!("Failed to parse response: {}", e)))
    }
}
