//! Design pipeline
//!
//! Validate -> compose prompt -> provider call -> extract/decode. Every
//! validation step runs before the first network call.

use tracing::{debug, info};

use crate::error::DesignError;
use crate::images::{ImageOutput, ImageReference, Part};
use crate::prompt::{build_prompt, compose_composite, suggestion_prompt, PromptRequest};
use crate::providers::{GeminiClient, OpenAiClient};
use crate::selection::{Decoration, SelectionInput};
use crate::suggestion::{decode_suggestion, Suggestion};
use crate::vocabulary::RawList;

/// Which flow a generate-image request takes
#[derive(Debug)]
pub enum DesignMode<'a> {
    /// Basket photo plus plant/flower photos
    Composite {
        basket: &'a str,
        references: &'a [String],
    },
    /// Single reference photo to read a suggestion from
    Suggest {
        image: &'a str,
        mime_type: Option<&'a str>,
    },
    /// Structured wizard selection
    Generate(&'a SelectionInput),
}

/// Raw image fields of a generate-image request
#[derive(Debug, Default, Clone, Copy)]
pub struct UploadFields<'a> {
    pub basket_image: Option<&'a str>,
    pub flower_images: Option<&'a [String]>,
    pub image: Option<&'a str>,
    pub mime_type: Option<&'a str>,
}

impl<'a> DesignMode<'a> {
    /// Multi-image fields first, then the single image, then the
    /// structured selection
    pub fn classify(uploads: UploadFields<'a>, selection: &'a SelectionInput) -> Self {
        if let (Some(basket), Some(references)) = (uploads.basket_image, uploads.flower_images) {
            return DesignMode::Composite { basket, references };
        }
        if let Some(image) = uploads.image {
            return DesignMode::Suggest {
                image,
                mime_type: uploads.mime_type,
            };
        }
        DesignMode::Generate(selection)
    }
}

/// Result of a generate-image request
#[derive(Debug)]
pub enum DesignOutcome {
    Image(ImageOutput),
    Suggestions(Suggestion),
}

/// Orchestrates the providers for each design flow
#[derive(Debug)]
pub struct Studio {
    gemini: GeminiClient,
    openai: OpenAiClient,
}

impl Studio {
    pub fn new(gemini: GeminiClient, openai: OpenAiClient) -> Self {
        Self { gemini, openai }
    }

    pub fn gemini(&self) -> &GeminiClient {
        &self.gemini
    }

    pub fn openai(&self) -> &OpenAiClient {
        &self.openai
    }

    /// Dispatch a classified generate-image request
    pub async fn run(&self, mode: DesignMode<'_>) -> Result<DesignOutcome, DesignError> {
        match mode {
            DesignMode::Composite { basket, references } => self
                .composite(basket, references)
                .await
                .map(DesignOutcome::Image),
            DesignMode::Suggest { image, mime_type } => self
                .suggest(image, mime_type)
                .await
                .map(DesignOutcome::Suggestions),
            DesignMode::Generate(selection) => self
                .generate(selection)
                .await
                .map(DesignOutcome::Image),
        }
    }

    /// Studio product photo from a wizard selection
    pub async fn generate(&self, input: &SelectionInput) -> Result<ImageOutput, DesignError> {
        let selection = input.validate()?;
        let prompt = build_prompt(PromptRequest::Bouquet(&selection));

        info!(
            "Generating bouquet image: {} {} with {} stems",
            selection.quantity,
            selection.bouquet_type,
            selection.flowers.len()
        );
        debug!("Prompt {}:\n{}", prompt.fingerprint(), prompt);

        let image = self
            .gemini
            .generate_image(vec![Part::text(prompt.into_string())])
            .await?;
        Ok(ImageOutput::Inline(image))
    }

    /// Read a design suggestion from a reference photo
    pub async fn suggest(
        &self,
        image: &str,
        mime_type: Option<&str>,
    ) -> Result<Suggestion, DesignError> {
        let image = ImageReference::from_upload(image, mime_type)?;
        let prompt = suggestion_prompt();

        info!("Requesting design suggestion for {} upload", image.mime_type);

        let text = self
            .gemini
            .describe(vec![Part::image(&image), Part::text(prompt.into_string())])
            .await?;
        debug!("Suggestion response: {}", text);

        decode_suggestion(&text)
    }

    /// Arrangement preview from a basket photo and plant photos
    pub async fn composite(
        &self,
        basket: &str,
        references: &[String],
    ) -> Result<ImageOutput, DesignError> {
        if references.is_empty() {
            return Err(DesignError::validation(
                "At least one flower image is required",
            ));
        }

        let basket = ImageReference::from_upload(basket, None)?;
        let references = references
            .iter()
            .map(|r| ImageReference::from_upload(r, None))
            .collect::<Result<Vec<_>, _>>()?;

        let composite = compose_composite(references.len());
        let mut parts = Vec::with_capacity(composite.attachments.len() + 1);
        let mut images = std::iter::once(&basket).chain(references.iter());
        for attachment in &composite.attachments {
            if let Some(image) = images.next() {
                debug!(
                    "Attachment {} ({:?}): {}",
                    attachment.position, attachment.role, image.mime_type
                );
                parts.push(Part::image(image));
            }
        }
        parts.push(Part::text(composite.text.into_string()));

        info!(
            "Generating composite preview from {} reference images",
            references.len()
        );

        let image = self.gemini.generate_image(parts).await?;
        Ok(ImageOutput::Inline(image))
    }

    /// Decorate an uploaded photo with the requested flowers
    pub async fn decorate(
        &self,
        image: Option<&str>,
        style: Option<&RawList>,
        mask: Option<&str>,
    ) -> Result<ImageOutput, DesignError> {
        let image = image
            .filter(|i| !i.trim().is_empty())
            .ok_or_else(|| DesignError::validation("Image is required"))?;
        let decoration = Decoration::from_style(style)?;
        let image = ImageReference::from_upload(image, None)?;
        let mask = mask
            .map(|m| ImageReference::from_upload(m, Some("image/png")))
            .transpose()?;

        let prompt = build_prompt(PromptRequest::Decorate(&decoration));
        info!(
            "Decorating photo with {}",
            decoration.flowers.join(", ")
        );
        debug!("Prompt {}:\n{}", prompt.fingerprint(), prompt);

        self.openai.edit_image(&image, &prompt, mask.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn studio() -> Studio {
        let config = Config::default();
        Studio::new(
            GeminiClient::new(&config.gemini, config.request_timeout()).unwrap(),
            OpenAiClient::new(&config.openai, config.request_timeout()).unwrap(),
        )
    }

    #[test]
    fn test_classify_precedence() {
        let selection = SelectionInput::default();
        let refs = vec!["AAA=".to_string()];

        let uploads = UploadFields {
            basket_image: Some("AAA="),
            flower_images: Some(&refs),
            image: Some("AAA="),
            mime_type: None,
        };
        assert!(matches!(
            DesignMode::classify(uploads, &selection),
            DesignMode::Composite { .. }
        ));

        let uploads = UploadFields {
            basket_image: Some("AAA="),
            image: Some("AAA="),
            ..Default::default()
        };
        assert!(matches!(
            DesignMode::classify(uploads, &selection),
            DesignMode::Suggest { .. }
        ));

        assert!(matches!(
            DesignMode::classify(UploadFields::default(), &selection),
            DesignMode::Generate(_)
        ));
    }

    #[tokio::test]
    async fn test_validation_runs_before_provider() {
        // Providers are unconfigured, so reaching them would yield NotConfigured
        let studio = studio();

        let err = studio.generate(&SelectionInput::default()).await.unwrap_err();
        assert!(matches!(err, DesignError::Validation(_)));

        let err = studio.decorate(None, None, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Image is required");

        let err = studio.decorate(Some("AAA="), None, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Style is required");

        let err = studio.composite("AAA=", &[]).await.unwrap_err();
        assert!(matches!(err, DesignError::Validation(_)));

        let err = studio.suggest("!!!", None).await.unwrap_err();
        assert!(matches!(err, DesignError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_after_validation() {
        let studio = studio();
        let style: RawList = "rose".into();

        let err = studio
            .decorate(Some("AAA="), Some(&style), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DesignError::NotConfigured("OpenAI")));
    }
}
