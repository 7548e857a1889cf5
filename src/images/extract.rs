//! Result extraction from provider response parts

use serde::{Deserialize, Serialize};

use super::ImageReference;
use crate::error::DesignError;

/// One unit of a multimodal message.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Part kinds this service does not use
    Other(serde_json::Value),
}

/// Base64 payload embedded in a part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: &ImageReference) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        }
    }
}

/// Return the first inline image in `parts`.
///
/// When there is none, any text the provider sent (often a refusal)
/// becomes the failure context.
pub fn extract_image(parts: &[Part]) -> Result<ImageReference, DesignError> {
    let mut texts = Vec::new();

    for part in parts {
        match part {
            Part::InlineData { inline_data } => {
                return Ok(ImageReference::new(
                    inline_data.mime_type.clone(),
                    inline_data.data.clone(),
                ));
            }
            Part::Text { text } => {
                let text = text.trim();
                if !text.is_empty() {
                    texts.push(text);
                }
            }
            Part::Other(_) => {}
        }
    }

    let context = if texts.is_empty() {
        None
    } else {
        Some(texts.join(" "))
    };
    Err(DesignError::NoImageReturned { context })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(json: serde_json::Value) -> Vec<Part> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_extract_first_image() {
        let parts = parts(serde_json::json!([
            { "text": "x" },
            { "inlineData": { "mimeType": "image/png", "data": "AAA=" } },
            { "inlineData": { "mimeType": "image/jpeg", "data": "BBB=" } },
        ]));

        let image = extract_image(&parts).unwrap();
        assert_eq!(image.to_data_uri(), "data:image/png;base64,AAA=");
    }

    #[test]
    fn test_extract_refusal_text_as_context() {
        let parts = parts(serde_json::json!([{ "text": "sorry" }]));

        match extract_image(&parts) {
            Err(DesignError::NoImageReturned { context }) => {
                assert_eq!(context.as_deref(), Some("sorry"))
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_extract_empty() {
        match extract_image(&[]) {
            Err(DesignError::NoImageReturned { context }) => assert!(context.is_none()),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_parts_are_tolerated() {
        let parts = parts(serde_json::json!([
            { "functionCall": { "name": "noop" } },
            { "inlineData": { "mimeType": "image/webp", "data": "CCC=" }, "thoughtSignature": "abc" },
        ]));
        assert!(matches!(parts[0], Part::Other(_)));

        let image = extract_image(&parts).unwrap();
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn test_request_parts_serialize() {
        let image = ImageReference::new("image/jpeg", "AAA=");
        let json = serde_json::to_value(vec![Part::image(&image), Part::text("hi")]).unwrap();
        assert_eq!(json[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(json[1]["text"], "hi");
    }
}
