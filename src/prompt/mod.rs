//! Prompt composition
//!
//! Pure, deterministic rendering of validated selections into model
//! instructions:
//! - Bouquet: studio product photo generated from scratch
//! - Decorate: additive edit of an uploaded photo
//! - Composite: arrangement preview from basket + plant photos
//! - Suggestion: vision request for a structured design guess
//!
//! Only validated values reach the flower/style slots. Free-text fields
//! (ribbon color, florist note) are interpolated as-is.

mod bouquet;
mod composite;
mod decorate;
mod suggest;

use std::fmt;

use sha2::{Digest, Sha256};

use crate::selection::{Decoration, Selection};

pub use bouquet::{STRICT_RULES, VISUAL_REQUIREMENTS};
pub use composite::{
    compose_composite, Attachment, AttachmentRole, CompositePrompt, ABSOLUTE_CONSTRAINTS,
    PLANT_USAGE_RULES,
};
pub use decorate::{ANCHOR_POINTS, FINAL_CHECK, PRESERVATION_RULES};

/// Rendered instruction for a generative model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptText(String);

impl PromptText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// SHA-256 of the prompt, hex encoded
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the prompt should ask for
#[derive(Debug, Clone, Copy)]
pub enum PromptRequest<'a> {
    Bouquet(&'a Selection),
    Decorate(&'a Decoration),
}

/// Render the single-image prompt for a request
pub fn build_prompt(request: PromptRequest<'_>) -> PromptText {
    let text = match request {
        PromptRequest::Bouquet(selection) => bouquet::render(selection),
        PromptRequest::Decorate(decoration) => decorate::render(decoration),
    };
    PromptText::new(text)
}

/// Vision prompt asking for a JSON design suggestion
pub fn suggestion_prompt() -> PromptText {
    PromptText::new(suggest::render())
}
