//! Composite template: arrange uploaded plants inside an uploaded basket
//!
//! The first image is always the container; every later image is content
//! to be replicated. Each image gets a structured attachment instruction
//! in the same order the images are sent.

use serde::Serialize;

use super::PromptText;

/// Role of an uploaded image in a composite request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentRole {
    /// Basket or container; geometry must be preserved
    Container,
    /// Plant or flower to replicate
    Reference,
}

impl AttachmentRole {
    pub fn instruction(self) -> &'static str {
        match self {
            AttachmentRole::Container => "Basket / container (must remain unchanged)",
            AttachmentRole::Reference => {
                "Plant or flower reference (replicate exactly, repetition allowed)"
            }
        }
    }
}

/// Per-image instruction, ordered like the images
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// 1-based position in the request
    pub position: usize,
    pub role: AttachmentRole,
    pub instruction: &'static str,
}

/// Attachment list plus the text instruction that follows the images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositePrompt {
    pub attachments: Vec<Attachment>,
    pub text: PromptText,
}

pub const ABSOLUTE_CONSTRAINTS: &str = "ABSOLUTE CONSTRAINTS:
- Preserve the exact basket shape, proportions, edges, and geometry
- Do NOT redesign, stylize, or reinterpret the basket
- Do NOT introduce any new plant species
- Do NOT add any flowers, foliage, or materials that are NOT visible in the uploaded images
- Do NOT change the identity, leaf shape, or flower type of the uploaded plants";

pub const PLANT_USAGE_RULES: &str = "PLANT USAGE RULES (VERY IMPORTANT):
- You MAY reuse and repeat the SAME uploaded plant or flower multiple times
- Repetition is allowed ONLY by duplicating the exact uploaded plant appearance
- All repeated plants must look identical to the uploaded reference
- Do NOT invent variations, colors, or new plant forms";

/// Build the composite prompt for one container and `reference_count`
/// content images
pub fn compose_composite(reference_count: usize) -> CompositePrompt {
    let attachments: Vec<Attachment> = std::iter::once(AttachmentRole::Container)
        .chain(std::iter::repeat(AttachmentRole::Reference).take(reference_count))
        .enumerate()
        .map(|(i, role)| Attachment {
            position: i + 1,
            role,
            instruction: role.instruction(),
        })
        .collect();

    let image_rules = attachments
        .iter()
        .map(|a| format!("- Image {}: {}", a.position, a.instruction))
        .collect::<Vec<_>>()
        .join("\n");

    let text = format!(
        r#"You are performing a STRICT VISUAL SUGGESTION AND PRESERVATION task.

TASK:
Show a visual suggestion of how the uploaded plants or flowers could be placed together inside the uploaded basket.

IMPORTANT:
This is NOT a creative redesign.
This is NOT an artistic reinterpretation.
This is a placement suggestion using ONLY the user-uploaded assets.

IMAGE RULES:
{}

{}

{}

COMPOSITION RULES:
- Use enough repeated plants to visually suggest a balanced arrangement
- Plants may overlap naturally
- The goal is to suggest where and how the plants could look good together
- Empty space is acceptable if needed to preserve accuracy

VISUAL STYLE:
- Conceptual arrangement preview
- Not photorealistic product photography
- Not a catalog or lifestyle render
- Avoid beautification or idealization

PRIORITY:
Object fidelity > basket accuracy > visual clarity > beauty

OUTPUT:
Generate a single image that visually suggests how multiple instances of the uploaded plants could be arranged inside the uploaded basket, using only the provided images.
"#,
        image_rules, ABSOLUTE_CONSTRAINTS, PLANT_USAGE_RULES,
    );

    CompositePrompt {
        attachments,
        text: PromptText::new(text),
    }
}
