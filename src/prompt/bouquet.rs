//! Generate-from-scratch template: studio product photo of a bouquet

use crate::selection::{Addons, Selection};

/// Negative constraints every product prompt carries verbatim
pub const STRICT_RULES: &str = "STRICT RULES:
- DO NOT include text or watermarks
- DO NOT add people or hands
- Image must look like a professional product photo
- Photorealistic, not illustration or 3D render";

pub const VISUAL_REQUIREMENTS: &str = "VISUAL REQUIREMENTS:
- Studio lighting
- Natural shadows
- Premium florist quality
- Realistic flower textures
- Clean background
- Centered composition";

pub(super) fn render(selection: &Selection) -> String {
    let colors = selection
        .colors
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a professional floral designer and photographer.

TASK:
Generate a hyper-realistic bouquet product image.

BOUQUET DETAILS:
• Style: {} ({} volume)
• Flowers: {}
• Color theme: {}
• Wrapping: {}
• Ribbon: {} {} ribbon
{}
{}

{}

OUTPUT:
Return a single realistic bouquet image.
"#,
        selection.bouquet_type,
        selection.quantity,
        selection.flowers.join(", "),
        colors,
        selection.wrap,
        selection.ribbon_color,
        selection.ribbon_type,
        addons_block(&selection.addons),
        VISUAL_REQUIREMENTS,
        STRICT_RULES,
    )
}

/// Optional add-ons section, empty when nothing was picked.
///
/// The card message itself is never rendered: it would end up as text
/// in the image.
fn addons_block(addons: &Addons) -> String {
    if addons.is_empty() {
        return String::new();
    }

    let mut lines = vec!["\nADD-ONS:".to_string()];
    if addons.has_vase {
        lines.push("- Presented in a clear glass vase".to_string());
    }
    if addons.has_chocolates {
        lines.push("- A small box of chocolates placed beside the bouquet".to_string());
    }
    if addons.has_balloons {
        lines.push("- A few balloons in the background matching the color theme".to_string());
    }
    if !addons.card_message.trim().is_empty() {
        lines.push("- A small greeting card tucked into the arrangement, card face blank".to_string());
    }
    let note = addons.florist_note.trim();
    if !note.is_empty() {
        lines.push(format!("- Florist note: {}", note));
    }
    let mut block = lines.join("\n");
    block.push('\n');
    block
}
