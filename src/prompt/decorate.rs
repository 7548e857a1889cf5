//! Edit-existing-photo template: additive floral decoration

use crate::selection::Decoration;

/// Where decorations may be attached
pub const ANCHOR_POINTS: &[&str] = &["gate pillars", "gate frame (top and side bars)"];

pub const PRESERVATION_RULES: &str = "CRITICAL PRESERVATION RULES (MUST FOLLOW):
- Preserve the original photograph exactly
- Do NOT regenerate, redraw, repaint, or stylize the image
- Do NOT change gate structure, materials, colors, textures, or perspective
- Do NOT alter tiles, ground, background, trees, sky, or lighting
- Do NOT add depth effects, cinematic lighting, HDR, or 3D realism
- Maintain original shadows, contrast, and camera characteristics";

pub const FINAL_CHECK: &str = "FINAL CHECK BEFORE OUTPUT:
If any part of the image other than flowers looks changed,
undo that change and keep the original pixels.";

pub(super) fn render(decoration: &Decoration) -> String {
    let anchors = ANCHOR_POINTS
        .iter()
        .map(|a| format!("  • {}", a))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are performing a REALISTIC, ADDITIVE IMAGE EDIT on a real photograph.

{}

EDITING SCOPE:
- Only add floral decorations
- Decorations must be physically attached to:
{}
- No flowers anywhere else

DECORATION REQUIREMENTS (IMPORTANT):
- Use clearly visible, WELL-DEFINED, DENSE floral arrangements
- Flowers should be abundant, not sparse or minimal
- Create continuous garlands and clustered arrangements
- Decorations should look professionally installed (event/wedding style)
- Flowers must feel like real objects added onto the existing gate

STYLE & REALISM:
- Photographic realism is more important than artistic beauty
- Match the exact lighting, shadows, and color temperature of the original photo
- Flowers must blend naturally without altering the base image
- Avoid over-perfect symmetry or artificial smoothness

FLOWER TYPE:
Use ONLY the following flowers:
{}

{}

OUTPUT:
Return the same photograph with visibly rich floral decorations added,
and nothing else altered.
"#,
        PRESERVATION_RULES,
        anchors,
        decoration.flowers.join(", "),
        FINAL_CHECK,
    )
}
