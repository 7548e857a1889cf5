//! Vision prompt asking the model for a structured design suggestion

use crate::selection::{BouquetType, ColorTheme, Labeled, Quantity, RibbonType, Wrap};
use crate::vocabulary::bouquet_flowers;

fn quoted_options<T: Labeled>() -> String {
    T::ALL
        .iter()
        .map(|v| format!("\"{}\"", v.label()))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub(super) fn render() -> String {
    let colors = ColorTheme::ALL
        .iter()
        .map(|c| format!("\"{}\"", c.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a professional floral designer.
Analyze this image and suggest a bouquet design based on it.

The flowers MUST be chosen from this EXACT allowed list: {}.
Do NOT suggest generic names like "rose". You MUST choose specific types like "Red Rose" or "Pink Rose".

Return ONLY a JSON object with the following structure:
{{
  "bouquetType": {},
  "flowers": ["exact_flower_name_from_list"],
  "quantity": {},
  "colors": [{}],
  "wrap": {},
  "ribbonType": {},
  "ribbonColor": "string (e.g. Red, Gold)"
}}
"#,
        bouquet_flowers().joined(),
        quoted_options::<BouquetType>(),
        quoted_options::<Quantity>(),
        colors,
        quoted_options::<Wrap>(),
        quoted_options::<RibbonType>(),
    )
}
