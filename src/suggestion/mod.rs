//! Suggestion decoding
//!
//! Vision models answer with a JSON object, often wrapped in a markdown
//! code fence. The decoder strips the fence, parses the object and
//! re-validates every vocabulary field. Invalid optional fields are
//! dropped; an empty flower list is a schema mismatch.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::selection::{
    normalize_colors, BouquetType, ColorChoice, Labeled, Quantity, RibbonType, Wrap,
};
use crate::vocabulary::{bouquet_flowers, normalize, RawList};

/// Structured design guess derived from a reference photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bouquet_type: Option<BouquetType>,
    pub flowers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    pub colors: Vec<ColorChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<Wrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ribbon_type: Option<RibbonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ribbon_color: Option<String>,
}

/// Shape of the model's JSON before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestion {
    bouquet_type: Option<String>,
    flowers: Option<RawList>,
    quantity: Option<String>,
    colors: Option<RawList>,
    wrap: Option<String>,
    ribbon_type: Option<String>,
    ribbon_color: Option<String>,
}

/// First fenced block, with an optional language tag
static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```").unwrap());

/// Remove markdown code-fence wrapping, if any
pub fn strip_code_fences(raw: &str) -> &str {
    match FENCE_REGEX.captures(raw).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => raw.trim(),
    }
}

/// Decode a model response into a validated suggestion
pub fn decode_suggestion(raw_text: &str) -> Result<Suggestion, DesignError> {
    let cleaned = strip_code_fences(raw_text);

    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|e| DesignError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(DesignError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    let raw: RawSuggestion = serde_json::from_value(value)
        .map_err(|e| DesignError::SchemaMismatch(e.to_string()))?;

    let flowers = raw
        .flowers
        .as_ref()
        .ok_or_else(|| DesignError::SchemaMismatch("missing field `flowers`".to_string()))?;
    let flowers = normalize(flowers, &bouquet_flowers(), false);
    if flowers.is_empty() {
        return Err(DesignError::SchemaMismatch(
            "no recognized flowers in suggestion".to_string(),
        ));
    }

    Ok(Suggestion {
        bouquet_type: raw.bouquet_type.as_deref().and_then(BouquetType::from_label),
        flowers,
        quantity: raw.quantity.as_deref().and_then(Quantity::from_label),
        colors: raw.colors.as_ref().map(normalize_colors).unwrap_or_default(),
        wrap: raw.wrap.as_deref().and_then(Wrap::from_label),
        ribbon_type: raw.ribbon_type.as_deref().and_then(RibbonType::from_label),
        ribbon_color: raw
            .ribbon_color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ColorTheme;

    #[test]
    fn test_decode_fenced_json() {
        let s = decode_suggestion("```json\n{\"flowers\":[\"Red Rose\"]}\n```").unwrap();
        assert_eq!(s.flowers, vec!["Red Rose"]);
        assert_eq!(s.bouquet_type, None);
        assert!(s.colors.is_empty());
    }

    #[test]
    fn test_decode_plain_and_noisy() {
        let s = decode_suggestion("  {\"flowers\": \"Sunflowers, Daisies\"}  ").unwrap();
        assert_eq!(s.flowers, vec!["Sunflowers", "Daisies"]);

        let noisy = "Here is my suggestion:\n```\n{\"flowers\":[\"Pink Peony\"]}\n```\nEnjoy!";
        let s = decode_suggestion(noisy).unwrap();
        assert_eq!(s.flowers, vec!["Pink Peony"]);
    }

    #[test]
    fn test_decode_full_record_drops_invalid_fields() {
        let raw = r##"```json
{
  "bouquetType": "Cascading",
  "flowers": ["White Orchid", "rose", "White Orchid"],
  "quantity": "Huge",
  "colors": ["Pastel", "Custom", "#9c27b0"],
  "wrap": "Luxury Box",
  "ribbonType": "Velvet",
  "ribbonColor": "Gold"
}
```"##;
        let s = decode_suggestion(raw).unwrap();
        assert_eq!(s.bouquet_type, Some(BouquetType::Cascading));
        assert_eq!(s.flowers, vec!["White Orchid", "White Orchid"]);
        assert_eq!(s.quantity, None);
        assert_eq!(
            s.colors,
            vec![
                ColorChoice::Theme(ColorTheme::Pastel),
                ColorChoice::Custom("#9C27B0".to_string())
            ]
        );
        assert_eq!(s.wrap, Some(Wrap::LuxuryBox));
        assert_eq!(s.ribbon_type, None);
        assert_eq!(s.ribbon_color.as_deref(), Some("Gold"));
    }

    #[test]
    fn test_decode_not_json() {
        let err = decode_suggestion("not json").unwrap_err();
        assert!(matches!(err, DesignError::MalformedResponse(_)));

        let err = decode_suggestion("[1, 2]").unwrap_err();
        assert!(matches!(err, DesignError::MalformedResponse(_)));
    }

    #[test]
    fn test_decode_schema_mismatch() {
        let err = decode_suggestion(r#"{"wrap": "Fabric"}"#).unwrap_err();
        assert!(matches!(err, DesignError::SchemaMismatch(_)));

        let err = decode_suggestion(r#"{"flowers": ["rose", "daisy"]}"#).unwrap_err();
        assert!(matches!(err, DesignError::SchemaMismatch(_)));

        let err = decode_suggestion(r#"{"flowers": 42}"#).unwrap_err();
        assert!(matches!(err, DesignError::SchemaMismatch(_)));
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let s = decode_suggestion(r#"{"flowers":["Red Tulip"],"ribbonType":"Jute"}"#).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["flowers"][0], "Red Tulip");
        assert_eq!(json["ribbonType"], "Jute");
        assert!(json.get("wrap").is_none());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}```"), "{}");
        assert_eq!(strip_code_fences(" {} "), "{}");
    }
}
