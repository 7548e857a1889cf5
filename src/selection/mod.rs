//! Bouquet selection state
//!
//! A `Selection` is only ever built from validated input and is replaced
//! wholesale on every edit. Raw wizard input arrives as `SelectionInput`.

mod options;

pub use options::{
    BouquetType, ColorChoice, ColorTheme, Labeled, Quantity, RibbonType, Wrap, CUSTOM_PALETTE,
};

use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::vocabulary::{bouquet_flowers, decoration_flowers, normalize, RawList};

/// Ribbon color used when the wizard leaves it blank
pub const DEFAULT_RIBBON_COLOR: &str = "matching";

/// Optional extras from the "make it special" step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Addons {
    pub card_message: String,
    pub has_chocolates: bool,
    pub has_balloons: bool,
    pub has_vase: bool,
    pub florist_note: String,
}

impl Addons {
    pub fn is_empty(&self) -> bool {
        self.card_message.trim().is_empty()
            && self.florist_note.trim().is_empty()
            && !self.has_chocolates
            && !self.has_balloons
            && !self.has_vase
    }
}

/// A validated bouquet design
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub bouquet_type: BouquetType,
    /// Catalog flower names; repeats encode stem count
    pub flowers: Vec<String>,
    pub quantity: Quantity,
    pub colors: Vec<ColorChoice>,
    pub wrap: Wrap,
    pub ribbon_type: RibbonType,
    pub ribbon_color: String,
    pub addons: Addons,
}

/// Raw selection fields as posted by the wizard
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInput {
    pub bouquet_type: Option<String>,
    pub flowers: Option<RawList>,
    pub quantity: Option<String>,
    pub colors: Option<RawList>,
    pub wrap: Option<String>,
    pub ribbon_type: Option<String>,
    pub ribbon_color: Option<String>,
    #[serde(default)]
    pub addons: Addons,
}

/// Filter raw color entries down to themes and hex colors, keeping order
pub fn normalize_colors(input: &RawList) -> Vec<ColorChoice> {
    input
        .candidates()
        .into_iter()
        .filter_map(ColorChoice::parse)
        .collect()
}

impl SelectionInput {
    /// Validate into a `Selection`.
    ///
    /// Flowers, colors and wrap are required. Unknown bouquet type,
    /// quantity or ribbon type values are dropped in favor of the defaults.
    pub fn validate(&self) -> Result<Selection, DesignError> {
        let (Some(flowers), Some(colors), Some(wrap)) = (&self.flowers, &self.colors, &self.wrap)
        else {
            return Err(DesignError::validation("Missing bouquet configuration"));
        };
        if flowers.is_blank() || colors.is_blank() || wrap.trim().is_empty() {
            return Err(DesignError::validation("Missing bouquet configuration"));
        }

        let vocabulary = bouquet_flowers();
        let flowers = normalize(flowers, &vocabulary, false);
        if flowers.is_empty() {
            return Err(DesignError::validation(format!(
                "Invalid flower selection. Allowed: {}",
                vocabulary.joined()
            )));
        }

        let colors = normalize_colors(colors);
        if colors.is_empty() {
            return Err(DesignError::validation(format!(
                "Invalid color selection. Allowed: {} or a #RRGGBB color",
                ColorTheme::vocabulary().joined()
            )));
        }

        let wrap = Wrap::from_label(wrap).ok_or_else(|| {
            DesignError::validation(format!(
                "Invalid wrap selection. Allowed: {}",
                Wrap::vocabulary().joined()
            ))
        })?;

        let ribbon_color = self
            .ribbon_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_RIBBON_COLOR)
            .to_string();

        Ok(Selection {
            bouquet_type: parse_or_default(self.bouquet_type.as_deref()),
            flowers,
            quantity: parse_or_default(self.quantity.as_deref()),
            colors,
            wrap,
            ribbon_type: parse_or_default(self.ribbon_type.as_deref()),
            ribbon_color,
            addons: self.addons.clone(),
        })
    }
}

fn parse_or_default<T: Labeled + Default>(raw: Option<&str>) -> T {
    raw.and_then(T::from_label).unwrap_or_default()
}

/// A request to decorate an existing photo with flowers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Lower-case decoration flower names
    pub flowers: Vec<String>,
}

impl Decoration {
    /// Validate the `style` field of a decorate request
    pub fn from_style(style: Option<&RawList>) -> Result<Decoration, DesignError> {
        let style = style
            .filter(|s| !s.is_blank())
            .ok_or_else(|| DesignError::validation("Style is required"))?;

        let vocabulary = decoration_flowers();
        let flowers = normalize(style, &vocabulary, true);
        if flowers.is_empty() {
            return Err(DesignError::validation(format!(
                "Invalid flower selection. Allowed: {}",
                vocabulary.joined()
            )));
        }

        Ok(Decoration { flowers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SelectionInput {
        serde_json::from_value(serde_json::json!({
            "bouquetType": "Round",
            "flowers": ["Red Rose", "Red Rose", "Cactus", "White Lily"],
            "quantity": "Luxe",
            "colors": ["Classic Red", "#a5d6a7", "Neon"],
            "wrap": "Kraft Paper",
            "ribbonType": "Silk",
            "ribbonColor": " Gold ",
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_full_selection() {
        let selection = input().validate().unwrap();
        assert_eq!(selection.bouquet_type, BouquetType::Round);
        assert_eq!(selection.flowers, vec!["Red Rose", "Red Rose", "White Lily"]);
        assert_eq!(selection.quantity, Quantity::Luxe);
        assert_eq!(
            selection.colors,
            vec![
                ColorChoice::Theme(ColorTheme::ClassicRed),
                ColorChoice::Custom("#A5D6A7".to_string())
            ]
        );
        assert_eq!(selection.wrap, Wrap::KraftPaper);
        assert_eq!(selection.ribbon_type, RibbonType::Silk);
        assert_eq!(selection.ribbon_color, "Gold");
        assert!(selection.addons.is_empty());
    }

    #[test]
    fn test_validate_applies_defaults() {
        let raw: SelectionInput = serde_json::from_value(serde_json::json!({
            "flowers": "Sunflowers, Daisies",
            "colors": "Pastel",
            "wrap": "Fabric",
            "bouquetType": "Pyramid",
        }))
        .unwrap();

        let selection = raw.validate().unwrap();
        assert_eq!(selection.bouquet_type, BouquetType::HandTied);
        assert_eq!(selection.quantity, Quantity::Standard);
        assert_eq!(selection.ribbon_type, RibbonType::Satin);
        assert_eq!(selection.ribbon_color, DEFAULT_RIBBON_COLOR);
        assert_eq!(selection.flowers, vec!["Sunflowers", "Daisies"]);
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut raw = input();
        raw.wrap = None;
        let err = raw.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing bouquet configuration");

        let mut raw = input();
        raw.flowers = None;
        assert!(matches!(raw.validate(), Err(DesignError::Validation(_))));
    }

    #[test]
    fn test_validate_blank_strings_are_missing() {
        let mut raw = input();
        raw.flowers = Some("".into());
        let err = raw.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing bouquet configuration");

        let mut raw = input();
        raw.colors = Some(" ".into());
        let err = raw.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing bouquet configuration");

        let mut raw = input();
        raw.wrap = Some(String::new());
        let err = raw.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing bouquet configuration");
    }

    #[test]
    fn test_validate_rejects_fully_invalid_lists() {
        let mut raw = input();
        raw.flowers = Some("cactus, fern".into());
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().starts_with("Invalid flower selection. Allowed: Red Rose"));

        let mut raw = input();
        raw.colors = Some("Neon".into());
        assert!(matches!(raw.validate(), Err(DesignError::Validation(_))));

        let mut raw = input();
        raw.wrap = Some("Bubble Wrap".into());
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().starts_with("Invalid wrap selection"));
    }

    #[test]
    fn test_decoration_from_style() {
        let style: RawList = "Rose, MARIGOLD, cactus".into();
        let decoration = Decoration::from_style(Some(&style)).unwrap();
        assert_eq!(decoration.flowers, vec!["rose", "marigold"]);

        let err = Decoration::from_style(None).unwrap_err();
        assert_eq!(err.to_string(), "Style is required");

        let style: RawList = "  ".into();
        let err = Decoration::from_style(Some(&style)).unwrap_err();
        assert_eq!(err.to_string(), "Style is required");

        let style: RawList = "cactus".into();
        let err = Decoration::from_style(Some(&style)).unwrap_err();
        assert!(err.to_string().contains("rose, marigold, jasmine"));
    }

    #[test]
    fn test_addons_deserialize_partial() {
        let addons: Addons =
            serde_json::from_value(serde_json::json!({ "hasBalloons": true })).unwrap();
        assert!(addons.has_balloons);
        assert!(!addons.is_empty());
        assert_eq!(addons.card_message, "");
    }
}
