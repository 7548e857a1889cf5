//! Enumerated picker options
//!
//! Each option set is its own vocabulary: the label list is the only
//! gate for accepting a raw string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::vocabulary::Vocabulary;

/// An option set whose values have canonical display labels
pub trait Labeled: Copy + Sized + 'static {
    /// Every value, in picker order
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Parse a trimmed, exact (case-sensitive) label
    fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.iter().copied().find(|v| v.label() == s)
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(Self::ALL.iter().map(|v| v.label()))
    }
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Labeled for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

labeled_enum! {
    /// Arrangement style
    pub enum BouquetType {
        HandTied => "Hand-tied",
        Round => "Round",
        Cascading => "Cascading",
        Box => "Box",
        Basket => "Basket",
        Vase => "Vase",
    }
}

labeled_enum! {
    /// Volume tier
    pub enum Quantity {
        Minimal => "Minimal",
        Standard => "Standard",
        Luxe => "Luxe",
    }
}

labeled_enum! {
    /// Curated color theme
    pub enum ColorTheme {
        ClassicRed => "Classic Red",
        Pastel => "Pastel",
        WhiteAndGreen => "White & Green",
        BrightAndVibrant => "Bright & Vibrant",
    }
}

labeled_enum! {
    /// Wrapping material
    pub enum Wrap {
        KraftPaper => "Kraft Paper",
        PremiumMatte => "Premium Matte",
        Transparent => "Transparent",
        Fabric => "Fabric",
        LuxuryBox => "Luxury Box",
        Unwrapped => "No wrapping",
    }
}

labeled_enum! {
    /// Ribbon material
    pub enum RibbonType {
        Satin => "Satin",
        Jute => "Jute",
        Silk => "Silk",
    }
}

impl Default for BouquetType {
    fn default() -> Self {
        BouquetType::HandTied
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Standard
    }
}

impl Default for RibbonType {
    fn default() -> Self {
        RibbonType::Satin
    }
}

impl ColorTheme {
    /// Swatches shown next to the theme
    pub fn swatches(self) -> &'static [&'static str] {
        match self {
            ColorTheme::ClassicRed => &["#D32F2F", "#B71C1C", "#FFEBEE"],
            ColorTheme::Pastel => &["#F8BBD0", "#E1BEE7", "#B2DFDB"],
            ColorTheme::WhiteAndGreen => &["#FFFFFF", "#F1F8E9", "#A5D6A7"],
            ColorTheme::BrightAndVibrant => &["#FFEB3B", "#FF9800", "#FF4081"],
        }
    }

    pub fn mood(self) -> &'static str {
        match self {
            ColorTheme::ClassicRed => "Romantic & Timeless",
            ColorTheme::Pastel => "Soft & Dreamy",
            ColorTheme::WhiteAndGreen => "Elegant & Fresh",
            ColorTheme::BrightAndVibrant => "Joyful & Energetic",
        }
    }
}

/// Custom palette offered when no curated theme fits
pub const CUSTOM_PALETTE: &[&str] = &[
    "#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#2196F3", "#00BCD4", "#009688",
    "#4CAF50", "#8BC34A", "#FFC107", "#FF9800",
];

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// One entry of the color theme field: a curated theme or a raw hex color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorChoice {
    Theme(ColorTheme),
    /// Upper-case `#RRGGBB`
    Custom(String),
}

impl ColorChoice {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(theme) = ColorTheme::from_label(s) {
            return Some(ColorChoice::Theme(theme));
        }
        if HEX_COLOR_REGEX.is_match(s) {
            return Some(ColorChoice::Custom(s.to_uppercase()));
        }
        None
    }

    pub fn label(&self) -> &str {
        match self {
            ColorChoice::Theme(theme) => theme.label(),
            ColorChoice::Custom(hex) => hex,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ColorChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(BouquetType::from_label("Hand-tied"), Some(BouquetType::HandTied));
        assert_eq!(BouquetType::from_label(" Vase "), Some(BouquetType::Vase));
        assert_eq!(BouquetType::from_label("hand-tied"), None);
        assert_eq!(Wrap::from_label("No wrapping"), Some(Wrap::Unwrapped));
        assert_eq!(Quantity::from_label("Luxe"), Some(Quantity::Luxe));
        assert_eq!(RibbonType::from_label("Velvet"), None);
    }

    #[test]
    fn test_labels_round_trip_through_vocabulary() {
        let vocab = Wrap::vocabulary();
        assert_eq!(vocab.len(), Wrap::ALL.len());
        for wrap in Wrap::ALL {
            assert!(vocab.contains(wrap.label()));
        }
    }

    #[test]
    fn test_color_choice_parsing() {
        assert_eq!(
            ColorChoice::parse("White & Green"),
            Some(ColorChoice::Theme(ColorTheme::WhiteAndGreen))
        );
        assert_eq!(
            ColorChoice::parse("#ff4081"),
            Some(ColorChoice::Custom("#FF4081".to_string()))
        );
        assert_eq!(ColorChoice::parse("#FFF"), None);
        assert_eq!(ColorChoice::parse("Custom"), None);
    }

    #[test]
    fn test_serialize_as_label() {
        let json = serde_json::to_string(&(BouquetType::HandTied, ColorTheme::Pastel)).unwrap();
        assert_eq!(json, r#"["Hand-tied","Pastel"]"#);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BouquetType::default(), BouquetType::HandTied);
        assert_eq!(Quantity::default(), Quantity::Standard);
        assert_eq!(RibbonType::default(), RibbonType::Satin);
    }
}
