//! Picker vocabularies
//!
//! GET /api/catalog - every option the design wizard may submit

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::selection::{
    BouquetType, ColorTheme, Labeled, Quantity, RibbonType, Wrap, CUSTOM_PALETTE,
    DEFAULT_RIBBON_COLOR,
};
use crate::vocabulary::{FlowerCategory, DECORATION_FLOWERS, FLOWER_CATEGORIES, RIBBON_COLORS};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    flower_categories: &'static [FlowerCategory],
    decoration_flowers: &'static [&'static str],
    bouquet_types: &'static [BouquetType],
    quantities: &'static [Quantity],
    color_themes: Vec<ThemeEntry>,
    custom_palette: &'static [&'static str],
    wraps: &'static [Wrap],
    ribbon_types: &'static [RibbonType],
    ribbon_colors: &'static [&'static str],
    default_ribbon_color: &'static str,
}

#[derive(Debug, Serialize)]
struct ThemeEntry {
    name: ColorTheme,
    swatches: &'static [&'static str],
    mood: &'static str,
}

impl Catalog {
    pub fn build() -> Self {
        Self {
            flower_categories: FLOWER_CATEGORIES,
            decoration_flowers: DECORATION_FLOWERS,
            bouquet_types: BouquetType::ALL,
            quantities: Quantity::ALL,
            color_themes: ColorTheme::ALL
                .iter()
                .map(|&theme| ThemeEntry {
                    name: theme,
                    swatches: theme.swatches(),
                    mood: theme.mood(),
                })
                .collect(),
            custom_palette: CUSTOM_PALETTE,
            wraps: Wrap::ALL,
            ribbon_types: RibbonType::ALL,
            ribbon_colors: RIBBON_COLORS,
            default_ribbon_color: DEFAULT_RIBBON_COLOR,
        }
    }
}

pub async fn get_catalog() -> impl IntoResponse {
    Json(Catalog::build())
}
