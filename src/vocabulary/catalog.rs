//! Canonical flower catalogs

use serde::Serialize;

use super::Vocabulary;

/// A tab of the flower picker
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlowerCategory {
    pub name: &'static str,
    pub flowers: &'static [&'static str],
}

/// Bouquet flowers, grouped the way the picker shows them
pub const FLOWER_CATEGORIES: &[FlowerCategory] = &[
    FlowerCategory {
        name: "Roses",
        flowers: &["Red Rose", "White Rose", "Pink Rose", "Garden Rose"],
    },
    FlowerCategory {
        name: "Lilies",
        flowers: &["White Lily", "Pink Lily", "Oriental Lily"],
    },
    FlowerCategory {
        name: "Tulips",
        flowers: &["Red Tulip", "Yellow Tulip", "Pink Tulip"],
    },
    FlowerCategory {
        name: "Orchids",
        flowers: &["White Orchid", "Purple Orchid"],
    },
    FlowerCategory {
        name: "Peonies",
        flowers: &["Pink Peony", "White Peony", "Coral Peony"],
    },
    FlowerCategory {
        name: "Seasonal",
        flowers: &["Sunflowers", "Daisies", "Hydrangeas", "Carnations"],
    },
];

/// Flowers allowed on a decorated photo (matched case-insensitively)
pub const DECORATION_FLOWERS: &[&str] = &[
    "rose",
    "marigold",
    "jasmine",
    "orchid",
    "tulip",
    "sunflower",
    "lily",
];

/// Ribbon colors offered by the picker. Ribbon color itself is free text.
pub const RIBBON_COLORS: &[&str] = &["Red", "Pink", "Gold", "Black", "White", "Sage"];

/// All bouquet flowers in catalog order (case-sensitive)
pub fn bouquet_flowers() -> Vocabulary {
    Vocabulary::new(
        FLOWER_CATEGORIES
            .iter()
            .flat_map(|c| c.flowers.iter().copied()),
    )
}

/// Decoration flowers, already lower-case
pub fn decoration_flowers() -> Vocabulary {
    Vocabulary::new(DECORATION_FLOWERS.iter().copied()).lowered()
}
