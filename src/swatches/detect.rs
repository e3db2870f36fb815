//! Object type and swatch style detection by keyword.

use serde::Serialize;

/// Object family used to pick a swatch scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Seating,
    Tables,
    Lighting,
    Storage,
    Beds,
    Textiles,
    Decoration,
    Kitchen,
    General,
}

/// Style vocabulary of the swatch schemes; wider than the room palette styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchStyle {
    Modern,
    Traditional,
    Rustic,
}

// Checked in order; first family with a keyword hit wins.
static OBJECT_KEYWORDS: &[(ObjectType, &[&str])] = &[
    (ObjectType::Seating, &["sofa", "couch", "chair", "bench", "seat", "stool", "ottoman", "recliner"]),
    (ObjectType::Tables, &["table", "desk", "counter", "nightstand"]),
    (ObjectType::Lighting, &["lamp", "light", "chandelier", "sconce", "fixture", "pendant", "lantern"]),
    (
        ObjectType::Storage,
        &["shelf", "shelve", "cabinet", "dresser", "wardrobe", "storage", "closet", "armoire", "bookcase", "cupboard"],
    ),
    (ObjectType::Beds, &["bed", "mattress", "headboard", "bedroom"]),
    (ObjectType::Textiles, &["rug", "carpet", "curtain", "drape", "pillow", "cushion", "blanket", "textile"]),
    (
        ObjectType::Decoration,
        &["plant", "vase", "picture", "frame", "art", "sculpture", "mirror", "decor", "ornament"],
    ),
    (ObjectType::Kitchen, &["kitchen", "appliance", "stove", "oven", "fridge", "sink"]),
];

static STYLE_KEYWORDS: &[(SwatchStyle, &[&str])] = &[
    (SwatchStyle::Modern, &["modern", "contemporary", "minimalist", "sleek", "industrial"]),
    (SwatchStyle::Traditional, &["traditional", "classic", "vintage", "antique", "elegant"]),
    (SwatchStyle::Rustic, &["rustic", "farmhouse", "country", "weathered", "reclaimed"]),
];

/// Detect the object family from its name and category, combined.
pub fn detect_object_type(object_name: &str, object_category: &str) -> ObjectType {
    let text = format!("{} {}", object_name, object_category).to_lowercase();
    OBJECT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(object_type, _)| *object_type)
        .unwrap_or(ObjectType::General)
}

/// Detect the swatch style from the object name; defaults to modern.
pub fn detect_swatch_style(object_name: &str) -> SwatchStyle {
    let name = object_name.to_lowercase();
    STYLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(style, _)| *style)
        .unwrap_or(SwatchStyle::Modern)
}
