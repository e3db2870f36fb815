//! Embedded swatch schemes: four named colors per object family and style.

use serde::Serialize;

use super::detect::{ObjectType, SwatchStyle};

/// Named color with a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub description: &'static str,
}

const fn sw(name: &'static str, hex: &'static str, description: &'static str) -> Swatch {
    Swatch { name, hex, description }
}

/// Schemes indexed by style: `[modern, traditional, rustic]`.
type Scheme = [[Swatch; 4]; 3];

// ============================================================================
// EMBEDDED SCHEMES
// ============================================================================

static SEATING: Scheme = [
    [
        sw("Charcoal Gray", "#36454F", "Sophisticated and versatile"),
        sw("Cream White", "#F5F5DC", "Clean and minimalist"),
        sw("Navy Blue", "#1E3A8A", "Bold and professional"),
        sw("Warm Beige", "#F5E6D3", "Cozy and inviting"),
    ],
    [
        sw("Rich Brown", "#8B4513", "Classic leather look"),
        sw("Deep Burgundy", "#800020", "Elegant and timeless"),
        sw("Forest Green", "#355E3B", "Natural and calming"),
        sw("Antique Gold", "#B8860B", "Luxurious accent"),
    ],
    [
        sw("Weathered Oak", "#A0522D", "Natural wood tone"),
        sw("Sage Green", "#9CAF88", "Earthy and peaceful"),
        sw("Warm Gray", "#8B8680", "Neutral farmhouse"),
        sw("Terracotta", "#E2725B", "Warm earth tone"),
    ],
];

static TABLES: Scheme = [
    [
        sw("Matte Black", "#1C1C1C", "Sleek and contemporary"),
        sw("Pure White", "#FFFFFF", "Clean and bright"),
        sw("Natural Wood", "#D2B48C", "Warm Scandinavian"),
        sw("Steel Blue", "#4682B4", "Industrial chic"),
    ],
    [
        sw("Mahogany", "#C04000", "Rich wood finish"),
        sw("Walnut Brown", "#5D4037", "Classic and refined"),
        sw("Cherry Wood", "#8B0000", "Elegant red tones"),
        sw("Espresso", "#362D1A", "Dark and sophisticated"),
    ],
    [
        sw("Reclaimed Wood", "#8D6E63", "Vintage character"),
        sw("Driftwood Gray", "#A8A49C", "Coastal charm"),
        sw("Barn Red", "#98272F", "Country farmhouse"),
        sw("Pine Green", "#01796F", "Natural forest"),
    ],
];

static LIGHTING: Scheme = [
    [
        sw("Brushed Silver", "#C0C0C0", "Contemporary metal"),
        sw("Matte Black", "#28282B", "Bold statement piece"),
        sw("Copper", "#B87333", "Warm metallic accent"),
        sw("White", "#F8F8FF", "Clean and bright"),
    ],
    [
        sw("Antique Brass", "#CD7F32", "Classic elegance"),
        sw("Oil Rubbed Bronze", "#4A4A4A", "Timeless finish"),
        sw("Pewter", "#96A8A1", "Sophisticated gray"),
        sw("Gold", "#FFD700", "Luxurious accent"),
    ],
    [
        sw("Weathered Iron", "#6D6D6D", "Industrial heritage"),
        sw("Natural Wood", "#8B7355", "Organic warmth"),
        sw("Copper Patina", "#80A695", "Aged character"),
        sw("Antique White", "#FAEBD7", "Vintage charm"),
    ],
];

static STORAGE: Scheme = [
    [
        sw("High Gloss White", "#F8F8FF", "Clean and spacious feel"),
        sw("Graphite", "#41424C", "Modern and sleek"),
        sw("Light Oak", "#DEB887", "Scandinavian style"),
        sw("Sage Green", "#87A96B", "Calming nature tone"),
    ],
    [
        sw("Dark Cherry", "#722F37", "Rich traditional wood"),
        sw("Mahogany Stain", "#C04000", "Classic library look"),
        sw("Antique White", "#FAEBD7", "Elegant vintage"),
        sw("Hunter Green", "#355E3B", "Sophisticated depth"),
    ],
    [
        sw("Barnwood Gray", "#8B8682", "Authentic aged wood"),
        sw("Distressed White", "#FAF0E6", "Shabby chic charm"),
        sw("Cedar", "#A0522D", "Natural wood grain"),
        sw("Vintage Blue", "#4F81BD", "Cottage style"),
    ],
];

static BEDS: Scheme = [
    [
        sw("Soft Gray", "#D3D3D3", "Peaceful and calming"),
        sw("Muted Blue", "#6495ED", "Serene bedroom vibe"),
        sw("Warm Taupe", "#B38B6D", "Cozy neutral"),
        sw("Charcoal", "#36454F", "Bold and modern"),
    ],
    [
        sw("Ivory", "#FFFFF0", "Classic elegance"),
        sw("Rich Walnut", "#5D4037", "Warm wood tone"),
        sw("Burgundy", "#800020", "Luxurious accent"),
        sw("Champagne", "#F7E7CE", "Subtle sophistication"),
    ],
    [
        sw("Natural Pine", "#E3C16F", "Rustic warmth"),
        sw("Stone Gray", "#928E85", "Earthy neutral"),
        sw("Dusty Blue", "#6B8E99", "Country charm"),
        sw("Cream", "#FFF8DC", "Farmhouse fresh"),
    ],
];

static TEXTILES: Scheme = [
    [
        sw("Teal", "#008080", "Bold pop of color"),
        sw("Mustard Yellow", "#FFDB58", "Vibrant accent"),
        sw("Blush Pink", "#FFB6C1", "Soft and modern"),
        sw("Charcoal Gray", "#36454F", "Contemporary neutral"),
    ],
    [
        sw("Persian Blue", "#1C39BB", "Classic richness"),
        sw("Crimson", "#DC143C", "Timeless elegance"),
        sw("Olive Green", "#808000", "Subtle sophistication"),
        sw("Beige", "#F5F5DC", "Neutral foundation"),
    ],
    [
        sw("Burnt Orange", "#CC5500", "Warm earth tone"),
        sw("Moss Green", "#8A9A5B", "Natural outdoor"),
        sw("Clay Red", "#B7410E", "Terracotta warmth"),
        sw("Linen", "#FAF0E6", "Natural fiber look"),
    ],
];

static DECORATION: Scheme = [
    [
        sw("Emerald Green", "#50C878", "Fresh botanical"),
        sw("Rose Gold", "#B76E79", "Trendy metallic"),
        sw("Coral", "#FF7F50", "Vibrant accent"),
        sw("Midnight Blue", "#191970", "Deep statement"),
    ],
    [
        sw("Gold Leaf", "#FFD700", "Luxurious detail"),
        sw("Jade Green", "#00A86B", "Oriental elegance"),
        sw("Sapphire", "#0F52BA", "Precious gem tone"),
        sw("Ivory", "#FFFFF0", "Classic neutral"),
    ],
    [
        sw("Copper", "#B87333", "Warm metallic"),
        sw("Turquoise", "#40E0D0", "Southwest charm"),
        sw("Olive", "#808000", "Natural muted"),
        sw("Sand", "#C2B280", "Desert neutral"),
    ],
];

static KITCHEN: Scheme = [
    [
        sw("Stainless Steel", "#C0C0C0", "Professional chef look"),
        sw("Crisp White", "#FFFFFF", "Clean and bright"),
        sw("Matte Black", "#28282B", "Bold modern statement"),
        sw("Seafoam Blue", "#93E9BE", "Fresh kitchen vibe"),
    ],
    [
        sw("Cream", "#FFFDD0", "Warm classic kitchen"),
        sw("Sage Green", "#9CAF88", "Country kitchen charm"),
        sw("Navy Blue", "#000080", "Timeless elegance"),
        sw("Natural Oak", "#D2B48C", "Warm wood tone"),
    ],
    [
        sw("Copper Pot", "#B87333", "Vintage cookware"),
        sw("Brick Red", "#CB4154", "Rustic backsplash"),
        sw("Weathered Wood", "#8D6E63", "Farmhouse table"),
        sw("Antique White", "#FAEBD7", "Shabby chic"),
    ],
];

/// Fallback for objects that match no family.
pub static GENERAL_SWATCHES: [Swatch; 4] = [
    sw("Classic White", "#FFFFFF", "Timeless and versatile"),
    sw("Warm Gray", "#8B8680", "Neutral and calming"),
    sw("Natural Wood", "#D2B48C", "Organic warmth"),
    sw("Deep Navy", "#1E3A8A", "Sophisticated accent"),
];

/// Swatches for an object family in a style.
pub fn scheme_for(object_type: ObjectType, style: SwatchStyle) -> &'static [Swatch] {
    let scheme = match object_type {
        ObjectType::Seating => &SEATING,
        ObjectType::Tables => &TABLES,
        ObjectType::Lighting => &LIGHTING,
        ObjectType::Storage => &STORAGE,
        ObjectType::Beds => &BEDS,
        ObjectType::Textiles => &TEXTILES,
        ObjectType::Decoration => &DECORATION,
        ObjectType::Kitchen => &KITCHEN,
        ObjectType::General => return &GENERAL_SWATCHES,
    };

    let index = match style {
        SwatchStyle::Modern => 0,
        SwatchStyle::Traditional => 1,
        SwatchStyle::Rustic => 2,
    };
    &scheme[index]
}
