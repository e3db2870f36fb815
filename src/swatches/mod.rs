//! Object Swatches
//!
//! Named color swatches for a single placed object. The object family is
//! detected from its name and category, the style from its name; each pair
//! maps to a fixed scheme of four swatches. Unrecognized objects get the
//! general scheme. Deterministic.

pub mod detect;
pub mod schemes;

use serde::Serialize;

pub use detect::{detect_object_type, detect_swatch_style, ObjectType, SwatchStyle};
pub use schemes::{scheme_for, Swatch, GENERAL_SWATCHES};

/// Swatches chosen for one object, with what was detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchSuggestion {
    pub object_type: ObjectType,
    pub style: SwatchStyle,
    pub swatches: Vec<Swatch>,
}

/// Suggest swatches for an object by name and catalog category.
pub fn suggest_object_swatches(object_name: &str, object_category: &str) -> SwatchSuggestion {
    let object_type = detect_object_type(object_name, object_category);
    let style = detect_swatch_style(object_name);
    if object_type == ObjectType::General {
        tracing::debug!("No object type matched for {:?}, using general swatches", object_name);
    }

    SwatchSuggestion {
        object_type,
        style,
        swatches: scheme_for(object_type, style).to_vec(),
    }
}
