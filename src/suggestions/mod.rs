pub mod color_advisor;
pub mod engine;
pub mod layout;
pub mod types;

pub use types::{ColorAdvice, ColorRole, ColorSuggestion, FurnitureSuggestion, SuggestionBundle};

pub use color_advisor::advise_color;
pub use engine::RoomSuggester;
pub use layout::generate_layout_suggestions;
