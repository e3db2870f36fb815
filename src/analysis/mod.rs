//! Room analysis: furniture classification and the per-room [`Analysis`].

pub mod analyzer;
pub mod classify;

pub use analyzer::{analyze_room, Analysis, PlacedItem};
pub use classify::classify_furniture;
