//! Entity Index & reference resolution

mod entity_index;

pub use entity_index::{EntityIndex, RegisterOutcome};
