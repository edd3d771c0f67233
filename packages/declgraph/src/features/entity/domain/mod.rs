//! Entity tree domain model

mod class;
mod entity;
mod reference;

pub use class::{AccessSpecifier, BaseSpecifier, ClassData, ClassKey};
pub use entity::{Entity, EntityKind};
pub use reference::EntityRef;
