//! Entity Tree / Reference Model
//!
//! Ownership is strictly a tree; cross-references are identity lookups into the
//! [`EntityIndex`](crate::features::index::EntityIndex).

pub mod domain;

pub use domain::{AccessSpecifier, BaseSpecifier, ClassData, ClassKey, Entity, EntityKind, EntityRef};
