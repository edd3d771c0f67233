//! Class-specific entity attributes

use serde::{Deserialize, Serialize};

use super::reference::EntityRef;

/// Which keyword introduced the class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKey {
    Struct,
    Class,
    Union,
}

impl ClassKey {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            ClassKey::Struct => "struct",
            ClassKey::Class => "class",
            ClassKey::Union => "union",
        }
    }
}

/// Member access level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessSpecifier {
    Public,
    Protected,
    Private,
}

impl AccessSpecifier {
    /// Implicit access level at the start of a class body. Never materialized as a
    /// marker entity; only explicit specifier tokens produce markers.
    pub fn default_for(key: ClassKey) -> Self {
        match key {
            ClassKey::Struct | ClassKey::Union => AccessSpecifier::Public,
            ClassKey::Class => AccessSpecifier::Private,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            AccessSpecifier::Public => "public",
            AccessSpecifier::Protected => "protected",
            AccessSpecifier::Private => "private",
        }
    }
}

/// One entry of a class's base list, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSpecifier {
    /// The base type's written name, possibly unqualified
    pub name: String,
    pub access: AccessSpecifier,
    pub is_virtual: bool,
    /// Deferred reference to the base class entity
    pub entity: EntityRef,
}

impl BaseSpecifier {
    pub fn new(
        name: impl Into<String>,
        access: AccessSpecifier,
        is_virtual: bool,
        entity: EntityRef,
    ) -> Self {
        Self {
            name: name.into(),
            access,
            is_virtual,
            entity,
        }
    }
}

/// Payload of a class entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassData {
    pub key: ClassKey,
    pub is_final: bool,
    pub bases: Vec<BaseSpecifier>,
}

impl ClassData {
    pub fn new(key: ClassKey, is_final: bool) -> Self {
        Self {
            key,
            is_final,
            bases: Vec::new(),
        }
    }

    pub fn with_bases(mut self, bases: Vec<BaseSpecifier>) -> Self {
        self.bases = bases;
        self
    }
}
