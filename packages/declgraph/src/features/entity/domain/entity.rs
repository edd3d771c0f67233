//! The persisted declaration tree node
//!
//! One [`Entity`] per declaration or synthetic marker. A parent exclusively owns its
//! children in source declaration order; cross-references (base classes) are
//! [`EntityRef`]s into the index, never ownership edges. Entities are created once
//! during the build pass and immutable afterwards, so `Arc<Entity>` reads are
//! thread-safe without locking.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::shared::models::{Span, SymbolId};

use super::class::{AccessSpecifier, ClassData};

/// Tagged payload of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Root of one translation unit
    File,
    Namespace,
    Class(ClassData),
    Enum { scoped: bool },
    Function,
    Variable,
    /// Synthetic marker for an explicit access-specifier token in a class body
    AccessMarker(AccessSpecifier),
    /// Macro definition recovered from the preprocessed text
    MacroDefinition { replacement: String },
    /// Placeholder for a macro expansion the cursor tree cannot account for
    MacroExpansion { text: String },
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::File => "file",
            EntityKind::Namespace => "namespace",
            EntityKind::Class(_) => "class",
            EntityKind::Enum { .. } => "enum",
            EntityKind::Function => "function",
            EntityKind::Variable => "variable",
            EntityKind::AccessMarker(_) => "access_marker",
            EntityKind::MacroDefinition { .. } => "macro_definition",
            EntityKind::MacroExpansion { .. } => "macro_expansion",
        }
    }

    /// Synthetic or purely structural kinds are never registered in the index
    pub fn is_indexable(&self) -> bool {
        !matches!(
            self,
            EntityKind::AccessMarker(_) | EntityKind::MacroExpansion { .. }
        )
    }
}

/// One node of the declaration tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity; `None` for synthetic entities
    pub id: Option<SymbolId>,
    /// Unqualified name ("base"); access markers carry the specifier keyword
    pub name: String,
    /// Fully qualified name ("ns::base"); empty for synthetic entities
    pub qualified_name: String,
    pub span: Span,
    /// Attached documentation, if a comment matched this entity
    pub doc: Option<String>,
    pub kind: EntityKind,
    /// Children in source declaration order, synthetic entities included
    pub children: Vec<Arc<Entity>>,
}

impl Entity {
    pub fn new(kind: EntityKind, name: impl Into<String>, span: Span) -> Self {
        let name = name.into();
        Self {
            id: None,
            qualified_name: name.clone(),
            name,
            span,
            doc: None,
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: SymbolId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Arc<Entity>>) -> Self {
        self.children = children;
        self
    }

    /// Typed down-cast to the class payload
    pub fn as_class(&self) -> Option<&ClassData> {
        match &self.kind {
            EntityKind::Class(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_access_marker(&self) -> Option<AccessSpecifier> {
        match self.kind {
            EntityKind::AccessMarker(access) => Some(access),
            _ => None,
        }
    }

    pub fn as_macro_definition(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::MacroDefinition { replacement } => Some(replacement),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, EntityKind::Class(_))
    }

    /// Iterate direct children
    pub fn children(&self) -> impl Iterator<Item = &Arc<Entity>> {
        self.children.iter()
    }

    /// Find the first direct child with the given name
    pub fn find_child(&self, name: &str) -> Option<&Arc<Entity>> {
        self.children.iter().find(|c| c.name == name)
    }
}
