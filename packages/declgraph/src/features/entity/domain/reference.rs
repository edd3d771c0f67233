//! Deferred, identity-based entity references
//!
//! A reference is a value, never an ownership edge. It holds the stable symbol id
//! plus the name as written at the reference site, and is resolved on demand against
//! an explicitly supplied [`EntityIndex`]. Resolution may legitimately fail when the
//! defining translation unit was never parsed into the index.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::features::index::EntityIndex;
use crate::shared::models::SymbolId;

use super::entity::Entity;

/// Name/identity-based pointer to an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    target: SymbolId,
    display_name: String,
}

impl EntityRef {
    pub fn new(target: SymbolId, display_name: impl Into<String>) -> Self {
        Self {
            target,
            display_name: display_name.into(),
        }
    }

    /// The stable identifier this reference points at
    pub fn target(&self) -> &SymbolId {
        &self.target
    }

    /// The name as written at the reference site
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Resolve against an index. Pure lookup: same index, same result.
    pub fn get(&self, index: &EntityIndex) -> Option<Arc<Entity>> {
        index.resolve(&self.target)
    }
}
