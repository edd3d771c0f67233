//! Entity Index
//!
//! Per-session registry mapping stable symbol identifiers to entities. Populated
//! incrementally while trees are built; resolution is a post-pass or on-demand
//! lookup, never interleaved with construction. `register` is mutually exclusive
//! across threads, `resolve` is a lock-free concurrent read.

use dashmap::DashMap;
use std::sync::Arc;

use crate::features::entity::Entity;
use crate::shared::models::SymbolId;

/// Outcome of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Identifier was unbound; entity is now registered
    Inserted,
    /// Identifier was already bound to this exact entity (e.g. a reopened namespace)
    AlreadyRegistered,
    /// Identifier was bound to a different entity; first registration wins
    Duplicate,
}

/// Concurrent symbol-identity registry
#[derive(Debug, Default)]
pub struct EntityIndex {
    entities: DashMap<SymbolId, Arc<Entity>>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self {
            entities: DashMap::new(),
        }
    }

    /// Register an entity under its stable identifier.
    ///
    /// A duplicate (same id, different entity) keeps the first registration and
    /// reports [`RegisterOutcome::Duplicate`]; it is never fatal.
    pub fn register(&self, id: SymbolId, entity: Arc<Entity>) -> RegisterOutcome {
        match self.entities.entry(id) {
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(entity);
                RegisterOutcome::Inserted
            }
            dashmap::mapref::entry::Entry::Occupied(existing) => {
                if Arc::ptr_eq(existing.get(), &entity) {
                    RegisterOutcome::AlreadyRegistered
                } else {
                    RegisterOutcome::Duplicate
                }
            }
        }
    }

    /// Pure lookup by identifier equality. Never mutates, never blocks.
    pub fn resolve(&self, id: &SymbolId) -> Option<Arc<Entity>> {
        self.entities.get(id).map(|e| Arc::clone(&e))
    }

    pub fn contains(&self, id: &SymbolId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate all registered identifiers (order unspecified)
    pub fn ids(&self) -> Vec<SymbolId> {
        self.entities.iter().map(|e| e.key().clone()).collect()
    }
}
