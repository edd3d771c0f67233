//! Per-unit pipeline result

use std::sync::Arc;

use crate::features::entity::Entity;
use crate::shared::models::Diagnostic;

/// Result of building one translation unit.
///
/// Ownership of the subtree transfers to the caller once the build completes;
/// nothing mutates an entity afterwards, so sharing reads across threads is safe.
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    pub path: String,
    pub root: Arc<Entity>,
    /// Diagnostics gathered while processing this unit
    pub diagnostics: Vec<Diagnostic>,
}
