/*
 * declgraph - stable, queryable declaration trees over a cursor-based frontend
 *
 * Feature-first layout:
 * - shared/    : common models (Span, SymbolId, Diagnostic) and utilities
 * - features/  : vertical slices (frontend seam -> reconcile -> builder -> entity/index -> query)
 * - pipeline/  : per-session orchestration, rayon-parallel across units
 *
 * The compiler frontend itself is an external collaborator behind the
 * FrontendAdapter port; this crate reconciles its transient cursor trees with
 * the preprocessed source text and persists the result as an owned entity tree
 * with deferred, index-resolved cross-references.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Error types
pub mod errors;

// Re-exports for the public API
pub use errors::{DeclgraphError, Result};
pub use features::builder::AstBuilder;
pub use features::entity::{
    AccessSpecifier, BaseSpecifier, ClassData, ClassKey, Entity, EntityKind, EntityRef,
};
pub use features::frontend::{
    CompileConfig, Cursor, CursorKind, CursorTree, FrontendAdapter, LanguageStandard,
    MacroExpansionSite, PreprocessedSource,
};
pub use features::index::{EntityIndex, RegisterOutcome};
pub use features::query::{classes, collect_by, visit};
pub use features::reconcile::{
    CommentStyle, DocCommentRecord, MacroRecord, ReconciliationArtifact, Reconciler,
};
pub use pipeline::{ParseSession, ParsedUnit};
pub use shared::models::{
    CollectingSink, Diagnostic, DiagnosticSink, Location, Severity, Span, SymbolId, TracingSink,
};
