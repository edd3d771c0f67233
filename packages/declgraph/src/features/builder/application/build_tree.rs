//! AST Builder
//!
//! Walks the frontend's cursor tree depth-first, producing one owned entity per
//! cursor in source declaration order, interleaving macro-introduced entities and
//! matched documentation comments at the position their lines imply, and
//! registering named entities into the index as they are built. Reference
//! resolution is deliberately deferred: nothing is resolved mid-walk.

use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::features::builder::infrastructure::{CommentTable, MacroQueue, MergeItem};
use crate::features::entity::{BaseSpecifier, ClassData, Entity, EntityKind, EntityRef};
use crate::features::frontend::{Cursor, CursorKind, CursorTree};
use crate::features::index::{EntityIndex, RegisterOutcome};
use crate::features::reconcile::domain::ReconciliationArtifact;
use crate::shared::models::{Diagnostic, DiagnosticSink, Location, Span, SymbolId};
use crate::shared::utils::ScopeStack;

/// Builds the entity tree for one translation unit
pub struct AstBuilder<'a> {
    index: &'a EntityIndex,
    sink: &'a dyn DiagnosticSink,
}

struct WalkCtx {
    path: String,
    scopes: ScopeStack,
    comments: CommentTable,
    macros: MacroQueue,
}

impl<'a> AstBuilder<'a> {
    pub fn new(index: &'a EntityIndex, sink: &'a dyn DiagnosticSink) -> Self {
        Self { index, sink }
    }

    /// Consume the cursor tree and reconciliation artifact; produce the owned
    /// entity tree and populate the index.
    pub fn build(
        &self,
        path: &str,
        tree: &CursorTree,
        artifact: ReconciliationArtifact,
    ) -> Arc<Entity> {
        for diagnostic in &tree.diagnostics {
            self.sink.log(diagnostic.clone());
        }

        let mut covered_lines = FxHashSet::default();
        collect_entity_lines(&tree.root, &mut covered_lines);

        let mut ctx = WalkCtx {
            path: path.to_string(),
            scopes: ScopeStack::new(),
            comments: CommentTable::new(artifact.comments),
            macros: MacroQueue::new(artifact.macros, artifact.expansions, &covered_lines),
        };

        let children = self.build_children(&tree.root.children, &mut ctx, u32::MAX);

        for record in ctx.comments.unmatched() {
            self.sink.log(
                Diagnostic::debug(format!(
                    "documentation comment at line {} matched no entity",
                    record.line
                ))
                .with_file(path)
                .with_location(Location::new(record.line, 0)),
            );
        }

        let root = Arc::new(
            Entity::new(EntityKind::File, path, tree.root.span)
                .with_qualified_name(path)
                .with_id(SymbolId::new(path))
                .with_children(children),
        );
        self.register(&root, &ctx.path);
        root
    }

    fn build_children(
        &self,
        cursors: &[Cursor],
        ctx: &mut WalkCtx,
        scope_end: u32,
    ) -> Vec<Arc<Entity>> {
        let mut out = Vec::new();
        for cursor in cursors {
            let pending = ctx.macros.take_before(cursor.span.start_line);
            self.emit_macro_items(pending, ctx, &mut out);
            if let Some(entity) = self.build_entity(cursor, ctx) {
                out.push(entity);
            }
        }
        let rest = ctx.macros.take_through(scope_end);
        self.emit_macro_items(rest, ctx, &mut out);
        out
    }

    fn build_entity(&self, cursor: &Cursor, ctx: &mut WalkCtx) -> Option<Arc<Entity>> {
        let start_line = cursor.span.start_line;
        let name = cursor.spelling.clone();

        let entity = match &cursor.kind {
            CursorKind::Namespace => {
                let qualified = ctx.scopes.qualify(&name);
                ctx.scopes.push(&name);
                let children = self.build_children(&cursor.children, ctx, cursor.span.end_line);
                ctx.scopes.pop();
                self.named(cursor, EntityKind::Namespace, qualified)
                    .with_children(children)
            }
            CursorKind::ClassDecl {
                key,
                is_final,
                is_definition,
            } => {
                if !is_definition {
                    tracing::debug!(name = name.as_str(), "skipping forward declaration");
                    return None;
                }
                let bases = cursor
                    .base_specifiers()
                    .filter_map(base_specifier)
                    .collect();
                let qualified = ctx.scopes.qualify(&name);
                ctx.scopes.push(&name);
                let children = self.build_children(&cursor.children, ctx, cursor.span.end_line);
                ctx.scopes.pop();
                self.named(
                    cursor,
                    EntityKind::Class(ClassData::new(*key, *is_final).with_bases(bases)),
                    qualified,
                )
                .with_children(children)
            }
            CursorKind::EnumDecl { scoped } => {
                let qualified = ctx.scopes.qualify(&name);
                self.named(cursor, EntityKind::Enum { scoped: *scoped }, qualified)
            }
            CursorKind::FunctionDecl => {
                let qualified = ctx.scopes.qualify(&name);
                self.named(cursor, EntityKind::Function, qualified)
            }
            CursorKind::VarDecl => {
                let qualified = ctx.scopes.qualify(&name);
                self.named(cursor, EntityKind::Variable, qualified)
            }
            CursorKind::AccessSpecifier { access } => {
                // One marker per textual occurrence, repeats included; the implicit
                // initial level never reaches the cursor tree.
                Entity::new(
                    EntityKind::AccessMarker(*access),
                    access.as_keyword(),
                    cursor.span,
                )
            }
            CursorKind::Other(raw) => {
                tracing::debug!(kind = raw.as_str(), "skipping unsupported cursor kind");
                return None;
            }
            CursorKind::TranslationUnit
            | CursorKind::BaseSpecifier { .. }
            | CursorKind::UsingDirective => return None,
        };

        let entity = match ctx.comments.take_for(start_line) {
            Some(doc) => entity.with_doc(doc),
            None => entity,
        };
        let entity = Arc::new(entity);
        self.register(&entity, &ctx.path);
        Some(entity)
    }

    /// Construct a named entity with its stable identity attached.
    fn named(&self, cursor: &Cursor, kind: EntityKind, qualified: String) -> Entity {
        let id = cursor
            .usr
            .clone()
            .unwrap_or_else(|| SymbolId::new(qualified.clone()));
        Entity::new(kind, cursor.spelling.clone(), cursor.span)
            .with_qualified_name(qualified)
            .with_id(id)
    }

    fn emit_macro_items(&self, items: Vec<MergeItem>, ctx: &mut WalkCtx, out: &mut Vec<Arc<Entity>>) {
        for item in items {
            let entity = match item {
                MergeItem::Definition(record) => Entity::new(
                    EntityKind::MacroDefinition {
                        replacement: record.replacement,
                    },
                    record.name.clone(),
                    Span::line(record.line),
                )
                .with_id(SymbolId::new(record.name)),
                MergeItem::Expansion(site) => Entity::new(
                    EntityKind::MacroExpansion {
                        text: site.name.clone(),
                    },
                    site.name,
                    Span::line(site.line),
                ),
            };
            let entity = match ctx.comments.take_for(entity.span.start_line) {
                Some(doc) => entity.with_doc(doc),
                None => entity,
            };
            let entity = Arc::new(entity);
            self.register(&entity, &ctx.path);
            out.push(entity);
        }
    }

    fn register(&self, entity: &Arc<Entity>, path: &str) {
        if !entity.kind.is_indexable() || entity.name.is_empty() {
            return;
        }
        let Some(id) = entity.id.clone() else { return };
        match self.index.register(id, Arc::clone(entity)) {
            RegisterOutcome::Inserted | RegisterOutcome::AlreadyRegistered => {}
            RegisterOutcome::Duplicate => {
                // Reopened namespaces legitimately share one identity
                if matches!(entity.kind, EntityKind::Namespace) {
                    tracing::debug!(name = entity.qualified_name.as_str(), "namespace reopened");
                } else {
                    self.sink.log(
                        Diagnostic::warning(format!(
                            "duplicate definition of '{}', keeping the first one",
                            entity.qualified_name
                        ))
                        .with_file(path)
                        .with_location(Location::new(entity.span.start_line, 0)),
                    );
                }
            }
        }
    }
}

/// A base-specifier cursor, exactly as reported, becomes a deferred reference.
fn base_specifier(cursor: &Cursor) -> Option<BaseSpecifier> {
    match &cursor.kind {
        CursorKind::BaseSpecifier {
            access,
            is_virtual,
            referenced,
        } => {
            let target = referenced
                .clone()
                .unwrap_or_else(|| SymbolId::new(cursor.spelling.clone()));
            Some(BaseSpecifier::new(
                cursor.spelling.clone(),
                *access,
                *is_virtual,
                EntityRef::new(target, cursor.spelling.clone()),
            ))
        }
        _ => None,
    }
}

fn produces_entity(cursor: &Cursor) -> bool {
    match &cursor.kind {
        CursorKind::Namespace
        | CursorKind::EnumDecl { .. }
        | CursorKind::FunctionDecl
        | CursorKind::VarDecl
        | CursorKind::AccessSpecifier { .. } => true,
        CursorKind::ClassDecl { is_definition, .. } => *is_definition,
        CursorKind::TranslationUnit
        | CursorKind::BaseSpecifier { .. }
        | CursorKind::UsingDirective
        | CursorKind::Other(_) => false,
    }
}

fn collect_entity_lines(cursor: &Cursor, lines: &mut FxHashSet<u32>) {
    if produces_entity(cursor) {
        lines.insert(cursor.span.start_line);
    }
    for child in &cursor.children {
        collect_entity_lines(child, lines);
    }
}
