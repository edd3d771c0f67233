//! Frontend-neutral cursor tree
//!
//! The frontend's raw representation of a parsed translation unit: a transient tree
//! of (kind, name, symbol id, location, children). Child order equals source
//! declaration order. The cursor tree reports semantic facts; textual layout (macro
//! text, comments) is recovered separately by reconciliation.

use serde::{Deserialize, Serialize};

use crate::features::entity::{AccessSpecifier, ClassKey};
use crate::shared::models::{Diagnostic, Span, SymbolId};

/// Cursor kind, with per-kind semantic payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CursorKind {
    TranslationUnit,
    Namespace,
    ClassDecl {
        key: ClassKey,
        is_final: bool,
        /// Forward declarations report `false` and produce no entity
        is_definition: bool,
    },
    /// One entry of a class's base list, exactly as reported
    BaseSpecifier {
        access: AccessSpecifier,
        is_virtual: bool,
        /// Stable id of the referenced base type, when the frontend could name it
        referenced: Option<SymbolId>,
    },
    /// One explicit access-specifier token; the frontend reports every textual
    /// occurrence, repeats included
    AccessSpecifier { access: AccessSpecifier },
    EnumDecl { scoped: bool },
    FunctionDecl,
    VarDecl,
    UsingDirective,
    /// Anything this crate does not model; skipped by the builder
    Other(String),
}

impl CursorKind {
    pub fn name(&self) -> &str {
        match self {
            CursorKind::TranslationUnit => "translation_unit",
            CursorKind::Namespace => "namespace",
            CursorKind::ClassDecl { .. } => "class_decl",
            CursorKind::BaseSpecifier { .. } => "base_specifier",
            CursorKind::AccessSpecifier { .. } => "access_specifier",
            CursorKind::EnumDecl { .. } => "enum_decl",
            CursorKind::FunctionDecl => "function_decl",
            CursorKind::VarDecl => "var_decl",
            CursorKind::UsingDirective => "using_directive",
            CursorKind::Other(raw) => raw,
        }
    }
}

/// One node of the frontend's transient tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub kind: CursorKind,
    /// Name as spelled at the declaration site
    pub spelling: String,
    /// Stable symbol id for named declarations
    pub usr: Option<SymbolId>,
    pub span: Span,
    pub children: Vec<Cursor>,
}

impl Cursor {
    pub fn new(kind: CursorKind, spelling: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            usr: None,
            span,
            children: Vec::new(),
        }
    }

    pub fn with_usr(mut self, usr: SymbolId) -> Self {
        self.usr = Some(usr);
        self
    }

    pub fn with_children(mut self, children: Vec<Cursor>) -> Self {
        self.children = children;
        self
    }

    /// Base-specifier children of a class cursor, in source order
    pub fn base_specifiers(&self) -> impl Iterator<Item = &Cursor> {
        self.children
            .iter()
            .filter(|c| matches!(c.kind, CursorKind::BaseSpecifier { .. }))
    }
}

/// Result of a full frontend parse
#[derive(Debug, Clone)]
pub struct CursorTree {
    pub root: Cursor,
    pub diagnostics: Vec<Diagnostic>,
}

impl CursorTree {
    pub fn new(root: Cursor) -> Self {
        Self {
            root,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
