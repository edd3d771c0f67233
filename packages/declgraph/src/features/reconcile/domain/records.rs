//! Reconciliation records
//!
//! Intermediate artifacts recovered from the preprocessed text: macro definitions
//! the cursor tree elides, expansion sites, and documentation comments tagged by
//! line and style. Consumed by the builder's merge pass; not persisted afterwards.

use serde::{Deserialize, Serialize};

use crate::features::frontend::MacroExpansionSite;

/// How a documentation comment was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentStyle {
    /// Multi-line marker (`/** .. */`, `/*! .. */`)
    Block,
    /// Single-line marker on its own line (`///`, `//!`)
    Line,
    /// Single-line marker following code on the same line
    TrailingLine,
}

/// One documentation comment, markers stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocCommentRecord {
    pub text: String,
    /// Last line the comment occupies
    pub line: u32,
    pub style: CommentStyle,
}

impl DocCommentRecord {
    pub fn new(text: impl Into<String>, line: u32, style: CommentStyle) -> Self {
        Self {
            text: text.into(),
            line,
            style,
        }
    }

    /// Does this comment document an entity whose declaration starts at `line`?
    ///
    /// Leading styles match the immediately following line; any blank line or
    /// intervening entity breaks adjacency. Trailing comments share the line.
    pub fn matches(&self, entity_start_line: u32) -> bool {
        match self.style {
            CommentStyle::Block | CommentStyle::Line => self.line + 1 == entity_start_line,
            CommentStyle::TrailingLine => self.line == entity_start_line,
        }
    }
}

/// One macro definition kept in the preprocessed output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRecord {
    pub name: String,
    pub replacement: String,
    pub line: u32,
}

impl MacroRecord {
    pub fn new(name: impl Into<String>, replacement: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            replacement: replacement.into(),
            line,
        }
    }
}

/// Everything the builder needs beside the cursor tree
#[derive(Debug, Clone, Default)]
pub struct ReconciliationArtifact {
    /// Fully macro-expanded source text
    pub expanded_text: String,
    /// Macro definitions, in source order
    pub macros: Vec<MacroRecord>,
    /// Expansion sites, in source order
    pub expansions: Vec<MacroExpansionSite>,
    /// Documentation comments, in source order
    pub comments: Vec<DocCommentRecord>,
}
