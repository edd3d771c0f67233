//! Frontend port
//!
//! Contract for the external compiler frontend. Implementations invoke a real
//! compiler (or emulate one in tests); this crate only consumes the results.

use crate::errors::Result;
use crate::features::frontend::domain::{CompileConfig, CursorTree};
use crate::shared::models::Diagnostic;

/// One macro expansion performed by the preprocessor, keyed by originating line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroExpansionSite {
    pub name: String,
    pub line: u32,
}

/// Output of a preprocessing-only run.
///
/// `text` is the fully expanded source in preprocessed form: `# <line> "<file>"`
/// markers, comments preserved, `#define` directives kept in place. Expansion sites
/// ride along because the expanded text alone cannot recover them.
#[derive(Debug, Clone)]
pub struct PreprocessedSource {
    pub text: String,
    pub expansions: Vec<MacroExpansionSite>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PreprocessedSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expansions: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_expansions(mut self, expansions: Vec<MacroExpansionSite>) -> Self {
        self.expansions = expansions;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Abstraction over the compiler frontend
pub trait FrontendAdapter: Send + Sync {
    /// Run strictly in preprocessing mode: no semantic analysis, tolerant of source
    /// that is only lexically valid. Fails hard only when tokenization itself fails.
    fn preprocess(&self, config: &CompileConfig, path: &str) -> Result<PreprocessedSource>;

    /// Full parse producing the transient cursor tree.
    fn parse(&self, config: &CompileConfig, path: &str) -> Result<CursorTree>;
}
