//! Reconciliation use case
//!
//! Runs the frontend in preprocessing-only mode and turns its output into the
//! artifact the builder merges against the cursor tree.

use crate::errors::Result;
use crate::features::frontend::{CompileConfig, FrontendAdapter};
use crate::features::reconcile::domain::ReconciliationArtifact;
use crate::features::reconcile::infrastructure::scan_preprocessed;
use crate::shared::models::DiagnosticSink;

/// Source Reconciliation Unit entry point
pub struct Reconciler;

impl Reconciler {
    /// Produce the reconciliation artifact for one translation unit.
    ///
    /// Frontend diagnostics are forwarded to the sink; only a hard preprocess
    /// failure (the frontend could not tokenize at all) propagates as an error,
    /// and even that is scoped to this unit.
    pub fn run(
        frontend: &dyn FrontendAdapter,
        config: &CompileConfig,
        path: &str,
        sink: &dyn DiagnosticSink,
    ) -> Result<ReconciliationArtifact> {
        let preprocessed = frontend.preprocess(config, path)?;
        for diagnostic in preprocessed.diagnostics {
            sink.log(diagnostic);
        }

        let scanned = scan_preprocessed(&preprocessed.text, path);
        tracing::debug!(
            path,
            macros = scanned.macros.len(),
            comments = scanned.comments.len(),
            expansions = preprocessed.expansions.len(),
            "reconciled preprocessed source"
        );

        Ok(ReconciliationArtifact {
            expanded_text: preprocessed.text,
            macros: scanned.macros,
            expansions: preprocessed.expansions,
            comments: scanned.comments,
        })
    }
}
