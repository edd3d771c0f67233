//! Parse session orchestration
//!
//! One session = one shared Entity Index plus a diagnostic sink, threaded
//! explicitly through every unit build. The per-unit pipeline (frontend call,
//! reconciliation pass, builder walk) is synchronous with no internal suspension
//! points; independent units may run on rayon workers, all registering into the
//! session's index. A failing unit never aborts its siblings.

use rayon::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::Result;
use crate::features::builder::AstBuilder;
use crate::features::frontend::{CompileConfig, FrontendAdapter};
use crate::features::index::EntityIndex;
use crate::features::reconcile::Reconciler;
use crate::shared::models::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};

use super::result::ParsedUnit;

/// Forwards to the session sink while keeping a per-unit copy
struct FanoutSink<'a> {
    session: &'a dyn DiagnosticSink,
    unit: &'a CollectingSink,
}

impl DiagnosticSink for FanoutSink<'_> {
    fn log(&self, diagnostic: Diagnostic) {
        self.unit.log(diagnostic.clone());
        self.session.log(diagnostic);
    }
}

/// One logical parse session over any number of translation units
pub struct ParseSession<F: FrontendAdapter> {
    frontend: F,
    config: CompileConfig,
    index: Arc<EntityIndex>,
    sink: Arc<dyn DiagnosticSink>,
    id: Uuid,
}

impl<F: FrontendAdapter> ParseSession<F> {
    pub fn new(frontend: F, config: CompileConfig) -> Self {
        Self {
            frontend,
            config,
            index: Arc::new(EntityIndex::new()),
            sink: Arc::new(TracingSink),
            id: Uuid::new_v4(),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The session's index handle. Resolve references against it only after the
    /// units you care about have been parsed.
    pub fn index(&self) -> &Arc<EntityIndex> {
        &self.index
    }

    /// Build one translation unit: frontend, reconciliation, tree walk.
    pub fn parse_unit(&self, path: &str) -> Result<ParsedUnit> {
        let span = tracing::info_span!("parse_unit", session = %self.id, path);
        let _guard = span.enter();

        let unit_sink = CollectingSink::new();
        let fanout = FanoutSink {
            session: self.sink.as_ref(),
            unit: &unit_sink,
        };

        let artifact = Reconciler::run(&self.frontend, &self.config, path, &fanout)?;
        let tree = self.frontend.parse(&self.config, path)?;
        let root = AstBuilder::new(&self.index, &fanout).build(path, &tree, artifact);

        Ok(ParsedUnit {
            path: path.to_string(),
            root,
            diagnostics: unit_sink.entries(),
        })
    }

    /// Build many units on rayon workers, each producing its own subtree, all
    /// registering into this session's shared index. Per-unit failures stay in
    /// their own slot.
    pub fn parse_units<S>(&self, paths: &[S]) -> Vec<Result<ParsedUnit>>
    where
        S: AsRef<str> + Sync,
    {
        paths
            .par_iter()
            .map(|path| self.parse_unit(path.as_ref()))
            .collect()
    }
}
