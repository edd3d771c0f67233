//! Shared integration-test support

#![allow(dead_code)]

pub mod frontend;

use std::sync::Arc;

use declgraph::{CollectingSink, CompileConfig, Entity, EntityIndex, ParseSession, ParsedUnit};

use frontend::FixtureFrontend;

/// Parse a single in-memory unit, returning the built tree together with the
/// index and the diagnostics it produced.
pub fn parse_source(path: &str, source: &str) -> (ParsedUnit, Arc<EntityIndex>) {
    let frontend = FixtureFrontend::new().with_file(path, source);
    let sink = Arc::new(CollectingSink::new());
    let session = ParseSession::new(frontend, CompileConfig::default()).with_sink(sink);
    let unit = session
        .parse_unit(path)
        .unwrap_or_else(|e| panic!("fixture unit failed to parse: {e}"));
    let index = Arc::clone(session.index());
    (unit, index)
}

/// Child of `entity` by name, panicking with context on absence.
pub fn child<'a>(entity: &'a Entity, name: &str) -> &'a Arc<Entity> {
    entity.find_child(name).unwrap_or_else(|| {
        let have: Vec<_> = entity.children.iter().map(|c| c.name.as_str()).collect();
        panic!("no child named {name:?} under {:?}; have {have:?}", entity.name)
    })
}
