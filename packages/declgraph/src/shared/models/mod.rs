//! Shared models

mod diagnostic;
mod id;
mod span;

pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use id::SymbolId;
pub use span::{Location, Span};
