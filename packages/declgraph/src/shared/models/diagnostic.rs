//! Diagnostics and the sink they flow into
//!
//! Frontends and the builder report through a [`DiagnosticSink`]. Sinks are purely
//! observational: they never influence control flow, and a noisy unit never aborts
//! its siblings.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::span::Location;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub file: Option<String>,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            file: None,
            location: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Severity::Debug, message)
    }
}

/// Sink for diagnostics emitted while processing a translation unit
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, diagnostic: Diagnostic) {
        let file = diagnostic.file.as_deref().unwrap_or("<unknown>");
        let line = diagnostic.location.map(|l| l.line).unwrap_or(0);
        match diagnostic.severity {
            Severity::Debug => {
                tracing::debug!(file, line, "{}", diagnostic.message)
            }
            Severity::Info => tracing::info!(file, line, "{}", diagnostic.message),
            Severity::Warning => {
                tracing::warn!(file, line, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(file, line, "{}", diagnostic.message)
            }
        }
    }
}

/// Collects diagnostics in memory, for embedders and tests
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn has_severity(&self, severity: Severity) -> bool {
        self.entries.lock().iter().any(|d| d.severity == severity)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn log(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}
