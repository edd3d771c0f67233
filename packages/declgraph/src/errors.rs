//! Error types for declgraph
//!
//! Failures are scoped to one translation unit; processing one unit never aborts
//! its siblings, and the library never aborts the process.

use thiserror::Error;

/// Main error type for declgraph operations
#[derive(Debug, Error)]
pub enum DeclgraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The frontend could not produce a cursor tree
    #[error("frontend error: {0}")]
    Frontend(String),

    /// The frontend could not tokenize or preprocess the unit
    #[error("preprocess error: {0}")]
    Preprocess(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl DeclgraphError {
    pub fn frontend(msg: impl Into<String>) -> Self {
        DeclgraphError::Frontend(msg.into())
    }

    pub fn preprocess(msg: impl Into<String>) -> Self {
        DeclgraphError::Preprocess(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        DeclgraphError::Config(msg.into())
    }
}

/// Result type alias for declgraph operations
pub type Result<T> = std::result::Result<T, DeclgraphError>;
