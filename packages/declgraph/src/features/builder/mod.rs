//! AST Builder
//!
//! Consumes the cursor tree plus the reconciliation artifact; produces the owned
//! entity tree and populates the Entity Index.

pub mod application;
pub mod infrastructure;

pub use application::AstBuilder;
