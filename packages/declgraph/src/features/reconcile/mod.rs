//! Source Reconciliation Unit
//!
//! Recovers what the cursor tree elides: macro definitions and expansion sites,
//! plus every documentation comment tagged by line and style.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::Reconciler;
pub use domain::{CommentStyle, DocCommentRecord, MacroRecord, ReconciliationArtifact};
