//! Reconciliation domain records

mod records;

pub use records::{CommentStyle, DocCommentRecord, MacroRecord, ReconciliationArtifact};
