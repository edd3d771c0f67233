//! Builder infrastructure

mod doc_matcher;
mod macro_merge;

pub use doc_matcher::CommentTable;
pub use macro_merge::{MacroQueue, MergeItem};
