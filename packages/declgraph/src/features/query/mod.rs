//! Query layer: read-only traversal over built trees

mod visitor;

pub use visitor::{classes, collect_by, visit};
