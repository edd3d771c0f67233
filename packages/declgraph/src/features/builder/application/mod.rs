//! Tree-building use case

mod build_tree;

pub use build_tree::AstBuilder;
