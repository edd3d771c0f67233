//! Shared utilities

mod scope_stack;

pub use scope_stack::ScopeStack;
