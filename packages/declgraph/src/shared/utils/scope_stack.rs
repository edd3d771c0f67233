//! Scope stack for qualified-name management
//!
//! Tracks nested named scopes during the cursor walk.

/// Scope stack producing `::`-qualified names
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<String>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Push a new scope
    pub fn push(&mut self, name: impl Into<String>) {
        self.scopes.push(name.into());
    }

    /// Pop the current scope
    pub fn pop(&mut self) -> Option<String> {
        self.scopes.pop()
    }

    /// Get the current qualified prefix
    pub fn qualified(&self) -> String {
        self.scopes.join("::")
    }

    /// Qualify a name against the current scope
    pub fn qualify(&self, name: &str) -> String {
        if self.scopes.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.qualified(), name)
        }
    }

    /// Current depth
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
