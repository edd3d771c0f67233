//! Compile configuration handed to the frontend
//!
//! An opaque set of recognized options; the frontend decides how to realize them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Source language standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageStandard {
    Cpp98,
    Cpp11,
    Cpp14,
    Cpp17,
    Cpp20,
    Cpp23,
}

impl LanguageStandard {
    pub fn as_flag(&self) -> &'static str {
        match self {
            LanguageStandard::Cpp98 => "c++98",
            LanguageStandard::Cpp11 => "c++11",
            LanguageStandard::Cpp14 => "c++14",
            LanguageStandard::Cpp17 => "c++17",
            LanguageStandard::Cpp20 => "c++20",
            LanguageStandard::Cpp23 => "c++23",
        }
    }
}

impl Default for LanguageStandard {
    fn default() -> Self {
        LanguageStandard::Cpp14
    }
}

/// Frontend compile configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Ordered include search paths
    pub include_paths: Vec<PathBuf>,
    /// Predefined macros, name to replacement
    pub defines: BTreeMap<String, String>,
    pub standard: LanguageStandard,
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    pub fn with_define(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defines.insert(name.into(), value.into());
        self
    }

    pub fn with_standard(mut self, standard: LanguageStandard) -> Self {
        self.standard = standard;
        self
    }
}
