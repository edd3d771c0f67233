//! Frontend Adapter seam
//!
//! The compiler frontend is an external collaborator. This feature holds the
//! neutral cursor-tree model, the compile configuration, and the port adapters
//! implement.

pub mod domain;
pub mod ports;

pub use domain::{CompileConfig, Cursor, CursorKind, CursorTree, LanguageStandard};
pub use ports::{FrontendAdapter, MacroExpansionSite, PreprocessedSource};
