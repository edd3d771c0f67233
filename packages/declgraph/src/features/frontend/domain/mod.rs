//! Frontend domain model

mod config;
mod cursor;

pub use config::{CompileConfig, LanguageStandard};
pub use cursor::{Cursor, CursorKind, CursorTree};
