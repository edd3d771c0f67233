//! Pipeline orchestration

mod result;
mod session;

pub use result::ParsedUnit;
pub use session::ParseSession;
