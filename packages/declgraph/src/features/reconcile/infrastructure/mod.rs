//! Reconciliation infrastructure

mod scanner;

pub use scanner::{scan_preprocessed, ScanOutput};
