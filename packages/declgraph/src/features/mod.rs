//! Feature modules
//!
//! Vertical slices of the build pipeline: frontend seam, reconciliation,
//! entity model, index, builder, query.

pub mod builder;
pub mod entity;
pub mod frontend;
pub mod index;
pub mod query;
pub mod reconcile;
