//! Reconciliation use case

mod reconcile;

pub use reconcile::Reconciler;
