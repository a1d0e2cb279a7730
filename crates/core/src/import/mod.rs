//! Bulk import reconciliation.
//!
//! A candidate batch is partitioned against the full set of stored records
//! of the same kind into duplicates, conflicts and new records. Only a
//! conflict-free batch with at least one new record reaches the store.
//!
//! - [`record`]: the [`ImportRecord`] trait each record kind implements.
//! - [`reconcile`]: the pure partitioning step.
//! - [`result`]: the [`ImportResult`] report handed back to callers.
//! - [`service`]: the [`ImportRepository`] port and the
//!   [`import_records`] orchestrator.

pub mod reconcile;
pub mod record;
pub mod result;
pub mod service;

pub use reconcile::{reconcile, ExistingIndex, Partition, Reconciled};
pub use record::ImportRecord;
pub use result::{ImportResult, ImportStatus};
pub use service::{import_records, ImportError, ImportRepository};
